/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

/// this module provides the WGS84 surface geometries stored in product metadata records.
/// Following odin-rs design principles we build on the [geo](https://docs.rs/geo/latest/geo/index.html)
/// crate and use the Rust new type pattern to pin down the value semantics the foundation
/// crate leaves open - axis order (longitude = x, latitude = y, both in geodetic degrees)
/// and the serialized field layout the host archive indexes

use std::fmt::{self,Debug,Display};

use serde::{Serialize,Deserialize};
use serde::ser::{Serializer, SerializeStruct};
use serde::de::Deserializer;

use geo::{Coord, LineString, Point, Polygon};

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64)->Self {
        GeoPoint( Point::new( lon, lat))
    }

    pub fn longitude_degrees (&self)->f64 { self.0.x() }
    pub fn latitude_degrees (&self)->f64 { self.0.y() }

    pub fn point<'a> (&'a self)->&'a Point { &self.0 }
}

impl Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "(lon: {:.5}, lat: {:.5})", self.0.x(), self.0.y())
    }
}

#[derive(Serialize,Deserialize)]
struct LonLat { lon: f64, lat: f64 }

impl Serialize for GeoPoint {
    fn serialize<S: Serializer> (&self, serializer: S)->Result<S::Ok, S::Error> {
        LonLat { lon: self.0.x(), lat: self.0.y() }.serialize( serializer)
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D: Deserializer<'de>> (deserializer: D)->Result<Self, D::Error> {
        let ll = LonLat::deserialize( deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat))
    }
}

/* #endregion GeoPoint */

/* #region GeoPolygon **********************************************************************************************/

/// a wrapper for geo::Polygon restricted to a single exterior ring.
/// The ring is closed implicitly - callers pass the boundary points in order and do not
/// have to repeat the first point
#[derive(Debug,Clone,PartialEq)]
pub struct GeoPolygon(Polygon);

impl GeoPolygon {
    pub fn from_exterior_points (points: Vec<GeoPoint>)->Self {
        let exterior: LineString = points.iter()
            .map(|p| Coord { x: p.longitude_degrees(), y: p.latitude_degrees() })
            .collect();
        GeoPolygon( Polygon::new( exterior, Vec::with_capacity(0)))
    }

    pub fn exterior_points (&self)->Vec<GeoPoint> {
        self.0.exterior().points().map( GeoPoint::from_point).collect()
    }

    /// number of points of the (closed) exterior ring
    pub fn n_exterior_points (&self)->usize {
        self.0.exterior().points().count()
    }

    pub fn polygon<'a> (&'a self)->&'a Polygon { &self.0 }
}

impl GeoPoint {
    fn from_point (p: Point)->GeoPoint { GeoPoint(p) }
}

#[derive(Serialize,Deserialize)]
struct ExteriorRing { exterior: Vec<GeoPoint> }

impl Serialize for GeoPolygon {
    fn serialize<S: Serializer> (&self, serializer: S)->Result<S::Ok, S::Error> {
        ExteriorRing { exterior: self.exterior_points() }.serialize( serializer)
    }
}

impl<'de> Deserialize<'de> for GeoPolygon {
    fn deserialize<D: Deserializer<'de>> (deserializer: D)->Result<Self, D::Error> {
        let ring = ExteriorRing::deserialize( deserializer)?;
        Ok( GeoPolygon::from_exterior_points( ring.exterior))
    }
}

/* #endregion GeoPolygon */
