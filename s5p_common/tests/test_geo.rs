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

use s5p_common::geo::{GeoPoint,GeoPolygon};

#[test]
fn test_geo_point_axis_order() {
    let p = GeoPoint::from_lon_lat_degrees( 6.9, 50.9);
    assert_eq!( p.longitude_degrees(), 6.9);
    assert_eq!( p.latitude_degrees(), 50.9);
}

#[test]
fn test_polygon_ring_is_closed() {
    let polygon = GeoPolygon::from_exterior_points( vec![
        GeoPoint::from_lon_lat_degrees( 0.0, 0.0),
        GeoPoint::from_lon_lat_degrees( 1.0, 0.0),
        GeoPoint::from_lon_lat_degrees( 1.0, 1.0),
    ]);

    // the exterior ring closes implicitly
    assert_eq!( polygon.n_exterior_points(), 4);
    let points = polygon.exterior_points();
    assert_eq!( points.first(), points.last());
}

#[test]
fn test_polygon_serde_round_trip() {
    let polygon = GeoPolygon::from_exterior_points( vec![
        GeoPoint::from_lon_lat_degrees( 6.0, 50.0),
        GeoPoint::from_lon_lat_degrees( 7.0, 50.0),
        GeoPoint::from_lon_lat_degrees( 7.0, 51.0),
    ]);

    let json = serde_json::to_string( &polygon).unwrap();
    println!("{json}");
    assert!( json.contains(r#""exterior""#));
    assert!( json.contains(r#""lon":6.0"#));
    assert!( json.contains(r#""lat":50.0"#));

    let restored: GeoPolygon = serde_json::from_str( &json).unwrap();
    assert_eq!( restored, polygon);
}
