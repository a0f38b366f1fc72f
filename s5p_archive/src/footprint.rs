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

//! footprint extraction from product file contents.
//!
//! The footprint is an enrichment, not a correctness critical field - every failure mode
//! here (reader capability compiled out, unreadable file, missing attribute, malformed
//! coordinate list) downgrades to "no footprint" and is never surfaced as an error.
//! The reader capability is the optional `gdal` cargo feature

use std::path::Path;

use tracing::warn;

use s5p_common::geo::{GeoPoint,GeoPolygon};

use crate::errors::Result;

/// internal product attribute addressing the exterior boundary coordinate list of the
/// observed footprint geometry
pub const FOOTPRINT_ATTR_PATH: &str =
    "/METADATA/EOP_METADATA/om_featureOfInterest/eop_multiExtentOf/gml_surfaceMembers/gml_exterior@gml_posList";

/// is the content reader capability compiled in
pub const fn footprint_reader_available ()->bool {
    cfg!(feature = "gdal")
}

/// try to extract the observed ground footprint from product file contents.
/// Returns None if the footprint is unavailable for whatever reason - a product without
/// readable footprint is still archivable
pub fn get_footprint (path: &Path)->Option<GeoPolygon> {
    if !footprint_reader_available() { return None }

    match read_footprint( path) {
        Ok(footprint) => footprint,
        Err(e) => {
            warn!("no footprint for {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(feature = "gdal")]
fn read_footprint (path: &Path)->Result<Option<GeoPolygon>> {
    use gdal::{Dataset,Metadata};

    // the netCDF driver flattens the group nesting of FOOTPRINT_ATTR_PATH into one
    // '_' joined metadata key with the attribute name behind '#'
    const FOOTPRINT_METADATA_KEY: &str =
        "METADATA_EOP_METADATA_om_featureOfInterest_eop_multiExtentOf_gml_surfaceMembers_gml_exterior#gml_posList";

    let dataset = Dataset::open( path)?;
    match dataset.metadata_item( FOOTPRINT_METADATA_KEY, "") {
        Some(pos_list) => parse_pos_list( &pos_list),
        None => Ok(None)
    } // dataset dropped here on all paths
}

#[cfg(not(feature = "gdal"))]
fn read_footprint (_path: &Path)->Result<Option<GeoPolygon>> {
    Ok(None)
}

/// parse the space separated, lat/lon interleaved coordinate sequence of a gml posList
/// attribute into a single ring polygon (ring closing is implicit in the source data).
/// An odd coordinate count means a malformed list and yields no footprint
pub fn parse_pos_list (pos_list: &str)->Result<Option<GeoPolygon>> {
    let coords: Vec<&str> = pos_list.split_ascii_whitespace().collect();
    if coords.is_empty() || coords.len() % 2 != 0 {
        return Ok(None)
    }

    let mut points: Vec<GeoPoint> = Vec::with_capacity( coords.len() / 2);
    for pair in coords.chunks(2) {
        let lat: f64 = pair[0].parse()?;
        let lon: f64 = pair[1].parse()?;
        points.push( GeoPoint::from_lon_lat_degrees( lon, lat));
    }
    Ok( Some( GeoPolygon::from_exterior_points( points)))
}
