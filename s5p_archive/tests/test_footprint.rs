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

use std::path::Path;

use s5p_archive::footprint::{get_footprint, parse_pos_list};

#[test]
fn test_missing_file_yields_no_footprint() {
    // never an error, whatever the input
    assert!( get_footprint( Path::new("/no/such/dir/S5P_X.nc")).is_none());
}

#[test]
fn test_non_product_file_yields_no_footprint() {
    // a readable file that is not a structured scientific data file
    assert!( get_footprint( Path::new("Cargo.toml")).is_none());
}

#[test]
fn test_parse_pos_list() {
    // lat/lon interleaved, as stored in the product attribute
    let polygon = parse_pos_list("10.0 20.0 11.0 21.0 12.0 20.5").unwrap().unwrap();

    let points = polygon.exterior_points();
    assert_eq!( points.len(), 4); // 3 input points plus the implicit ring closing
    assert_eq!( points.first(), points.last());

    assert_eq!( points[0].longitude_degrees(), 20.0);
    assert_eq!( points[0].latitude_degrees(), 10.0);
}

#[test]
fn test_parse_pos_list_odd_count_is_malformed() {
    assert!( parse_pos_list("10.0 20.0 11.0").unwrap().is_none());
    assert!( parse_pos_list("").unwrap().is_none());
}

#[test]
fn test_parse_pos_list_non_numeric_fails() {
    // unlike an odd count this is a hard parse error - get_footprint downgrades it
    assert!( parse_pos_list("10.0 abc").is_err());
}
