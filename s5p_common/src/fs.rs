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

//! borrowed-str accessors for filename components. Product naming conventions are
//! ASCII so a non-UTF8 path component simply means "not one of ours"

use std::path::Path;

/// last path component as &str, None if there is none or it is not valid UTF-8
pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then( |oss| oss.to_str())
}

/// filename without its (last) extension
pub fn filestem<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_stem().and_then( |oss| oss.to_str())
}

/// extension of the last path component (without the '.')
pub fn extension<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().extension().and_then( |oss| oss.to_str())
}
