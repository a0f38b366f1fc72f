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

//! support for the compact timestamp formats used in satellite product filenames.
//! All timestamps are UTC - product naming conventions do not carry zone offsets

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Utc};
use lazy_static::lazy_static;

/// compact filename timestamp, e.g. "20210305T012345"
pub const COMPACT_DATETIME_FMT: &str = "%Y%m%dT%H%M%S";

/// compact filename date, e.g. "20210305"
pub const COMPACT_DATE_FMT: &str = "%Y%m%d";

lazy_static! {
    // archive representable bounds used for open ended validity windows.
    // note these are deliberately not chrono's MIN_UTC/MAX_UTC, which lie outside
    // the years a "%Y" path segment can express
    static ref MIN_ARCHIVE_DATETIME: DateTime<Utc> =
        NaiveDate::from_ymd_opt(1,1,1).unwrap().and_time( NaiveTime::MIN).and_utc();
    static ref MAX_ARCHIVE_DATETIME: DateTime<Utc> =
        NaiveDate::from_ymd_opt(9999,12,31).unwrap().and_hms_opt(23,59,59).unwrap().and_utc();
}

/// lower bound for timestamps stored in the archive (0001-01-01T00:00:00Z)
#[inline]
pub fn min_datetime ()->DateTime<Utc> { *MIN_ARCHIVE_DATETIME }

/// upper bound for timestamps stored in the archive (9999-12-31T23:59:59Z)
#[inline]
pub fn max_datetime ()->DateTime<Utc> { *MAX_ARCHIVE_DATETIME }

#[inline]
pub fn is_min_datetime (dt: &DateTime<Utc>)->bool { *dt == *MIN_ARCHIVE_DATETIME }

#[inline]
pub fn is_max_datetime (dt: &DateTime<Utc>)->bool { *dt == *MAX_ARCHIVE_DATETIME }

/// strict parse of a 15 char compact timestamp ("YYYYMMDDTHHMMSS")
pub fn parse_compact_datetime (s: &str)->Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str( s, COMPACT_DATETIME_FMT).map(|ndt| ndt.and_utc())
}

/// strict parse of an 8 char compact date ("YYYYMMDD"), mapped to start-of-day UTC
pub fn parse_compact_date (s: &str)->Result<DateTime<Utc>, ParseError> {
    NaiveDate::parse_from_str( s, COMPACT_DATE_FMT).map(|d| d.and_time( NaiveTime::MIN).and_utc())
}

pub fn format_compact_datetime (dt: &DateTime<Utc>)->String {
    dt.format( COMPACT_DATETIME_FMT).to_string()
}

pub fn format_compact_date (dt: &DateTime<Utc>)->String {
    dt.format( COMPACT_DATE_FMT).to_string()
}

/// zero padded "YYYY" path segment
#[inline] pub fn year_segment (dt: &DateTime<Utc>)->String { dt.format("%Y").to_string() }

/// zero padded "MM" path segment
#[inline] pub fn month_segment (dt: &DateTime<Utc>)->String { dt.format("%m").to_string() }

/// zero padded "DD" path segment
#[inline] pub fn day_segment (dt: &DateTime<Utc>)->String { dt.format("%d").to_string() }
