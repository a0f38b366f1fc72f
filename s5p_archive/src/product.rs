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

//! per product type classifier. One struct, three behavioral variants selected by the
//! [`ProductKind`] the registry resolved - there is no runtime type string inspection here

use std::path::{Path,PathBuf};

use chrono::{DateTime,TimeDelta,Utc};
use tracing::debug;

use s5p_common::datetime::{
    day_segment, is_min_datetime, min_datetime, max_datetime, month_segment,
    parse_compact_date, parse_compact_datetime, year_segment
};
use s5p_common::fs;

use crate::errors::{name_grammar_error, Result};
use crate::footprint::get_footprint;
use crate::naming::{
    NameAttrs, COLLECTION_FIELD, CREATION_DATE_FIELD, FILE_CLASS_FIELD, FILE_TYPE_FIELD,
    OPEN_VALIDITY_START, OPEN_VALIDITY_STOP, ORBIT_FIELD, PROCESSOR_VERSION_FIELD,
    VALIDITY_START_FIELD, VALIDITY_STOP_FIELD
};
use crate::{CoreMetadata, ProductKind, ProductMetadata, ProductTypeSpec, S5pAttributes,
            MISSION_NAMESPACE, NISE_FILE_TYPE};

/// root segment of all archive paths derived by this plugin
const ARCHIVE_ROOT: &str = "sentinel-5p";

/// file class recorded for legacy auxiliary products, which have no class in their names
const OPERATIONAL_FILE_CLASS: &str = "OPER";

/// classifier/extractor instance for one registered product type.
/// All operations are pure functions of their inputs - instances hold no mutable state
/// and are safe to use concurrently
#[derive(Debug,Clone)]
pub struct S5pProduct {
    spec: ProductTypeSpec,
}

impl S5pProduct {
    pub fn new (spec: &ProductTypeSpec)->Self {
        S5pProduct { spec: spec.clone() }
    }

    pub fn product_type (&self)->&str { &self.spec.product_type }

    pub fn kind (&self)->ProductKind { self.spec.kind }

    pub fn file_extension (&self)->&'static str { self.spec.grammar.extension() }

    /// products are stored flat, not grouped under a per-product directory
    pub fn uses_enclosing_directory (&self)->bool { false }

    /// the host computes and stores a content digest for each archived product
    pub fn uses_content_hash (&self)->bool { true }

    /// md5 for compatibility with archives created by older framework versions
    pub fn hash_algorithm (&self)->&'static str { "md5" }

    pub fn namespaces (&self)->&'static [&'static str] { &[MISSION_NAMESPACE] }

    /// does the given path set constitute a product of this type.
    /// This never fails - unrelated files are the expected input
    pub fn identify (&self, paths: &[PathBuf])->bool {
        if paths.len() != 1 { return false }
        match fs::filename( &paths[0]) {
            Some(filename) => self.spec.grammar.matches( filename),
            None => false
        }
    }

    /// extract the metadata record from a path set that passed [`Self::identify`].
    /// Calling this on an unidentified path set is a contract violation and fails with a
    /// grammar error rather than producing a partial record
    pub fn analyze (&self, paths: &[PathBuf], with_footprint: bool)->Result<ProductMetadata> {
        if paths.len() != 1 {
            return Err( name_grammar_error( &self.spec.product_type, format!("expected 1 path, got {}", paths.len())))
        }
        let path = &paths[0];
        let filename = fs::filename( path)
            .ok_or_else( || name_grammar_error( &self.spec.product_type, path.to_string_lossy()))?;
        let attrs = self.spec.grammar.parse( filename)
            .ok_or_else( || name_grammar_error( &self.spec.product_type, filename))?;

        debug!("analyzing {} as {}", filename, self.spec.product_type);

        match self.spec.kind {
            ProductKind::Standard => self.analyze_standard( path, filename, &attrs, with_footprint),
            ProductKind::GenericAux => self.analyze_auxiliary( filename, &attrs),
            ProductKind::LegacyAux => self.analyze_nise( filename, &attrs),
        }
    }

    /// derive the canonical relative archive path for an extracted metadata record.
    /// The path never includes the filename itself
    pub fn archive_path (&self, metadata: &ProductMetadata)->PathBuf {
        match self.spec.kind {
            ProductKind::Standard => {
                let start = &metadata.core.validity_start;
                [ ARCHIVE_ROOT,
                  metadata.s5p.file_type.as_str(),
                  metadata.s5p.file_class.as_str(),
                  year_segment(start).as_str(),
                  month_segment(start).as_str(),
                  day_segment(start).as_str()
                ].iter().collect()
            }
            // both auxiliary variants share the same layout rules
            ProductKind::GenericAux | ProductKind::LegacyAux => {
                auxiliary_archive_path( &metadata.s5p.file_type, &metadata.core.validity_start)
            }
        }
    }

    fn analyze_standard (&self, path: &Path, filename: &str, attrs: &NameAttrs, with_footprint: bool)->Result<ProductMetadata> {
        let core = CoreMetadata {
            product_name: product_name( filename),
            creation_date: parse_compact_datetime( attrs.field( CREATION_DATE_FIELD)?)?,
            validity_start: parse_compact_datetime( attrs.field( VALIDITY_START_FIELD)?)?,
            validity_stop: parse_compact_datetime( attrs.field( VALIDITY_STOP_FIELD)?)?,
            footprint: if with_footprint { get_footprint( path) } else { None },
        };
        let s5p = S5pAttributes {
            file_class: attrs.field( FILE_CLASS_FIELD)?.to_string(),
            file_type: attrs.field( FILE_TYPE_FIELD)?.to_string(),
            // the grammar only constrains widths - a non-digit here is a malformed name
            // that has to fail the operation, not silently turn into a default
            orbit: Some( attrs.field( ORBIT_FIELD)?.parse()?),
            collection: Some( attrs.field( COLLECTION_FIELD)?.parse()?),
            processor_version: Some( attrs.field( PROCESSOR_VERSION_FIELD)?.parse()?),
        };
        Ok( ProductMetadata { core, s5p } )
    }

    fn analyze_auxiliary (&self, filename: &str, attrs: &NameAttrs)->Result<ProductMetadata> {
        let start = attrs.field( VALIDITY_START_FIELD)?;
        let stop = attrs.field( VALIDITY_STOP_FIELD)?;

        let core = CoreMetadata {
            product_name: product_name( filename),
            creation_date: parse_compact_datetime( attrs.field( CREATION_DATE_FIELD)?)?,
            validity_start: if start == OPEN_VALIDITY_START { min_datetime() } else { parse_compact_datetime( start)? },
            validity_stop: if stop == OPEN_VALIDITY_STOP { max_datetime() } else { parse_compact_datetime( stop)? },
            footprint: None, // auxiliary products have no observed ground footprint
        };
        let s5p = S5pAttributes {
            file_class: attrs.field( FILE_CLASS_FIELD)?.to_string(),
            file_type: attrs.field( FILE_TYPE_FIELD)?.to_string(),
            orbit: None,
            collection: None,
            processor_version: None,
        };
        Ok( ProductMetadata { core, s5p } )
    }

    fn analyze_nise (&self, filename: &str, attrs: &NameAttrs)->Result<ProductMetadata> {
        let validity_start = parse_compact_date( attrs.field( VALIDITY_START_FIELD)?)?;

        let core = CoreMetadata {
            product_name: product_name( filename),
            // the legacy naming scheme has no creation timestamp of its own
            creation_date: validity_start,
            validity_start,
            validity_stop: validity_start + TimeDelta::days(1),
            footprint: None,
        };
        let s5p = S5pAttributes {
            file_class: OPERATIONAL_FILE_CLASS.to_string(),
            file_type: NISE_FILE_TYPE.to_string(),
            orbit: None,
            collection: None,
            processor_version: None,
        };
        Ok( ProductMetadata { core, s5p } )
    }
}

/// display name of a product - its filename without the extension
fn product_name (filename: &str)->String {
    fs::filestem( &filename).unwrap_or( filename).to_string()
}

/// archive layout shared by both auxiliary variants: flat under the file type for open
/// validity windows (no meaningful start date), month granularity otherwise
fn auxiliary_archive_path (file_type: &str, validity_start: &DateTime<Utc>)->PathBuf {
    let path = PathBuf::from( ARCHIVE_ROOT).join( file_type);
    if is_min_datetime( validity_start) {
        path
    } else {
        path.join( year_segment( validity_start)).join( month_segment( validity_start))
    }
}
