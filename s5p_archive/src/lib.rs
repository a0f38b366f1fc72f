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

//! archival framework plugin for Sentinel-5P mission products.
//!
//! Given candidate file paths this crate decides whether they constitute a product of a
//! registered type, extracts the archive metadata record from the standardized filename
//! (and optionally the footprint from file contents), and derives the canonical relative
//! archive path. The host framework drives it through [`product_types`],
//! [`product_type_plugin`] and the per-instance [`S5pProduct`] operations

use chrono::{DateTime,Utc};
use lazy_static::lazy_static;
use serde::{Deserialize,Serialize};

use s5p_common::geo::GeoPolygon;

mod errors;
pub use errors::*;

pub mod naming;
use naming::{auxiliary_grammar, nise_grammar, standard_grammar, NameGrammar};

mod product;
pub use product::*;

pub mod footprint;

/* #region product type catalog ***********************************************************************************/

/// level-1B file types (radiance per detector band, irradiance, calibration, engineering)
pub const L1_FILE_TYPES: [&str; 13] = [
    "L1B_RA_BD1",
    "L1B_RA_BD2",
    "L1B_RA_BD3",
    "L1B_RA_BD4",
    "L1B_RA_BD5",
    "L1B_RA_BD6",
    "L1B_RA_BD7",
    "L1B_RA_BD8",
    "L1B_IR_UVN",
    "L1B_IR_SIR",
    "L1B_CA_UVN",
    "L1B_CA_SIR",
    "L1B_ENG_DB",
];

/// level-2 file types (trace gas columns, clouds, aerosol)
pub const L2_FILE_TYPES: [&str; 16] = [
    "L2__AER_AI",
    "L2__AER_LH",
    "L2__CH4___",
    "L2__CLOUD_",
    "L2__CO____",
    "L2__FRESCO",
    "L2__HCHO__",
    "L2__NO2___",
    "L2__NP_BD3",
    "L2__NP_BD6",
    "L2__NP_BD7",
    "L2__O3_TCL",
    "L2__O3_TPR",
    "L2__O3__PR",
    "L2__O3____",
    "L2__SO2___",
];

/// processing timeliness classes of standard products
pub const FILE_CLASSES: [&str; 4] = [
    "NRTI",  // near-real time processing
    "OFFL",  // offline processing
    "RPRO",  // reprocessing
    "TEST",  // test
];

/// auxiliary file types. These have no processing class suffix in their product type ids
pub const AUX_FILE_TYPES: [&str; 10] = [
    "AUX_CTMANA",  // chemical transport model analysis
    "AUX_CTMFCT",  // chemical transport model forecast
    "AUX_ISRF__",  // instrument spectral response function (calibration)
    "AUX_MET_2D",  // meteo 2d fields
    "AUX_MET_QP",  // meteo vertical profiles
    "AUX_MET_TP",  // meteo temperature/pressure levels
    "AUX_NISE__",  // NSIDC near-real-time snow/ice extent (legacy naming)
    "CFG_CO____",  // CO processor configuration
    "CFG_NO2___",  // NO2 processor configuration
    "CFG_O3____",  // O3 processor configuration
];

/// the one auxiliary type that still uses the legacy NSIDC naming convention
pub const NISE_FILE_TYPE: &str = "AUX_NISE__";

/// file type prefix of processor configuration products (these use 'cfg' file extensions)
pub const CFG_PREFIX: &str = "CFG_";

const MISSION_PREFIX: &str = "S5P";

/* #endregion product type catalog */

/* #region metadata records ***************************************************************************************/

/// the core (mission independent) part of an extracted metadata record.
/// Validity timestamps are always populated - open ended auxiliary validity windows map
/// to the s5p_common::datetime archive min/max bounds
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CoreMetadata {
    /// filename without extension
    pub product_name: String,

    pub creation_date: DateTime<Utc>,
    pub validity_start: DateTime<Utc>,
    pub validity_stop: DateTime<Utc>,

    /// observed ground footprint, if content inspection was requested and succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footprint: Option<GeoPolygon>,
}

/// the mission specific 's5p' namespace part of an extracted metadata record.
/// The integer fields only exist for standard L1B/L2 products - they are absent
/// (not zero) for auxiliary products
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct S5pAttributes {
    pub file_class: String,
    pub file_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_version: Option<u32>,
}

/// the complete metadata record produced by [`S5pProduct::analyze`]
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ProductMetadata {
    pub core: CoreMetadata,
    pub s5p: S5pAttributes,
}

/* #endregion metadata records */

/* #region metadata namespace *************************************************************************************/

pub const MISSION_NAMESPACE: &str = "s5p";

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum FieldKind { Text, Integer }

/// schema entry of one 's5p' namespace field, as exposed to the host for search indexing
#[derive(Debug,Clone,Copy)]
pub struct NamespaceField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub indexed: bool,
}

/// the field catalog of the mission specific metadata namespace. All fields are
/// individually indexable by the host framework
pub fn namespace_fields ()->&'static [NamespaceField] {
    &[
        NamespaceField { name: "file_class", kind: FieldKind::Text, indexed: true },
        NamespaceField { name: "file_type", kind: FieldKind::Text, indexed: true },
        NamespaceField { name: "orbit", kind: FieldKind::Integer, indexed: true },
        NamespaceField { name: "collection", kind: FieldKind::Integer, indexed: true },
        NamespaceField { name: "processor_version", kind: FieldKind::Integer, indexed: true },
    ]
}

/* #endregion metadata namespace */

/* #region product type registry **********************************************************************************/

/// classifier variant of a product type, resolved once when the catalog is built
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum ProductKind {
    /// standard L1B/L2 products with orbit/collection/processor-version name fields
    Standard,

    /// auxiliary products using the generic S5P auxiliary naming convention
    GenericAux,

    /// the snow/ice auxiliary product using the legacy NSIDC naming convention
    LegacyAux,
}

/// static classification rules of one registered product type, including its
/// pre-compiled name grammar
#[derive(Debug,Clone)]
pub struct ProductTypeSpec {
    /// e.g. "S5P_L2__NO2____OFFL" or "S5P_AUX_CTMANA"
    pub product_type: String,

    pub kind: ProductKind,

    /// e.g. "L2__NO2___"
    pub file_type: String,

    /// pinned processing class - standard types only
    pub file_class: Option<String>,

    pub grammar: NameGrammar,
}

lazy_static! {
    static ref PRODUCT_CATALOG: Vec<ProductTypeSpec> = build_product_catalog();
}

// the catalog is static data - a malformed table entry is a build defect we want to
// surface on first registry access, not per analyzed file
fn build_product_catalog ()->Vec<ProductTypeSpec> {
    let n_standard = (L1_FILE_TYPES.len() + L2_FILE_TYPES.len()) * FILE_CLASSES.len();
    let mut catalog: Vec<ProductTypeSpec> = Vec::with_capacity( n_standard + AUX_FILE_TYPES.len());

    for file_type in L1_FILE_TYPES.iter().chain( L2_FILE_TYPES.iter()) {
        for file_class in FILE_CLASSES.iter() {
            catalog.push( ProductTypeSpec {
                product_type: format!("{}_{}_{}", MISSION_PREFIX, file_type, file_class),
                kind: ProductKind::Standard,
                file_type: file_type.to_string(),
                file_class: Some( file_class.to_string()),
                grammar: standard_grammar( file_class, file_type).expect("invalid standard product grammar"),
            });
        }
    }

    for file_type in AUX_FILE_TYPES.iter() {
        let spec = if *file_type == NISE_FILE_TYPE {
            ProductTypeSpec {
                product_type: format!("{}_{}", MISSION_PREFIX, file_type),
                kind: ProductKind::LegacyAux,
                file_type: file_type.to_string(),
                file_class: None,
                grammar: nise_grammar().expect("invalid NISE product grammar"),
            }
        } else {
            let extension = if file_type.starts_with( CFG_PREFIX) { "cfg" } else { "nc" };
            ProductTypeSpec {
                product_type: format!("{}_{}", MISSION_PREFIX, file_type),
                kind: ProductKind::GenericAux,
                file_type: file_type.to_string(),
                file_class: None,
                grammar: auxiliary_grammar( file_type, extension).expect("invalid auxiliary product grammar"),
            }
        };
        catalog.push( spec);
    }

    for spec in &catalog { validate_spec( spec) }
    catalog
}

fn validate_spec (spec: &ProductTypeSpec) {
    assert!( spec.file_type.len() == 10, "file type not 10 chars: {}", spec.file_type);
    assert!( spec.product_type.starts_with( MISSION_PREFIX), "product type without mission prefix: {}", spec.product_type);
    if let Some(file_class) = &spec.file_class {
        assert!( file_class.len() == 4, "file class not 4 chars: {}", file_class);
        assert!( spec.product_type.ends_with( file_class.as_str()), "product type without class suffix: {}", spec.product_type);
    }
}

/// the complete, statically known catalog of product type identifiers
pub fn product_types ()->Vec<String> {
    PRODUCT_CATALOG.iter().map( |spec| spec.product_type.clone()).collect()
}

/// look up the classifier instance for a product type identifier.
/// Returns None for unrecognized identifiers - the host uses this to distinguish
/// "no plugin for this type" from a plugin error
pub fn product_type_plugin (product_type: &str)->Option<S5pProduct> {
    PRODUCT_CATALOG.iter()
        .find( |spec| spec.product_type == product_type)
        .map( S5pProduct::new)
}

/* #endregion product type registry */
