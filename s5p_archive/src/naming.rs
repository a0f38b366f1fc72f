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

//! filename grammars of the Sentinel-5P naming conventions, see
//! https://earth.esa.int/web/sentinel/user-guides/sentinel-5p-tropomi/naming-convention
//!
//! A grammar is an ordered sequence of named field slots, underscore joined and terminated
//! by a recognized extension, compiled into one anchored regex per product type. Grammars
//! deliberately do not disambiguate across product types - the registry alone decides which
//! grammar is tried for a given file

use std::fmt::Write;
use regex::{Captures,Regex};

use crate::errors::{Result, S5pArchiveError};

/// validity start of auxiliary products with an open lower bound (wire exact sentinel)
pub const OPEN_VALIDITY_START: &str = "00000000T000000";

/// validity stop of auxiliary products with an open upper bound (wire exact sentinel)
pub const OPEN_VALIDITY_STOP: &str = "99999999T999999";

pub const FILE_CLASS_FIELD: &str = "file_class";
pub const FILE_TYPE_FIELD: &str = "file_type";
pub const VALIDITY_START_FIELD: &str = "validity_start";
pub const VALIDITY_STOP_FIELD: &str = "validity_stop";
pub const CREATION_DATE_FIELD: &str = "creation_date";
pub const ORBIT_FIELD: &str = "orbit";
pub const COLLECTION_FIELD: &str = "collection";
pub const PROCESSOR_VERSION_FIELD: &str = "processor_version";

/* #region name fields ********************************************************************************************/

/// one named slot of a product filename grammar.
/// Contents are only constrained by width/character class here - strict value parsing
/// happens in analyze(), after the grammar as a whole has matched
#[derive(Debug,Clone)]
pub enum NameField {
    /// fixed literal (mission, platform or sensor tag)
    Lit( &'static str ),

    /// 4 char file class. Standard product types pin the expected literal, auxiliary
    /// types accept any code
    FileClass( Option<String> ),

    /// file type literal, spliced from the product type identifier
    FileType( String ),

    /// 15 char compact timestamp ("YYYYMMDDTHHMMSS" shape)
    Timestamp( &'static str ),

    /// 8 char compact date ("YYYYMMDD")
    Date( &'static str ),

    /// 5 char orbit number
    Orbit,

    /// 2 char collection number
    Collection,

    /// 6 char processor version
    ProcessorVersion,
}

impl NameField {
    fn push_pattern (&self, pattern: &mut String) {
        use NameField::*;
        match self {
            Lit(lit) => pattern.push_str( &regex::escape(lit)),
            FileClass(Some(expected)) => { let _ = write!( pattern, "(?P<{}>{})", FILE_CLASS_FIELD, regex::escape(expected)); }
            FileClass(None) => { let _ = write!( pattern, "(?P<{}>[0-9A-Z]{{4}})", FILE_CLASS_FIELD); }
            FileType(expected) => { let _ = write!( pattern, "(?P<{}>{})", FILE_TYPE_FIELD, regex::escape(expected)); }
            Timestamp(name) => { let _ = write!( pattern, r"(?P<{}>[\dT]{{15}})", name); }
            Date(name) => { let _ = write!( pattern, r"(?P<{}>\d{{8}})", name); }
            Orbit => { let _ = write!( pattern, "(?P<{}>.{{5}})", ORBIT_FIELD); }
            Collection => { let _ = write!( pattern, "(?P<{}>.{{2}})", COLLECTION_FIELD); }
            ProcessorVersion => { let _ = write!( pattern, "(?P<{}>.{{6}})", PROCESSOR_VERSION_FIELD); }
        }
    }
}

/* #endregion name fields */

/* #region name grammar *******************************************************************************************/

/// an ordered sequence of underscore joined name fields plus file extension, compiled
/// into an anchored regex
#[derive(Debug,Clone)]
pub struct NameGrammar {
    fields: Vec<NameField>,
    extension: &'static str, // without leading '.', empty if the convention has none
    re: Regex,
}

impl NameGrammar {
    pub fn new (fields: Vec<NameField>, extension: &'static str)->Result<Self> {
        let mut pattern = String::with_capacity(160);
        pattern.push('^');
        for (i,field) in fields.iter().enumerate() {
            if i > 0 { pattern.push('_') }
            field.push_pattern( &mut pattern);
        }
        if !extension.is_empty() {
            let _ = write!( pattern, r"\.{}", regex::escape(extension));
        }
        pattern.push('$');

        let re = Regex::new( &pattern)?;
        Ok( NameGrammar { fields, extension, re } )
    }

    pub fn extension (&self)->&'static str { self.extension }

    pub fn n_fields (&self)->usize { self.fields.len() }

    /// does the given basename fully match this grammar
    pub fn matches (&self, filename: &str)->bool {
        self.re.is_match( filename)
    }

    /// parse the given basename into its name fields, None if it does not match
    pub fn parse<'a> (&self, filename: &'a str)->Option<NameAttrs<'a>> {
        self.re.captures( filename).map( |caps| NameAttrs { caps } )
    }
}

/// the field values of a successfully matched filename (borrowed from the input)
pub struct NameAttrs<'a> {
    caps: Captures<'a>,
}

impl<'a> NameAttrs<'a> {
    pub fn get (&self, name: &str)->Option<&'a str> {
        self.caps.name( name).map( |m| m.as_str())
    }

    /// accessor for fields the grammar guarantees - absence means the caller asked for a
    /// field this grammar variant does not have, which is a logic error we fail loudly on
    pub fn field (&self, name: &'static str)->Result<&'a str> {
        self.get( name).ok_or( S5pArchiveError::MissingNameFieldError( name))
    }
}

/* #endregion name grammar */

/* #region per-variant grammar constructors ***********************************************************************/

const MISSION: &str = "S5P";

// fixed literals of the legacy NISE snow/ice product names (NSIDC convention, not S5P)
const NISE_PRODUCT: &str = "NISE";
const NISE_SENSOR: &str = "SSMISF18";

/// grammar of standard L1B/L2 product filenames, e.g.
/// `S5P_OFFL_L2__NO2____20210305T012345_20210305T030456_17601_03_020400_20210306T121314.nc`
pub fn standard_grammar (file_class: &str, file_type: &str)->Result<NameGrammar> {
    NameGrammar::new( vec![
        NameField::Lit( MISSION),
        NameField::FileClass( Some(file_class.to_string())),
        NameField::FileType( file_type.to_string()),
        NameField::Timestamp( VALIDITY_START_FIELD),
        NameField::Timestamp( VALIDITY_STOP_FIELD),
        NameField::Orbit,
        NameField::Collection,
        NameField::ProcessorVersion,
        NameField::Timestamp( CREATION_DATE_FIELD),
    ], "nc")
}

/// grammar of generic auxiliary product filenames, e.g.
/// `S5P_OPER_AUX_CTMANA_20200201T000000_20200202T000000_20200131T103000.nc`
/// Open ended validity windows use the all-zeros / all-nines timestamp sentinels
pub fn auxiliary_grammar (file_type: &str, extension: &'static str)->Result<NameGrammar> {
    NameGrammar::new( vec![
        NameField::Lit( MISSION),
        NameField::FileClass( None),
        NameField::FileType( file_type.to_string()),
        NameField::Timestamp( VALIDITY_START_FIELD),
        NameField::Timestamp( VALIDITY_STOP_FIELD),
        NameField::Timestamp( CREATION_DATE_FIELD),
    ], extension)
}

/// grammar of the legacy NISE snow/ice auxiliary product, e.g. `NISE_SSMISF18_20200115.HDFEOS`
pub fn nise_grammar ()->Result<NameGrammar> {
    NameGrammar::new( vec![
        NameField::Lit( NISE_PRODUCT),
        NameField::Lit( NISE_SENSOR),
        NameField::Date( VALIDITY_START_FIELD),
    ], "HDFEOS")
}

/* #endregion per-variant grammar constructors */
