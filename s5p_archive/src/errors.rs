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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, S5pArchiveError>;

#[derive(Error,Debug)]
pub enum S5pArchiveError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("file not parseable by {0} name grammar: {1}")]
    NameGrammarError( String, String ),

    #[error("name grammar compile error {0}")]
    GrammarCompileError( #[from] regex::Error),

    #[error("missing name field {0}")]
    MissingNameFieldError( &'static str ),

    #[error("timestamp parse error {0}")]
    TimestampError( #[from] chrono::ParseError),

    #[error("integer field parse error {0}")]
    IntFieldError( #[from] std::num::ParseIntError),

    #[error("float field parse error {0}")]
    FloatFieldError( #[from] std::num::ParseFloatError),

    // pass through for errors in the optional gdal reader capability
    #[cfg(feature = "gdal")]
    #[error("gdal error {0}")]
    GdalError( #[from] gdal::errors::GdalError),
}

pub fn name_grammar_error (product_type: &str, input: impl ToString)->S5pArchiveError {
    S5pArchiveError::NameGrammarError( product_type.to_string(), input.to_string())
}
