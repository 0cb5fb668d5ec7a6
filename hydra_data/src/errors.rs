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

pub type Result<T> = std::result::Result<T, HydraDataError>;

#[derive(Error,Debug)]
pub enum HydraDataError {

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config parse error {0}")]
    ConfigParseError( #[from] ron::error::SpannedError),

    #[error("{0} doesn't understand these files")]
    NotUnderstoodError( String ),

    #[error("no suitable data source found for: {0}")]
    NoSuitableSourceError( String ),

    #[error("unknown data source handler {0}")]
    UnknownHandlerError( String ),

    #[error("array not found {0}")]
    NoArrayError( String ),

    #[error("no data choice {0}")]
    NoChoiceError( String ),

    #[error("invalid subset {0}")]
    SubsetError( String ),

    #[error("operation failed {0}")]
    OpFailedError(String),
}

/// shorthand for creating OpFailedError values, also used by the instrument crates
#[macro_export]
macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::HydraDataError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}

pub fn no_array (name: impl ToString)->HydraDataError {
    HydraDataError::NoArrayError( name.to_string())
}

pub fn no_choice (name: impl ToString)->HydraDataError {
    HydraDataError::NoChoiceError( name.to_string())
}

pub fn not_understood (handler: impl ToString)->HydraDataError {
    HydraDataError::NotUnderstoodError( handler.to_string())
}
