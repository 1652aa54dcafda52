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
use crate::resolver::ObjectRole;

pub type Result<T> = std::result::Result<T, CoraConjunctionError>;

#[derive(Error,Debug)]
pub enum CoraConjunctionError {

    /// no usable state for an object: no (working) TLE and no raw position/velocity to fall back to
    #[error("missing raw position/velocity for {0}")]
    MissingRawFields( ObjectRole ),

    #[error("invalid raw state for {0}: {1}")]
    InvalidRawFields( ObjectRole, String ),

    #[error("invalid simulation parameters: {0}")]
    InvalidSimulationParameters( String ),

    #[error("config error {0}")]
    ConfigError( #[from] cora_common::config::ConfigError ),

    #[error("serde error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),
}

macro_rules! invalid_params {
    ($fmt:literal $(, $arg:expr )* ) => {
        CoraConjunctionError::InvalidSimulationParameters( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_params;
