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

use std::{fs, path::Path};
use serde::de::DeserializeOwned;
use thiserror::Error;

// generic config and data file loading. Configs are RON files (the normal format for anything that is
// edited by hand), data files can be either RON or JSON depending on their extension

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config serialize/deserialize RON error {0}")]
    RonSerdeError( #[from] ron::error::SpannedError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("invalid config {0}")]
    InvalidConfig(String),
}

/// load a RON config
pub fn load_config<C> (path: impl AsRef<Path>) -> Result<C> where C: DeserializeOwned {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn config_from_str<C> (s: &str) -> Result<C> where C: DeserializeOwned {
    Ok( ron::from_str(s)? )
}

/// load a data file as either JSON (".json" extension) or RON (anything else)
pub fn load_data_file<T> (path: impl AsRef<Path>) -> Result<T> where T: DeserializeOwned {
    let path = path.as_ref();
    let data = fs::read( path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok( serde_json::from_slice( data.as_slice())? ),
        _ => Ok( ron::de::from_bytes( data.as_slice())? )
    }
}
