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

use std::fmt;
use chrono::{DateTime,Utc};
use serde::{Deserialize,Serialize};
use tracing::{debug,warn};
use cora_common::is_none;
use cora_orbital::{tle_to_state, StateVector};
use crate::errors::{CoraConjunctionError, Result};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum ObjectRole {
    Satellite,
    Debris,
}

impl ObjectRole {
    /// position of the object in per-object result arrays
    pub fn index (&self)->usize {
        match self {
            ObjectRole::Satellite => 0,
            ObjectRole::Debris => 1,
        }
    }
}

impl fmt::Display for ObjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectRole::Satellite => write!(f, "satellite"),
            ObjectRole::Debris => write!(f, "debris"),
        }
    }
}

/// what a caller can tell us about one object. A TLE takes precedence, the raw position (km) and
/// velocity (km/s) are the fallback in case there is no TLE or it cannot be turned into a state
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ObjectInput {
    #[serde(skip_serializing_if = "is_none")]
    pub tle: Option<String>,

    #[serde(skip_serializing_if = "is_none")]
    pub position: Option<[f64;3]>,

    #[serde(skip_serializing_if = "is_none")]
    pub velocity: Option<[f64;3]>,
}

impl ObjectInput {
    pub fn from_tle (tle: impl ToString)->Self {
        ObjectInput { tle: Some(tle.to_string()), ..Default::default() }
    }

    pub fn from_raw (position: [f64;3], velocity: [f64;3])->Self {
        ObjectInput { tle: None, position: Some(position), velocity: Some(velocity) }
    }

    pub fn with_raw (mut self, position: [f64;3], velocity: [f64;3])->Self {
        self.position = Some(position);
        self.velocity = Some(velocity);
        self
    }

    /// the TLE text if there is any that is not just whitespace
    pub fn tle_text (&self)->Option<&str> {
        self.tle.as_deref().filter( |s| !s.trim().is_empty())
    }

    pub fn has_raw (&self)->bool {
        self.position.is_some() && self.velocity.is_some()
    }

    /// the raw state if both position and velocity are given and finite
    pub fn raw_state (&self, role: ObjectRole) -> Result<StateVector> {
        match (&self.position, &self.velocity) {
            (Some(pos), Some(vel)) => {
                let state = StateVector::from_arrays( pos, vel);
                if state.is_finite() {
                    Ok(state)
                } else {
                    Err( CoraConjunctionError::InvalidRawFields( role, format!("non-finite components in {:?} {:?}", pos, vel)))
                }
            }
            _ => Err( CoraConjunctionError::MissingRawFields( role))
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum StateSource {
    Tle,
    Raw,
}

/// an object with a usable state. If the TLE failed and we fell back to raw coordinates the
/// reason is kept in `resolution_error`
#[derive(Debug,Clone)]
pub struct TrackedObject {
    pub role: ObjectRole,
    pub state: StateVector,
    pub source: StateSource,
    pub time: Option<DateTime<Utc>>, // evaluation instant (TLE derived states only)
    pub resolution_error: Option<String>,
}

impl TrackedObject {
    pub fn is_tle_derived (&self)->bool {
        self.source == StateSource::Tle
    }
}

/// turn an `ObjectInput` into a state vector. TLE problems are not fatal as long as there are raw
/// coordinates to fall back to, but we do remember what went wrong
pub fn resolve_object (role: ObjectRole, input: &ObjectInput, when: Option<DateTime<Utc>>) -> Result<TrackedObject> {
    let mut resolution_error: Option<String> = None;

    if let Some(text) = input.tle_text() {
        match tle_to_state( text, when) {
            Ok(tle_state) => {
                debug!("{} state from TLE {:?} at {}: {}", role, tle_state.element_set.catalog_number(), tle_state.time(), tle_state.state);
                return Ok( TrackedObject {
                    role,
                    state: tle_state.state,
                    source: StateSource::Tle,
                    time: Some( tle_state.time()),
                    resolution_error: None
                })
            }
            Err(e) => {
                warn!("{} TLE rejected, falling back to raw state: {}", role, e);
                resolution_error = Some( e.to_string());
            }
        }
    }

    let state = input.raw_state( role)?;
    debug!("{} state from raw input: {}", role, state);

    Ok( TrackedObject { role, state, source: StateSource::Raw, time: None, resolution_error })
}
