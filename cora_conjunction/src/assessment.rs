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

use std::{fmt, path::Path};
use chrono::{DateTime,Utc};
use serde::{Deserialize,Serialize};
use tracing::{info,warn};
use cora_common::{is_none, config::load_data_file};
use crate::config::ConjunctionConfig;
use crate::errors::{CoraConjunctionError, Result};
use crate::resolver::{resolve_object, ObjectInput, ObjectRole};
use crate::simulator::{simulate, SimulationParams};
use crate::classifier::{classify, RiskTier};

/// a conjunction risk query for a satellite and a debris object. Horizon and step default to the
/// config values, the evaluation time defaults to the epoch of the first TLE that can be used
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub satellite: ObjectInput,
    pub debris: ObjectInput,

    #[serde(skip_serializing_if = "is_none")]
    pub horizon_secs: Option<u32>,

    #[serde(skip_serializing_if = "is_none")]
    pub step_secs: Option<u32>,

    #[serde(skip_serializing_if = "is_none")]
    pub evaluation_time: Option<DateTime<Utc>>,
}

impl AssessmentRequest {
    pub fn new (satellite: ObjectInput, debris: ObjectInput)->Self {
        AssessmentRequest { satellite, debris, ..Default::default() }
    }

    pub fn with_params (mut self, horizon_secs: u32, step_secs: u32)->Self {
        self.horizon_secs = Some(horizon_secs);
        self.step_secs = Some(step_secs);
        self
    }

    pub fn with_evaluation_time (mut self, date: DateTime<Utc>)->Self {
        self.evaluation_time = Some(date);
        self
    }

    /// read request from a JSON (".json") or RON file
    pub fn from_file (path: impl AsRef<Path>) -> Result<Self> {
        Ok( load_data_file( path)? )
    }

    pub fn from_json (s: &str) -> Result<Self> {
        Ok( serde_json::from_str( s)? )
    }

    pub fn from_ron (s: &str) -> Result<Self> {
        Ok( ron::from_str( s)? )
    }

    fn input (&self, role: ObjectRole)->&ObjectInput {
        match role {
            ObjectRole::Satellite => &self.satellite,
            ObjectRole::Debris => &self.debris,
        }
    }

    /// check everything we can check before resolving states and return the effective simulation parameters
    pub fn validate (&self, config: &ConjunctionConfig) -> Result<SimulationParams> {
        let params = SimulationParams::new(
            self.horizon_secs.unwrap_or( config.default_horizon_secs),
            self.step_secs.unwrap_or( config.default_step_secs)
        );
        params.validate( config.max_samples)?;

        for role in [ObjectRole::Satellite, ObjectRole::Debris] {
            let input = self.input( role);
            if input.tle_text().is_none() && !input.has_raw() {
                return Err( CoraConjunctionError::MissingRawFields( role))
            }
            if input.has_raw() {
                input.raw_state( role)?;
            }
        }

        Ok(params)
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AssessmentResult {
    pub min_distance_km: f64,
    pub time_of_min_minutes: f64,
    pub collision: bool,
    pub risk_tier: RiskTier,
    pub risk_percent: f64,

    /// non-fatal per object problems (satellite, debris), e.g. a rejected TLE we recovered from
    pub per_object_errors: [Option<String>;2],
}

impl AssessmentResult {
    pub fn error_for (&self, role: ObjectRole)->Option<&str> {
        self.per_object_errors[role.index()].as_deref()
    }

    pub fn has_errors (&self)->bool {
        self.per_object_errors.iter().any( |e| e.is_some())
    }

    pub fn to_json_pretty (&self) -> Result<String> {
        Ok( serde_json::to_string_pretty( self)? )
    }
}

impl fmt::Display for AssessmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%): closest approach {:.3} km after {:.2} min",
               self.risk_tier, self.risk_percent, self.min_distance_km, self.time_of_min_minutes)?;
        if self.collision {
            write!(f, ", collision threshold crossed")?;
        }
        Ok(())
    }
}

/// resolve both objects, simulate their relative motion and classify the result
pub fn assess (request: &AssessmentRequest, config: &ConjunctionConfig) -> Result<AssessmentResult> {
    let params = request.validate( config)?;

    let satellite = resolve_object( ObjectRole::Satellite, &request.satellite, request.evaluation_time)?;

    // without an explicit time the debris has to be evaluated at the same instant as a TLE derived satellite
    let debris_time = request.evaluation_time.or( satellite.time);
    let debris = resolve_object( ObjectRole::Debris, &request.debris, debris_time)?;

    if satellite.time.is_none() && debris.time.is_some() {
        warn!("satellite state is raw, debris state is evaluated at its TLE epoch {:?}", debris.time);
    }

    let approach = simulate( &satellite.state, &debris.state, &params, config)?;
    let risk = classify( approach.min_distance_km, config);
    info!("{} ({:.2}%) min distance {:.3} km at {:.1}s", risk.tier, risk.percent, approach.min_distance_km, approach.time_of_min_secs);

    Ok( AssessmentResult {
        min_distance_km: approach.min_distance_km,
        time_of_min_minutes: approach.time_of_min_minutes(),
        collision: approach.collision,
        risk_tier: risk.tier,
        risk_percent: risk.percent,
        per_object_errors: [satellite.resolution_error, debris.resolution_error],
    })
}
