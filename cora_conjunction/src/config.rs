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

use std::path::Path;
use lazy_static::lazy_static;
use serde::{Deserialize,Serialize};
use cora_common::config::{load_config, ConfigError};
use crate::errors::Result;

/// the tunable parameters of conjunction simulation and risk classification.
/// Missing fields in config files are filled in from `Default`
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ConjunctionConfig {
    /// separation below which we flag a collision and stop simulating [km]
    pub collision_threshold_km: f64,

    /// separation below which we report a close approach [km] (some deployments use 5.0)
    pub medium_threshold_km: f64,

    /// separation at which the risk percentage drops to 0 [km]
    pub risk_scale_km: f64,

    pub default_horizon_secs: u32,
    pub default_step_secs: u32,

    /// upper bound for horizon/step to protect against pathological requests
    pub max_samples: u32,

    /// also check the exact closest approach of the linear motion between two samples
    pub refine_steps: bool,
}

impl Default for ConjunctionConfig {
    fn default()->Self {
        ConjunctionConfig {
            collision_threshold_km: 1.0,
            medium_threshold_km: 10.0,
            risk_scale_km: 10.0,
            default_horizon_secs: 3600,
            default_step_secs: 60,
            max_samples: 100_000,
            refine_steps: true,
        }
    }
}

impl ConjunctionConfig {
    /// load and validate a RON config file
    pub fn load (path: impl AsRef<Path>) -> Result<Self> {
        let config: ConjunctionConfig = load_config( path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate (&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive( self.collision_threshold_km) {
            return Err( invalid_config( format!("collision_threshold_km must be positive: {}", self.collision_threshold_km)))
        }
        if !positive( self.medium_threshold_km) || self.medium_threshold_km < self.collision_threshold_km {
            return Err( invalid_config( format!("medium_threshold_km must be >= collision_threshold_km: {}", self.medium_threshold_km)))
        }
        if !positive( self.risk_scale_km) {
            return Err( invalid_config( format!("risk_scale_km must be positive: {}", self.risk_scale_km)))
        }
        if self.default_horizon_secs == 0 || self.default_step_secs == 0 || self.max_samples == 0 {
            return Err( invalid_config( "default_horizon_secs, default_step_secs and max_samples have to be > 0".to_string()))
        }
        Ok(())
    }
}

fn invalid_config (msg: String)->crate::errors::CoraConjunctionError {
    ConfigError::InvalidConfig(msg).into()
}

lazy_static! {
    /// process wide read-only defaults, used if callers do not load their own config
    pub static ref DEFAULT_CONFIG: ConjunctionConfig = ConjunctionConfig::default();
}
