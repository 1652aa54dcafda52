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

use serde::{Deserialize,Serialize};
use tracing::debug;
use cora_common::SECONDS_PER_MINUTE;
use cora_orbital::StateVector;
use crate::config::ConjunctionConfig;
use crate::errors::{CoraConjunctionError, Result, invalid_params};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct SimulationParams {
    pub horizon_secs: u32,
    pub step_secs: u32,
}

impl SimulationParams {
    pub fn new (horizon_secs: u32, step_secs: u32)->Self {
        SimulationParams { horizon_secs, step_secs }
    }

    pub fn from_config (config: &ConjunctionConfig)->Self {
        SimulationParams { horizon_secs: config.default_horizon_secs, step_secs: config.default_step_secs }
    }

    /// number of steps after t=0 (the last sample is at or before the horizon)
    pub fn n_steps (&self)->u32 {
        if self.step_secs > 0 { self.horizon_secs / self.step_secs } else { 0 }
    }

    pub fn validate (&self, max_samples: u32) -> Result<()> {
        if self.horizon_secs == 0 {
            return Err( invalid_params!("horizon has to be positive"))
        }
        if self.step_secs == 0 {
            return Err( invalid_params!("step has to be positive"))
        }
        let n = self.n_steps();
        if n > max_samples {
            return Err( invalid_params!("horizon {}s with step {}s exceeds the sample limit ({} > {})",
                self.horizon_secs, self.step_secs, n, max_samples))
        }
        Ok(())
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct ClosestApproach {
    pub min_distance_km: f64,
    pub time_of_min_secs: f64,
    pub collision: bool,
}

impl ClosestApproach {
    pub fn time_of_min_minutes (&self)->f64 {
        self.time_of_min_secs / SECONDS_PER_MINUTE
    }
}

/// time and distance of the closest approach of two linearly moving objects within [t0,t1].
/// Returns `None` if there is no relative motion
fn closest_in_interval (a: &StateVector, b: &StateVector, t0: f64, t1: f64)->Option<(f64,f64)> {
    let dp = b.position - a.position;
    let dv = b.velocity - a.velocity;
    let vv = dv.length_squared();

    if vv > f64::EPSILON {
        let t = (-dp.dot(&dv) / vv).clamp( t0, t1);
        Some( (t, (dp + dv * t).length()) )
    } else {
        None
    }
}

/// step both objects along their velocity vectors from t=0 to the horizon and keep track of the
/// smallest separation. Stops at the first separation below the collision threshold.
/// Both states have to be in the same frame and refer to the same instant
pub fn simulate (a: &StateVector, b: &StateVector, params: &SimulationParams, config: &ConjunctionConfig) -> Result<ClosestApproach> {
    params.validate( config.max_samples)?;
    if !(a.is_finite() && b.is_finite()) {
        return Err( invalid_params!("non-finite state vector"))
    }

    let step = params.step_secs as f64;
    let threshold = config.collision_threshold_km;

    let mut min_distance_km = a.position.distance( &b.position);
    let mut time_of_min_secs = 0.0;
    let mut collision = min_distance_km < threshold;

    let mut n_steps = 0;
    if !collision {
        for k in 1..=params.n_steps() {
            let t = k as f64 * step;
            n_steps = k;

            if config.refine_steps {
                if let Some((tc,dc)) = closest_in_interval( a, b, t - step, t) {
                    if dc < min_distance_km {
                        min_distance_km = dc;
                        time_of_min_secs = tc;
                    }
                }
            }

            let d = a.position_at(t).distance( &b.position_at(t));
            if d < min_distance_km {
                min_distance_km = d;
                time_of_min_secs = t;
            }

            if min_distance_km < threshold {
                collision = true;
                break;
            }
        }
    }

    debug!("closest approach {:.3} km at {:.1}s after {} steps (collision: {})", min_distance_km, time_of_min_secs, n_steps, collision);
    Ok( ClosestApproach { min_distance_km, time_of_min_secs, collision })
}
