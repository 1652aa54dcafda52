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
use serde::{Deserialize,Serialize};
use cora_common::round_to_decimals;
use crate::config::ConjunctionConfig;

#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Serialize,Deserialize)]
pub enum RiskTier {
    Safe,
    Medium,
    High,
}

impl RiskTier {
    pub fn label (&self)->&'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Medium => "close approach",
            RiskTier::High => "collision likely",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub percent: f64,
}

pub fn classify_tier (min_distance_km: f64, config: &ConjunctionConfig)->RiskTier {
    if min_distance_km < config.collision_threshold_km {
        RiskTier::High
    } else if min_distance_km < config.medium_threshold_km {
        RiskTier::Medium
    } else {
        RiskTier::Safe
    }
}

/// linear risk score: 100% at zero separation, 0% at `scale_km` and beyond (rounded to 2 decimals)
pub fn risk_percent (min_distance_km: f64, scale_km: f64)->f64 {
    let p = ((scale_km - min_distance_km) / scale_km * 100.0).clamp( 0.0, 100.0);
    round_to_decimals( p, 2)
}

pub fn classify (min_distance_km: f64, config: &ConjunctionConfig)->RiskAssessment {
    RiskAssessment {
        tier: classify_tier( min_distance_km, config),
        percent: risk_percent( min_distance_km, config.risk_scale_km)
    }
}
