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
use cora_common::cartesian3::Cartesian3;

pub mod errors;
use errors::Result;

pub mod tle;
use tle::{parse_tle_block, ElementSet};

pub mod propagator;
use propagator::{SgpPropagator, TemeState};

pub mod frame;
use frame::{gmst_rad, teme_to_pseudo_eci};

/// position (km) and velocity (km/s) of an object at one instant, in one frame.
/// Neither frame nor instant are stored - they are implied by whoever produced the state and have to
/// be the same for all states that are compared with each other
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct StateVector {
    pub position: Cartesian3,
    pub velocity: Cartesian3,
}

impl StateVector {
    pub fn new (position: Cartesian3, velocity: Cartesian3)->Self {
        StateVector { position, velocity }
    }

    pub fn from_arrays (position: &[f64;3], velocity: &[f64;3])->Self {
        StateVector { position: Cartesian3::from_array(position), velocity: Cartesian3::from_array(velocity) }
    }

    pub fn is_finite (&self)->bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// straight line extrapolation of the position `t` seconds ahead
    pub fn position_at (&self, t: f64)->Cartesian3 {
        self.position + self.velocity * t
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector( r: {:.3} km, v: {:.6} km/s)", self.position, self.velocity)
    }
}

/// everything we derive from a TLE text block: the parsed element set, the raw SGP4 output and the
/// rotated pseudo-inertial state
#[derive(Debug,Clone)]
pub struct TleState {
    pub element_set: ElementSet,
    pub teme: TemeState,
    pub gmst: f64, // radians
    pub state: StateVector,
}

impl TleState {
    pub fn time (&self)->DateTime<Utc> {
        self.teme.time
    }
}

/// parse, propagate and rotate. Each step reports its own error, none of them is recovered here
pub fn tle_to_state (text: &str, when: Option<DateTime<Utc>>) -> Result<TleState> {
    let element_set = parse_tle_block( text)?;
    let teme = SgpPropagator::new( &element_set)?.propagate_at( when)?;
    let state = teme_to_pseudo_eci( &teme)?;
    let gmst = gmst_rad( teme.julian_date);

    Ok( TleState { element_set, teme, gmst, state })
}
