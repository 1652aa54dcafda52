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

use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use sgp4::{Constants, Elements, MinutesSinceEpoch};
use tracing::debug;
use cora_common::{cartesian3::Cartesian3, datetime::{julian_date, naive_to_utc}};
use crate::{tle::ElementSet, errors::{malformed_tle, CoraOrbitalError, PropagationFailure, Result}};

/// equatorial radius of the WGS72 earth model SGP4 uses [km]
pub const EARTH_RADIUS_KM: f64 = 6378.135;

/// SGP4 output in its native TEME frame, together with the instant and Julian date it was evaluated
/// for (the latter is required to rotate into our pseudo-inertial frame)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct TemeState {
    pub position: Cartesian3, // km
    pub velocity: Cartesian3, // km/s
    pub time: DateTime<Utc>,
    pub julian_date: f64,
    pub minutes_since_epoch: f64,
}

/// a decoded element set that can be evaluated at arbitrary instants.
/// Element decoding includes the checksum and column layout checks the tolerant parser skips
pub struct SgpPropagator {
    elements: Elements,
    constants: Constants,
    epoch: DateTime<Utc>,
}

impl SgpPropagator {
    pub fn new (element_set: &ElementSet) -> Result<Self> {
        let object_name = element_set.object_name().map( |n| n.to_string());
        let elements = Elements::from_tle( object_name, element_set.line1.as_bytes(), element_set.line2.as_bytes())
            .map_err( |e| malformed_tle!("element decoding failed: {e}"))?;
        Self::from_elements( elements)
    }

    /// initialize SGP4 for already decoded elements. Elements SGP4 cannot handle are a propagation error
    pub fn from_elements (elements: Elements) -> Result<Self> {
        let constants = Constants::from_elements( &elements)?;
        let epoch = naive_to_utc( &elements.datetime);

        Ok( SgpPropagator { elements, constants, epoch })
    }

    /// the instant at which the mean elements are valid
    pub fn epoch (&self)->DateTime<Utc> {
        self.epoch
    }

    pub fn norad_id (&self)->u64 {
        self.elements.norad_id
    }

    pub fn elements (&self)->&Elements {
        &self.elements
    }

    /// evaluate at the element set epoch. This is deterministic - the same TLE always yields the same state
    pub fn propagate (&self) -> Result<TemeState> {
        self.propagate_at( None)
    }

    /// evaluate at the given instant, or at the epoch if none is provided
    pub fn propagate_at (&self, when: Option<DateTime<Utc>>) -> Result<TemeState> {
        let (time, minutes) = match when {
            Some(t) => {
                let minutes = self.elements.datetime_to_minutes_since_epoch( &t.naive_utc())?;
                (t, minutes)
            }
            None => (self.epoch, MinutesSinceEpoch(0.0))
        };

        let prediction = self.constants.propagate( minutes)?;
        let position = Cartesian3::from_array( &prediction.position);
        let velocity = Cartesian3::from_array( &prediction.velocity);

        if !position.is_finite() || !velocity.is_finite() {
            return Err( CoraOrbitalError::NonFiniteState( format!("SGP4 result for {} at {time}", self.elements.norad_id)))
        }

        let r = position.length();
        if r < EARTH_RADIUS_KM {
            return Err( PropagationFailure::Decayed(r).into())
        }

        let julian_date = julian_date( &time);
        debug!("propagated {} to {} ({:.3} min since epoch): r={:.3} v={:.6}", self.elements.norad_id, time, minutes.0, position, velocity);

        Ok( TemeState { position, velocity, time, julian_date, minutes_since_epoch: minutes.0 })
    }
}

/// one-shot propagation of an element set to the given instant (or its own epoch)
pub fn propagate (element_set: &ElementSet, when: Option<DateTime<Utc>>) -> Result<TemeState> {
    SgpPropagator::new( element_set)?.propagate_at( when)
}
