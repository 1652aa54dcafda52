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

use nalgebra::Matrix3;
use cora_common::{
    angle::{normalize_two_pi, seconds_of_day_to_radians},
    cartesian3::Cartesian3,
    datetime::julian_centuries_since_j2000,
    cos, sin, pow2, pow3, SECONDS_PER_DAY
};
use crate::{StateVector, propagator::TemeState, errors::{CoraOrbitalError, Result}};

// TEME to pseudo-inertial frame conversion.
// This is a pure sidereal rotation about the polar axis - precession, nutation and polar motion are
// ignored. That is adequate to compare two objects that are rotated with the same convention over a
// short horizon, but not for absolute positions

/// Greenwich Mean Sidereal Time in radians [0..2π) for a given (UT1) Julian date.
/// IAU 1982 series truncated to cubic terms
pub fn gmst_rad (jd_ut1: f64)->f64 {
    let t = julian_centuries_since_j2000( jd_ut1);
    let gmst_sec = 67310.54841
        + (876600.0 * 3600.0 + 8640184.812866) * t
        + 0.093104 * pow2(t)
        - 6.2e-6 * pow3(t);

    normalize_two_pi( seconds_of_day_to_radians( gmst_sec % SECONDS_PER_DAY))
}

/// rotation about the Z axis by angle theta (radians)
pub fn r3 (theta: f64)->Matrix3<f64> {
    let c = cos(theta);
    let s = sin(theta);

    Matrix3::new(
          c,   s, 0.0,
         -s,   c, 0.0,
        0.0, 0.0, 1.0
    )
}

pub fn rotate_z (v: &Cartesian3, theta: f64)->Cartesian3 {
    v.transformed( &r3(theta))
}

/// rotate both position and velocity of a TEME state by the GMST angle of its Julian date
pub fn teme_to_pseudo_eci (teme: &TemeState) -> Result<StateVector> {
    let rot = r3( gmst_rad( teme.julian_date));
    let sv = StateVector::new( teme.position.transformed(&rot), teme.velocity.transformed(&rot));

    if sv.is_finite() {
        Ok(sv)
    } else {
        Err( CoraOrbitalError::NonFiniteState( format!("rotated state at JD {}", teme.julian_date)))
    }
}
