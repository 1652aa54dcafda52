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

use crate::TWO_PI;

/// normalize degrees into [0..360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// normalize radians into [0..2π)
/// note that adding 2π to a tiny negative remainder can round up to 2π, which we map back to 0
#[inline]
pub fn normalize_two_pi (r: f64) -> f64 {
    let x = r % TWO_PI;
    let x = if x < 0.0 { x + TWO_PI } else { x };
    if x >= TWO_PI { 0.0 } else { x }
}

#[inline]
pub fn seconds_of_day_to_radians (secs: f64) -> f64 {
    secs * (TWO_PI / crate::SECONDS_PER_DAY)
}
