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

use std::f64::consts::{PI as STD_PI};

pub mod angle;
pub mod cartesian3;
pub mod datetime;
pub mod config;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }
#[inline(always)] pub fn pow3(x:f64) -> f64 { x*x*x }

// a global fn that can be used with serde(skip_serializing_if="cora_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }

/// round to given number of decimals (used for reported percentages)
#[inline]
pub fn round_to_decimals (x: f64, decimals: i32)->f64 {
    let f = 10f64.powi(decimals);
    (x * f).round() / f
}

pub const PI: f64 = STD_PI;
pub const HALF_PI: f64 = PI / 2.0;
pub const TWO_PI: f64 = PI * 2.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;
