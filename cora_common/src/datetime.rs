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

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use crate::SECONDS_PER_DAY;

/// Julian date of the unix epoch (1970-01-01T00:00:00Z)
pub const JD_UNIX_EPOCH: f64 = 2440587.5;

/// Julian date of J2000.0 (2000-01-01T12:00:00 TT, used here as UT1 approximation)
pub const JD_J2000: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// interpret a naive datetime (e.g. a TLE epoch) as UTC
#[inline]
pub fn naive_to_utc (ndt: &NaiveDateTime)->DateTime<Utc> {
    Utc.from_utc_datetime(ndt)
}

/// split Julian date: the Julian day number of the preceding midnight (always ending in .5) and the
/// fraction of the day since then. Keeping both parts separate preserves sub-millisecond resolution
pub fn julian_date_parts<Tz:TimeZone> (dt: &DateTime<Tz>)->(f64,f64) {
    let days = dt.timestamp().div_euclid(86400);
    let secs_of_day = dt.timestamp().rem_euclid(86400) as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;

    (JD_UNIX_EPOCH + days as f64, secs_of_day / SECONDS_PER_DAY)
}

/// the combined Julian date of a datetime
pub fn julian_date<Tz:TimeZone> (dt: &DateTime<Tz>)->f64 {
    let (jd, fr) = julian_date_parts(dt);
    jd + fr
}

/// Julian centuries since J2000
#[inline]
pub fn julian_centuries_since_j2000 (jd: f64)->f64 {
    (jd - JD_J2000) / DAYS_PER_JULIAN_CENTURY
}

/// parse RFC3339 datetime specs (e.g. "2025-03-17T22:16:50Z") or naive ones ("2025-03-17 22:16:50"),
/// the latter being interpreted as UTC
pub fn parse_utc_datetime (s: &str)->Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_str(s, "%+") {
        return Some(dt.to_utc())
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some( naive_to_utc(&ndt))
        }
    }
    None
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
