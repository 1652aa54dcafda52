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

use std::fs;
use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use cora_common::{angle::normalize_360, datetime::{parse_utc_datetime, short_utc_datetime_string}};
use cora_orbital::tle_to_state;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show TEME and pseudo-ECI state vectors of a TLE")]
pub struct Args {
    /// evaluation time (RFC3339 or 'YYYY-MM-DD HH:MM:SS' UTC), default is the TLE epoch
    #[arg(short,long)]
    pub time: Option<String>,

    /// file with 2- or 3-line element set
    pub tle_file: String
}

fn main()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let when = match &args.time {
        Some(spec) => Some( parse_utc_datetime(spec).ok_or_else( || anyhow!("invalid time spec {spec}"))?),
        None => None
    };

    let text = fs::read_to_string( &args.tle_file)?;
    let ts = tle_to_state( &text, when)?;

    if let Some(name) = ts.element_set.object_name() { println!("object:     {name}"); }
    if let Some(cat_no) = ts.element_set.catalog_number() { println!("catalog:    {cat_no}"); }
    println!("time:       {} (JD {:.6}, {:.3} min since epoch)", short_utc_datetime_string(&ts.time()), ts.teme.julian_date, ts.teme.minutes_since_epoch);
    println!("gmst:       {:.6} deg", normalize_360( ts.gmst.to_degrees()));
    println!("TEME r:     {:.3} km", ts.teme.position);
    println!("TEME v:     {:.6} km/s", ts.teme.velocity);
    println!("ECI r:      {:.3} km", ts.state.position);
    println!("ECI v:      {:.6} km/s", ts.state.velocity);

    Ok(())
}
