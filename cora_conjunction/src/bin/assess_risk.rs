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
use cora_common::datetime::parse_utc_datetime;
use cora_conjunction::{assess, AssessmentRequest, ConjunctionConfig, ObjectInput, ObjectRole};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "estimate short term collision risk between a satellite and a debris object")]
pub struct Args {
    /// RON config file (default is built-in config)
    #[arg(short,long)]
    pub config: Option<String>,

    /// request file (.json or .ron). Inline options override its values
    #[arg(short,long)]
    pub request: Option<String>,

    /// satellite TLE file
    #[arg(long)]
    pub sat_tle: Option<String>,

    /// satellite position x,y,z [km]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub sat_pos: Option<Vec<f64>>,

    /// satellite velocity x,y,z [km/s]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub sat_vel: Option<Vec<f64>>,

    /// debris TLE file
    #[arg(long)]
    pub debris_tle: Option<String>,

    /// debris position x,y,z [km]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub debris_pos: Option<Vec<f64>>,

    /// debris velocity x,y,z [km/s]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub debris_vel: Option<Vec<f64>>,

    /// simulation horizon [sec]
    #[arg(long)]
    pub horizon: Option<u32>,

    /// simulation step [sec]
    #[arg(long)]
    pub step: Option<u32>,

    /// evaluation time (RFC3339 or 'YYYY-MM-DD HH:MM:SS' UTC)
    #[arg(short,long)]
    pub time: Option<String>,

    /// print result as JSON
    #[arg(long)]
    pub json: bool,
}

fn vec3 (v: &Option<Vec<f64>>, what: &str) -> Result<Option<[f64;3]>> {
    match v {
        Some(v) => {
            let a: [f64;3] = v.as_slice().try_into().map_err( |_| anyhow!("{what} needs 3 comma separated values, got {}", v.len()))?;
            Ok(Some(a))
        }
        None => Ok(None)
    }
}

fn apply_inline (input: &mut ObjectInput, tle_file: &Option<String>, pos: &Option<Vec<f64>>, vel: &Option<Vec<f64>>, role: ObjectRole) -> Result<()> {
    if let Some(path) = tle_file {
        input.tle = Some( fs::read_to_string( path)?);
    }
    if let Some(p) = vec3( pos, &format!("{role} position"))? {
        input.position = Some(p);
    }
    if let Some(v) = vec3( vel, &format!("{role} velocity"))? {
        input.velocity = Some(v);
    }
    Ok(())
}

fn main()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConjunctionConfig::load( path)?,
        None => ConjunctionConfig::default()
    };

    let mut request = match &args.request {
        Some(path) => AssessmentRequest::from_file( path)?,
        None => AssessmentRequest::default()
    };

    apply_inline( &mut request.satellite, &args.sat_tle, &args.sat_pos, &args.sat_vel, ObjectRole::Satellite)?;
    apply_inline( &mut request.debris, &args.debris_tle, &args.debris_pos, &args.debris_vel, ObjectRole::Debris)?;

    if args.horizon.is_some() { request.horizon_secs = args.horizon; }
    if args.step.is_some() { request.step_secs = args.step; }
    if let Some(spec) = &args.time {
        request.evaluation_time = Some( parse_utc_datetime(spec).ok_or_else( || anyhow!("invalid time spec {spec}"))?);
    }

    let result = assess( &request, &config)?;

    if args.json {
        println!("{}", result.to_json_pretty()?);
    } else {
        println!("{result}");
        for role in [ObjectRole::Satellite, ObjectRole::Debris] {
            if let Some(err) = result.error_for( role) {
                println!("  {role}: used raw state ({err})");
            }
        }
    }

    Ok(())
}
