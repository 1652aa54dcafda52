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

use cora_orbital::StateVector;
use cora_conjunction::{
    classify, simulate, ConjunctionConfig, RiskTier, SimulationParams,
    errors::CoraConjunctionError
};

fn state (p: [f64;3], v: [f64;3])->StateVector {
    StateVector::from_arrays( &p, &v)
}

fn one_hour ()->SimulationParams {
    SimulationParams::new( 3600, 60)
}

#[test]
fn test_identical_states () {
    let config = ConjunctionConfig::default();
    let a = state( [7000.0, 0.0, 0.0], [0.0, 7.5, 0.0]);

    let ca = simulate( &a, &a, &one_hour(), &config).unwrap();
    println!("{ca:?}");

    assert_eq!( ca.min_distance_km, 0.0);
    assert_eq!( ca.time_of_min_minutes(), 0.0);
    assert!( ca.collision);
    assert_eq!( classify( ca.min_distance_km, &config).tier, RiskTier::High);
}

#[test]
fn test_divergent_paths () {
    let config = ConjunctionConfig::default();
    let sat = state( [7000.0, 0.0, 0.0], [0.0, 7.5, 0.0]);
    let debris = state( [7020.0, 0.0, 0.0], [0.5, 7.5, 0.0]); // moving radially away

    let ca = simulate( &sat, &debris, &one_hour(), &config).unwrap();
    println!("{ca:?}");

    assert!( !ca.collision);
    assert!( (ca.min_distance_km - 20.0).abs() < 1e-9);
    assert_eq!( ca.time_of_min_secs, 0.0);
    assert_eq!( classify( ca.min_distance_km, &config).tier, RiskTier::Safe);
}

#[test]
fn test_orthogonal_motion () {
    let config = ConjunctionConfig::default();
    let sat = state( [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let debris = state( [0.0, 50.0, 0.0], [0.0, 0.0, 0.0]);

    let ca = simulate( &sat, &debris, &one_hour(), &config).unwrap();
    let risk = classify( ca.min_distance_km, &config);
    println!("{ca:?} -> {risk:?}");

    assert!( (ca.min_distance_km - 50.0).abs() < 1e-9);
    assert_eq!( ca.time_of_min_secs, 0.0);
    assert!( !ca.collision);
    assert_eq!( risk.tier, RiskTier::Safe);
    assert_eq!( risk.percent, 0.0);
}

#[test]
fn test_head_on () {
    let config = ConjunctionConfig::default();
    let sat = state( [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let debris = state( [100.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);

    let ca = simulate( &sat, &debris, &one_hour(), &config).unwrap();
    println!("{ca:?}");

    // objects meet at t=100s, between the 60s and 120s samples
    assert!( ca.collision);
    assert!( ca.min_distance_km < 1e-9);
    assert!( (ca.time_of_min_secs - 100.0).abs() < 1e-9);
    assert!( (ca.time_of_min_minutes() - 100.0/60.0).abs() < 1e-9);
    assert_eq!( classify( ca.min_distance_km, &config).percent, 100.0);
}

#[test]
fn test_sample_instants_only () {
    let config = ConjunctionConfig { refine_steps: false, ..Default::default() };
    let sat = state( [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let debris = state( [100.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);

    // closest sampled separation is 20 km at t=120s
    let ca = simulate( &sat, &debris, &one_hour(), &config).unwrap();
    println!("{ca:?}");
    assert!( !ca.collision);
    assert!( (ca.min_distance_km - 20.0).abs() < 1e-9);
    assert_eq!( ca.time_of_min_secs, 120.0);

    // with a step that hits t=100s we do see the collision
    let ca = simulate( &sat, &debris, &SimulationParams::new( 3600, 10), &config).unwrap();
    assert!( ca.collision);
    assert_eq!( ca.time_of_min_secs, 100.0);
}

#[test]
fn test_early_exit () {
    let config = ConjunctionConfig::default();
    let sat = state( [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let debris = state( [0.5, 0.0, 0.0], [-1.0, 0.0, 0.0]); // already within threshold

    let ca = simulate( &sat, &debris, &one_hour(), &config).unwrap();
    assert!( ca.collision);
    assert_eq!( ca.time_of_min_secs, 0.0);
    assert_eq!( ca.min_distance_km, 0.5);
}

#[test]
fn test_horizon_not_multiple_of_step () {
    let config = ConjunctionConfig { refine_steps: false, ..Default::default() };
    let sat = state( [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let debris = state( [200.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);

    // samples at 0,60,120 - the 150s horizon itself is not sampled
    let ca = simulate( &sat, &debris, &SimulationParams::new( 150, 60), &config).unwrap();
    assert_eq!( ca.time_of_min_secs, 120.0);
    assert!( (ca.min_distance_km - 80.0).abs() < 1e-9);
}

#[test]
fn test_invalid_params () {
    let config = ConjunctionConfig::default();
    let a = state( [7000.0, 0.0, 0.0], [0.0, 7.5, 0.0]);

    for params in [SimulationParams::new( 0, 60), SimulationParams::new( 3600, 0), SimulationParams::new( u32::MAX, 1)] {
        let res = simulate( &a, &a, &params, &config);
        println!("{params:?} -> {res:?}");
        assert!( matches!( res, Err(CoraConjunctionError::InvalidSimulationParameters(_))));
    }

    let small = ConjunctionConfig { max_samples: 100, ..Default::default() };
    assert!( SimulationParams::new( 6000, 60).validate( small.max_samples).is_ok());
    assert!( SimulationParams::new( 6060, 60).validate( small.max_samples).is_err());
    assert!( simulate( &a, &a, &SimulationParams::new( 3600, 1), &small).is_err());

    let nan = state( [f64::NAN, 0.0, 0.0], [0.0, 0.0, 0.0]);
    assert!( matches!( simulate( &a, &nan, &one_hour(), &config), Err(CoraConjunctionError::InvalidSimulationParameters(_))));
}

#[test]
fn test_unbounded_sample_limit () {
    let config = ConjunctionConfig { max_samples: u32::MAX, ..Default::default() };
    let sat = state( [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let debris = state( [100.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);

    let params = SimulationParams::new( u32::MAX, 1);
    assert_eq!( params.n_steps(), u32::MAX);

    let ca = simulate( &sat, &debris, &params, &config).unwrap();
    assert!( ca.collision);
    assert_eq!( ca.time_of_min_secs, 100.0);
}
