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

use cora_conjunction::{
    classify, ConjunctionConfig, RiskTier,
    classifier::{classify_tier, risk_percent}
};

#[test]
fn test_tier_boundaries () {
    let config = ConjunctionConfig::default();

    assert_eq!( classify_tier( 0.0, &config), RiskTier::High);
    assert_eq!( classify_tier( 0.999, &config), RiskTier::High);
    assert_eq!( classify_tier( 1.0, &config), RiskTier::Medium);
    assert_eq!( classify_tier( 9.999, &config), RiskTier::Medium);
    assert_eq!( classify_tier( 10.0, &config), RiskTier::Safe);
    assert_eq!( classify_tier( 500.0, &config), RiskTier::Safe);
}

#[test]
fn test_narrow_medium_threshold () {
    let config = ConjunctionConfig { medium_threshold_km: 5.0, ..Default::default() };

    assert_eq!( classify_tier( 4.99, &config), RiskTier::Medium);
    assert_eq!( classify_tier( 5.0, &config), RiskTier::Safe);
    assert_eq!( classify_tier( 7.5, &config), RiskTier::Safe);

    // percentage does not depend on the tier thresholds
    assert_eq!( classify( 7.5, &config).percent, 25.0);
}

#[test]
fn test_risk_percent () {
    assert_eq!( risk_percent( 0.0, 10.0), 100.0);
    assert_eq!( risk_percent( 2.5, 10.0), 75.0);
    assert_eq!( risk_percent( 10.0, 10.0), 0.0);
    assert_eq!( risk_percent( 50.0, 10.0), 0.0);

    let p = risk_percent( 3.333, 10.0);
    println!("3.333 km -> {p}%");
    assert!( (p - 66.67).abs() < 1e-9);

    let p = risk_percent( 1.23456, 10.0);
    assert!( (p - 87.65).abs() < 1e-9);
}

#[test]
fn test_labels () {
    assert_eq!( RiskTier::High.to_string(), "collision likely");
    assert_eq!( RiskTier::Medium.label(), "close approach");
    assert_eq!( RiskTier::Safe.label(), "safe");
    assert!( RiskTier::High > RiskTier::Medium && RiskTier::Medium > RiskTier::Safe);
}
