// ABOUTME: Unit tests for the rule-based risk classifier
// ABOUTME: Predicate evaluation, factor-count level mapping, and worked examples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard
#![allow(missing_docs)]

use trailguard::models::{RiskFactor, RiskLevel};
use trailguard::risk::{evaluate, is_dusk, RiskInputs};

fn inputs(hour: u32, altitude: f64, heart_rate: f64, speed: f64) -> RiskInputs {
    RiskInputs {
        hour,
        altitude,
        heart_rate,
        speed,
    }
}

#[test]
fn dusk_window_covers_evening_and_early_morning() {
    assert!(is_dusk(18));
    assert!(is_dusk(23));
    assert!(is_dusk(0));
    assert!(is_dusk(6));
    assert!(!is_dusk(7));
    assert!(!is_dusk(12));
    assert!(!is_dusk(17));
}

#[test]
fn all_factors_triggered_is_danger() {
    // hour=20, altitude=250, heartRate=110, speed=0.2 -> 3 factors -> danger
    let assessment = evaluate(&inputs(20, 250.0, 110.0, 0.2));
    assert_eq!(assessment.level, RiskLevel::Danger);
    assert_eq!(
        assessment.factors,
        vec![
            RiskFactor::Nightfall,
            RiskFactor::HighAltitude,
            RiskFactor::ElevatedHeartRateStationary,
        ]
    );
}

#[test]
fn no_factors_is_safe() {
    // hour=12, altitude=50, heartRate=70, speed=3 -> 0 factors -> safe
    let assessment = evaluate(&inputs(12, 50.0, 70.0, 3.0));
    assert_eq!(assessment.level, RiskLevel::Safe);
    assert!(assessment.factors.is_empty());
}

#[test]
fn single_factor_is_warning() {
    let assessment = evaluate(&inputs(20, 50.0, 70.0, 3.0));
    assert_eq!(assessment.level, RiskLevel::Warning);
    assert_eq!(assessment.factors, vec![RiskFactor::Nightfall]);
}

#[test]
fn two_factors_are_danger() {
    let assessment = evaluate(&inputs(20, 250.0, 70.0, 3.0));
    assert_eq!(assessment.level, RiskLevel::Danger);
    assert_eq!(assessment.factors.len(), 2);
}

#[test]
fn elevated_heart_rate_alone_is_not_a_factor_while_moving() {
    // HR above threshold but speed above stationary: predicate must not fire
    let assessment = evaluate(&inputs(12, 50.0, 110.0, 3.0));
    assert_eq!(assessment.level, RiskLevel::Safe);
}

#[test]
fn altitude_threshold_is_exclusive() {
    assert_eq!(evaluate(&inputs(12, 200.0, 70.0, 3.0)).level, RiskLevel::Safe);
    assert_eq!(
        evaluate(&inputs(12, 200.1, 70.0, 3.0)).level,
        RiskLevel::Warning
    );
}

#[test]
fn stationary_threshold_is_exclusive() {
    // speed exactly 0.5 counts as moving
    let assessment = evaluate(&inputs(12, 50.0, 110.0, 0.5));
    assert_eq!(assessment.level, RiskLevel::Safe);

    let assessment = evaluate(&inputs(12, 50.0, 110.0, 0.49));
    assert_eq!(assessment.level, RiskLevel::Warning);
}

#[test]
fn danger_holds_for_every_two_factor_combination() {
    let combos = [
        inputs(20, 250.0, 70.0, 3.0),  // nightfall + altitude
        inputs(20, 50.0, 110.0, 0.2),  // nightfall + elevated HR
        inputs(12, 250.0, 110.0, 0.2), // altitude + elevated HR
    ];
    for combo in combos {
        assert_eq!(evaluate(&combo).level, RiskLevel::Danger);
    }
}
