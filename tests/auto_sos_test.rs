// ABOUTME: Integration tests for the auto-SOS gate and scheduled trigger
// ABOUTME: Opt-in toggle, probability gate determinism, and deadline firing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{engine_with, evening, test_config};
use std::sync::Arc;
use trailguard::clock::{ManualClock, TimeSource};
use trailguard::config::SimulationConfig;
use trailguard::engine::SafetyEngine;
use trailguard::models::RiskLevel;
use trailguard::telemetry::MemorySink;

/// Engine in a guaranteed-danger posture: evening, high altitude, elevated
/// heart rate while stationary
fn danger_engine(config: SimulationConfig) -> (SafetyEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(evening()));
    let engine = SafetyEngine::new(config, clock.clone(), Arc::new(MemorySink::new()));
    (engine, clock)
}

fn put_in_danger(engine: &mut SafetyEngine) {
    let tracking = &mut engine.context_mut().tracking;
    tracking.is_tracking = true;
    tracking.altitude = 250.0;
    tracking.heart_rate = 110.0;
    tracking.speed = 0.2;
}

fn certain_auto_sos(seed: u64) -> SimulationConfig {
    let mut config = test_config(seed);
    config.auto_sos.enabled = true;
    config.auto_sos.probability = 1.0;
    config
}

#[test]
fn danger_with_certain_gate_schedules_a_trigger() {
    let (mut engine, clock) = danger_engine(certain_auto_sos(1));
    put_in_danger(&mut engine);

    let assessment = engine.assess_risk();
    assert_eq!(assessment.level, RiskLevel::Danger);

    let deadline = engine.context().pending_auto_sos.expect("trigger scheduled");
    assert_eq!(deadline, clock.now() + Duration::seconds(5));
}

#[test]
fn scheduled_trigger_fires_only_after_the_delay() {
    let (mut engine, clock) = danger_engine(certain_auto_sos(2));
    put_in_danger(&mut engine);
    engine.assess_risk();

    // Before the deadline: nothing fires
    clock.advance(Duration::seconds(4));
    assert!(!engine.poll_auto_sos());
    assert!(!engine.context().emergency.is_active());

    // At the deadline: the automatic trigger fires
    clock.advance(Duration::seconds(1));
    assert!(engine.poll_auto_sos());

    let ctx = engine.context();
    assert!(ctx.emergency.is_active());
    assert!(ctx.pending_auto_sos.is_none());
    let incident = ctx.emergency.incident().expect("incident open");
    assert!(incident.auto_triggered);
    assert!((120.0..140.0).contains(&ctx.tracking.heart_rate));
    assert!(ctx.tracking.speed.abs() < f64::EPSILON);
}

#[test]
fn opt_out_toggle_suppresses_the_gate_entirely() {
    let mut config = certain_auto_sos(3);
    config.auto_sos.enabled = false;

    let (mut engine, clock) = danger_engine(config);
    put_in_danger(&mut engine);

    let assessment = engine.assess_risk();
    assert_eq!(assessment.level, RiskLevel::Danger);
    assert!(engine.context().pending_auto_sos.is_none());

    clock.advance(Duration::seconds(60));
    assert!(!engine.poll_auto_sos());
    assert!(!engine.context().emergency.is_active());
}

#[test]
fn zero_probability_never_schedules() {
    let mut config = certain_auto_sos(4);
    config.auto_sos.probability = 0.0;

    let (mut engine, _clock) = danger_engine(config);
    put_in_danger(&mut engine);

    for _ in 0..100 {
        engine.assess_risk();
        assert!(engine.context().pending_auto_sos.is_none());
    }
}

#[test]
fn non_danger_levels_never_schedule() {
    let (mut engine, _clock) = danger_engine(certain_auto_sos(5));
    // Evening hour alone: one factor, warning
    let tracking = &mut engine.context_mut().tracking;
    tracking.is_tracking = true;
    tracking.altitude = 50.0;
    tracking.heart_rate = 70.0;
    tracking.speed = 3.0;

    let assessment = engine.assess_risk();
    assert_eq!(assessment.level, RiskLevel::Warning);
    assert!(engine.context().pending_auto_sos.is_none());
}

#[test]
fn active_emergency_blocks_rescheduling() {
    let (mut engine, _clock) = danger_engine(certain_auto_sos(6));
    put_in_danger(&mut engine);
    assert!(engine.trigger_emergency());

    engine.assess_risk();
    assert!(engine.context().pending_auto_sos.is_none());
}

#[test]
fn pending_trigger_is_not_rescheduled() {
    let (mut engine, clock) = danger_engine(certain_auto_sos(7));
    put_in_danger(&mut engine);

    engine.assess_risk();
    let deadline = engine.context().pending_auto_sos.expect("scheduled");

    clock.advance(Duration::seconds(2));
    engine.assess_risk();
    assert_eq!(
        engine.context().pending_auto_sos,
        Some(deadline),
        "second danger cycle must not move the deadline"
    );
}

#[test]
fn manual_trigger_clears_a_pending_auto_sos() {
    let (mut engine, clock) = danger_engine(certain_auto_sos(8));
    put_in_danger(&mut engine);
    engine.assess_risk();
    assert!(engine.context().pending_auto_sos.is_some());

    assert!(engine.trigger_emergency());
    assert!(engine.context().pending_auto_sos.is_none());

    // The stale deadline must not fire a second incident after cancel
    assert!(engine.cancel_emergency());
    clock.advance(Duration::seconds(30));
    assert!(!engine.poll_auto_sos());
}

#[test]
fn gate_draws_are_reproducible_across_seeded_runs() {
    let outcomes: Vec<bool> = (0..2)
        .map(|_| {
            let mut config = certain_auto_sos(99);
            config.auto_sos.probability = 0.5;
            let (mut engine, _clock) = danger_engine(config);
            put_in_danger(&mut engine);
            engine.assess_risk();
            engine.context().pending_auto_sos.is_some()
        })
        .collect();
    assert_eq!(outcomes[0], outcomes[1]);
}

#[test]
fn midday_engine_helper_reports_safe() {
    // Sanity-check the shared helper posture used by other suites
    let (mut engine, _clock, _sink) = engine_with(test_config(0));
    engine.context_mut().tracking.is_tracking = true;
    assert_eq!(engine.assess_risk().level, RiskLevel::Safe);
}
