// ABOUTME: Shared test utilities for TrailGuard integration tests
// ABOUTME: Deterministic engine construction with manual clocks and memory sinks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

//! Shared test utilities for `trailguard`
//!
//! Engines under test run with a seeded RNG, a manually-advanced clock, and
//! an in-memory sink so every tick is deterministic and observable.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use trailguard::clock::ManualClock;
use trailguard::config::SimulationConfig;
use trailguard::engine::SafetyEngine;
use trailguard::telemetry::MemorySink;

/// Midday instant used as the default test epoch (hour 12: outside dusk)
pub fn midday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Evening instant inside the dusk window (hour 20)
pub fn evening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Seeded configuration with auto-SOS off
pub fn test_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        ..SimulationConfig::default()
    }
}

/// Engine with a manual clock frozen at midday and a memory sink
pub fn test_engine(seed: u64) -> (SafetyEngine, Arc<ManualClock>, Arc<MemorySink>) {
    engine_with(test_config(seed))
}

/// Engine from an explicit configuration, with manual clock and memory sink
pub fn engine_with(config: SimulationConfig) -> (SafetyEngine, Arc<ManualClock>, Arc<MemorySink>) {
    let clock = Arc::new(ManualClock::starting_at(midday()));
    let sink = Arc::new(MemorySink::new());
    let engine = SafetyEngine::new(config, clock.clone(), sink.clone());
    (engine, clock, sink)
}

/// Engine with tracking already active at the configured base location
pub fn tracking_engine(seed: u64) -> (SafetyEngine, Arc<ManualClock>, Arc<MemorySink>) {
    let (mut engine, clock, sink) = test_engine(seed);
    let base = engine.config().base_location;
    engine.context_mut().tracking.location = base;
    engine.context_mut().tracking.is_tracking = true;
    (engine, clock, sink)
}
