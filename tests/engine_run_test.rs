// ABOUTME: Smoke tests for the scheduled simulation run loop
// ABOUTME: Bounded-duration runs, tick wiring, and post-run state sanity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard
#![allow(missing_docs)]

mod common;

use common::tracking_engine;
use std::time::Duration;

#[tokio::test]
async fn run_stops_when_the_duration_elapses() {
    let (mut engine, _clock, _sink) = tracking_engine(1);
    // Shorter than every tick period: the loop must exit on the deadline
    // without waiting for any interval to fire.
    engine
        .run(Some(Duration::from_millis(50)))
        .await
        .expect("bounded run");
}

#[tokio::test]
async fn run_drives_the_status_and_vitals_ticks() {
    let (mut engine, _clock, _sink) = tracking_engine(2);
    let battery_before = engine.context().tracking.battery;

    // Long enough for the 2s status refresh and 3s vitals tick to fire at
    // least once.
    engine
        .run(Some(Duration::from_millis(3_500)))
        .await
        .expect("bounded run");

    let tracking = &engine.context().tracking;
    assert!(tracking.battery < battery_before, "status refresh must drain");
    assert!((65.0..85.0).contains(&tracking.heart_rate), "vitals redrawn");
}

#[tokio::test]
async fn run_streams_records_while_tracking() {
    let (mut engine, _clock, sink) = tracking_engine(3);

    // Covers one 5s streaming period.
    engine
        .run(Some(Duration::from_millis(5_500)))
        .await
        .expect("bounded run");

    assert!(!sink.records().expect("records").is_empty());
}
