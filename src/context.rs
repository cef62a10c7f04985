// ABOUTME: Explicit simulation state container passed to each subsystem
// ABOUTME: Tracking state, emergency state, profile, broker link, and pending auto-SOS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Simulation context.
//!
//! The device app this simulator models kept its session state in
//! process-wide globals mutated by unsynchronized timer callbacks. Here the
//! whole session lives in one explicit [`SimulationContext`] owned by the
//! engine and handed to each subsystem, so mutation order is the tick order
//! and tests can inspect or seed any part of the state directly.

use crate::emergency::EmergencyState;
use crate::telemetry::BrokerLink;
use chrono::{DateTime, Utc};
use trailguard_core::constants::demo;
use trailguard_core::models::{GeoPoint, TrackingState, TrekkerProfile};

/// All mutable state for one simulated trekking session
#[derive(Debug, Clone, Default)]
pub struct SimulationContext {
    /// Live telemetry mutated by the simulator ticks
    pub tracking: TrackingState,
    /// Emergency flow state gating the simulation regime
    pub emergency: EmergencyState,
    /// Registered trekker, once onboarding has run
    pub profile: Option<TrekkerProfile>,
    /// Simulated ingestion-broker connectivity
    pub broker: BrokerLink,
    /// Deadline of a scheduled automatic SOS trigger, if one is pending
    pub pending_auto_sos: Option<DateTime<Utc>>,
}

impl SimulationContext {
    /// Fresh idle context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the scripted emergency scenario: a stationary trekker on a hill
    /// trail with a panic-level heart rate
    pub fn load_demo_scenario(&mut self) {
        self.tracking.location = GeoPoint::new(demo::HILL_TRAIL_LAT, demo::HILL_TRAIL_LNG);
        self.tracking.heart_rate = demo::PANIC_HEART_RATE;
        self.tracking.speed = 0.0;
        self.tracking.is_tracking = true;
    }

    /// Reset the session to the demo baseline around the given location
    ///
    /// Clears any emergency and pending auto-SOS, restores resting vitals and
    /// a fresh battery, and leaves tracking enabled.
    pub fn reset_demo(&mut self, location: GeoPoint) {
        self.emergency = EmergencyState::Normal;
        self.pending_auto_sos = None;
        self.tracking = TrackingState::demo_baseline(location);
    }
}
