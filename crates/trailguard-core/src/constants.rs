// ABOUTME: Simulation constants organized by domain (vitals, battery, drift, risk, periods)
// ABOUTME: Pure data constants for the TrailGuard hiking-safety simulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Constants module
//!
//! Simulation bands, thresholds, and schedule periods grouped into logical
//! domains rather than a single large file. Every band here mirrors the
//! observable behavior of the device app the simulator stands in for.

/// Heart rate simulation bands (beats per minute)
pub mod vitals {
    /// Lower bound of the normal-regime heart rate draw
    pub const HR_NORMAL_MIN: f64 = 65.0;
    /// Upper bound (exclusive) of the normal-regime heart rate draw
    pub const HR_NORMAL_MAX: f64 = 85.0;
    /// Lower bound of the emergency-regime heart rate draw
    pub const HR_EMERGENCY_MIN: f64 = 120.0;
    /// Upper bound (exclusive) of the emergency-regime heart rate draw
    pub const HR_EMERGENCY_MAX: f64 = 140.0;
    /// Baseline heart rate restored when an emergency is cancelled
    pub const HR_RESTING_BASELINE: f64 = 72.0;
    /// Heart rate above which the risk classifier considers HR elevated
    pub const HR_ELEVATED_THRESHOLD: f64 = 100.0;
}

/// Battery drain model
pub mod battery {
    /// Battery percentage at session start
    pub const START_PERCENT: f64 = 95.0;
    /// Fixed drain applied on each status refresh
    pub const DRAIN_PER_REFRESH: f64 = 0.1;
    /// Battery never reports below this floor; the tracker reserves the
    /// remainder for the emergency beacon
    pub const FLOOR_PERCENT: f64 = 20.0;
}

/// Location drift and movement bands
pub mod drift {
    /// Total width of the per-tick uniform coordinate perturbation
    /// (each tick moves lat/lng by a draw in ±`COORDINATE_VARIATION` / 2)
    pub const COORDINATE_VARIATION: f64 = 0.0001;
    /// Lower bound of the speed draw (km/h)
    pub const SPEED_MIN_KMH: f64 = 1.0;
    /// Upper bound (exclusive) of the speed draw (km/h)
    pub const SPEED_MAX_KMH: f64 = 6.0;
    /// Lower bound of the altitude draw (meters)
    pub const ALTITUDE_MIN_M: f64 = 100.0;
    /// Upper bound (exclusive) of the altitude draw (meters)
    pub const ALTITUDE_MAX_M: f64 = 150.0;
    /// Heading draw upper bound (degrees, exclusive)
    pub const DIRECTION_MAX_DEG: f64 = 360.0;
}

/// Risk classifier thresholds
pub mod risk {
    /// Hour of day (inclusive) at which dusk begins
    pub const DUSK_START_HOUR: u32 = 18;
    /// Hour of day (inclusive) up to which it is still dark
    pub const DAWN_END_HOUR: u32 = 6;
    /// Altitude above which the high-altitude factor triggers (meters)
    pub const HIGH_ALTITUDE_M: f64 = 200.0;
    /// Speed below which the trekker counts as stationary (km/h)
    pub const STATIONARY_SPEED_KMH: f64 = 0.5;
    /// Factor count at or above which the level is `Danger`
    pub const DANGER_FACTOR_COUNT: usize = 2;
}

/// Activity classification speed bands (km/h)
pub mod activity {
    /// Minimum speed to count as walking
    pub const WALKING_MIN_KMH: f64 = 0.5;
    /// Minimum speed to count as hiking
    pub const HIKING_MIN_KMH: f64 = 2.0;
    /// Minimum speed to count as running
    pub const RUNNING_MIN_KMH: f64 = 6.0;
}

/// Schedule periods for the simulation tick loops
pub mod periods {
    /// Location drift tick period (seconds)
    pub const DRIFT_SECS: u64 = 5;
    /// Heart rate redraw period (seconds)
    pub const VITALS_SECS: u64 = 3;
    /// Status refresh (battery drain) period (seconds)
    pub const STATUS_REFRESH_SECS: u64 = 2;
    /// Risk assessment period (seconds)
    pub const RISK_ASSESSMENT_SECS: u64 = 10;
    /// Telemetry streaming period (seconds)
    pub const STREAMING_SECS: u64 = 5;
    /// Broker link health-check period (seconds)
    pub const BROKER_CHECK_SECS: u64 = 15;
    /// Document scan progress step period (milliseconds)
    pub const SCAN_STEP_MILLIS: u64 = 300;
}

/// Auto-SOS gate defaults
///
/// The original device app hid a hard-coded random gate inside the risk
/// assessment. Here the gate is an explicit, seedable probability so the
/// safety decision stays reproducible under test.
pub mod auto_sos {
    /// Default probability that a `Danger` classification schedules auto-SOS
    pub const DEFAULT_PROBABILITY: f64 = 0.05;
    /// Default delay between scheduling and firing the automatic trigger
    pub const DEFAULT_DELAY_SECS: u64 = 5;
}

/// Synthetic positioning defaults
pub mod positioning {
    /// Base latitude for synthetic fixes (Chennai, Tamil Nadu)
    pub const BASE_LAT: f64 = 13.0827;
    /// Base longitude for synthetic fixes
    pub const BASE_LNG: f64 = 80.2707;
    /// Total width of the uniform scatter around the base point (degrees)
    pub const VARIANCE_DEG: f64 = 0.1;
}

/// Emergency dispatch simulation timing
pub mod dispatch {
    /// Seconds after activation at which a response team is assigned
    pub const TEAM_ASSIGN_DELAY_SECS: u64 = 2;
    /// Seconds after activation at which the rescue ETA is published
    pub const ETA_PUBLISH_DELAY_SECS: u64 = 4;
    /// Lower bound of the ETA window draw (minutes)
    pub const ETA_MIN_MINUTES: u32 = 8;
    /// Upper bound (exclusive) of the ETA window draw (minutes)
    pub const ETA_MAX_MINUTES: u32 = 15;
    /// Width of the published ETA window (minutes)
    pub const ETA_SPREAD_MINUTES: u32 = 3;
    /// Number of rescue teams in the simulated dispatch pool
    pub const TEAM_POOL_SIZE: u32 = 9;
}

/// Broker link (telemetry ingestion stand-in) simulation
pub mod broker {
    /// Probability per health check that the link degrades
    pub const DEGRADE_PROBABILITY: f64 = 0.05;
    /// Seconds a degraded link spends reconnecting before recovery
    pub const RECONNECT_SECS: u64 = 3;
}

/// Document scan simulation phases (progress percentages)
pub mod scan {
    /// Progress at which OCR begins (below it the scanner is still
    /// detecting the document)
    pub const OCR_STARTS_AT: f64 = 30.0;
    /// Progress at which field extraction begins
    pub const EXTRACTING_STARTS_AT: f64 = 60.0;
    /// Scan completion threshold
    pub const COMPLETE_AT: f64 = 100.0;
    /// Lower bound of the per-step progress increment
    pub const STEP_MIN: f64 = 5.0;
    /// Upper bound (exclusive) of the per-step progress increment
    pub const STEP_MAX: f64 = 20.0;
}

/// Identity (DID) generation
pub mod identity {
    /// Prefix of every generated decentralized identifier
    pub const DID_PREFIX: &str = "did:ethr:0x";
    /// Number of random bytes rendered as hex after the prefix
    pub const DID_RANDOM_BYTES: usize = 16;
}

/// Demo scenario fixtures
pub mod demo {
    /// Hill-trail latitude used by the scripted emergency scenario
    pub const HILL_TRAIL_LAT: f64 = 13.1234;
    /// Hill-trail longitude used by the scripted emergency scenario
    pub const HILL_TRAIL_LNG: f64 = 80.2567;
    /// Panic-level heart rate seeded by the scripted scenario
    pub const PANIC_HEART_RATE: f64 = 140.0;
    /// Baseline speed restored on demo reset (km/h)
    pub const RESET_SPEED_KMH: f64 = 1.2;
    /// Baseline altitude restored on demo reset (meters)
    pub const RESET_ALTITUDE_M: f64 = 120.0;
    /// Baseline heading restored on demo reset (degrees)
    pub const RESET_DIRECTION_DEG: f64 = 180.0;
}

/// Environment variable names for runtime configuration
pub mod env_config {
    /// RNG seed for deterministic runs
    pub const SEED: &str = "TRAILGUARD_SEED";
    /// Auto-SOS opt-in toggle ("true"/"false")
    pub const AUTO_SOS_ENABLED: &str = "TRAILGUARD_AUTO_SOS";
    /// Auto-SOS gate probability override (0.0..=1.0)
    pub const AUTO_SOS_PROBABILITY: &str = "TRAILGUARD_AUTO_SOS_PROBABILITY";
    /// Auto-SOS trigger delay override (seconds)
    pub const AUTO_SOS_DELAY_SECS: &str = "TRAILGUARD_AUTO_SOS_DELAY_SECS";
    /// Synthetic positioning base latitude override
    pub const BASE_LAT: &str = "TRAILGUARD_BASE_LAT";
    /// Synthetic positioning base longitude override
    pub const BASE_LNG: &str = "TRAILGUARD_BASE_LNG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Standard tracing filter variable
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "TRAILGUARD_ENV";
}

/// Service identity for structured logging
pub mod service_names {
    /// Canonical service name emitted with every structured log record
    pub const TRAILGUARD: &str = "trailguard";
}
