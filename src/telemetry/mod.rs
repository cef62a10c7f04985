// ABOUTME: Synthetic telemetry generation and streaming for the simulator
// ABOUTME: Drift/vitals/battery ticks plus the sink and broker-link layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Telemetry simulation and streaming.

/// Per-tick synthetic state mutation (drift, vitals, battery)
pub mod simulator;
/// Telemetry sinks and the simulated broker link
pub mod streaming;

pub use streaming::{BrokerLink, LinkState, MemorySink, TelemetrySink, TracingSink};
