// ABOUTME: Runtime configuration module for the TrailGuard simulator
// ABOUTME: Environment-variable driven settings with typed parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Runtime configuration, loaded from environment variables.

/// Environment-based configuration parsing
pub mod environment;

pub use environment::{AutoSosConfig, Environment, SimulationConfig};
