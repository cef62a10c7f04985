// ABOUTME: Core types and constants for the TrailGuard hiking-safety simulator
// ABOUTME: Foundation crate with domain models, error handling, and simulation constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

#![deny(unsafe_code)]

//! # TrailGuard Core
//!
//! Foundation crate providing shared types and constants for the TrailGuard
//! hiking-safety simulation engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **constants**: Simulation bands, thresholds, and periods organized by domain
//! - **models**: Domain models (tracking state, risk, trekker profile, telemetry records)

/// Unified error handling for the TrailGuard platform
pub mod errors;

/// Simulation constants organized by domain
pub mod constants;

/// Core data models (tracking state, risk, trekker profile, telemetry)
pub mod models;

pub use errors::{AppError, AppResult};
