// ABOUTME: TrailGuard hiking-safety tracking simulation engine
// ABOUTME: Synthetic telemetry, rule-based risk classification, and SOS emergency flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

#![deny(unsafe_code)]

//! # TrailGuard
//!
//! A hiking-safety tracking simulation engine. TrailGuard models the backend
//! behaviors of a trekking-safety app — synthetic GPS and vitals telemetry,
//! a rule-based risk classifier, an SOS emergency state machine, onboarding
//! with a cosmetic decentralized identifier, and a simulated telemetry
//! streaming layer — without any real network, persistence, or hardware.
//!
//! Everything randomized draws from one seedable RNG, and every wall-clock
//! read goes through an injectable [`clock::TimeSource`], so whole sessions
//! replay deterministically under test.
//!
//! ## Architecture
//!
//! - [`context::SimulationContext`] holds all mutable session state; no
//!   hidden globals.
//! - [`engine::SafetyEngine`] owns the context, RNG, clock, and sink, and
//!   exposes synchronous per-concern tick methods plus an async scheduled
//!   run loop built on tokio intervals.
//! - Subsystem modules ([`telemetry`], [`risk`], [`emergency`], [`identity`],
//!   [`positioning`]) operate on the context they are handed.

/// Injectable time sources (system clock and manually-advanced test clock)
pub mod clock;
/// Environment-based runtime configuration
pub mod config;
/// Explicit simulation state container passed to each subsystem
pub mod context;
/// Emergency (SOS) state machine and dispatch simulation
pub mod emergency;
/// Simulation engine: tick methods and the scheduled run loop
pub mod engine;
/// Onboarding identity flow: registration, document scan, DID minting
pub mod identity;
/// Structured logging setup
pub mod logging;
/// Positioning sources and synthetic-coordinate fallback
pub mod positioning;
/// Rule-based risk classification and the auto-SOS gate
pub mod risk;
/// Synthetic telemetry generation and the streaming sink layer
pub mod telemetry;

// Re-export the foundation crate so downstream code can use
// `trailguard::models::*` and `trailguard::errors::*` directly.
pub use trailguard_core::constants;
pub use trailguard_core::errors;
pub use trailguard_core::models;

pub use engine::SafetyEngine;
pub use errors::{AppError, AppResult};
