// ABOUTME: Core data models for the TrailGuard simulator
// ABOUTME: Tracking state, risk types, trekker profile, and streamed telemetry records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Domain models shared across the TrailGuard workspace.

/// Risk factors, levels, and assessments
pub mod risk;
/// Tracking state, geo points, and streamed telemetry records
pub mod telemetry;
/// Trekker profile and registration types
pub mod trekker;

pub use risk::{RiskAssessment, RiskFactor, RiskLevel};
pub use telemetry::{ActivityType, GeoPoint, TelemetryRecord, TrackingState};
pub use trekker::{RegistrationRequest, TrekkerProfile};
