// ABOUTME: Unified error types for the TrailGuard simulation engine
// ABOUTME: Positioning, registration, configuration, and streaming failure variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! # Unified Error Handling
//!
//! Centralized error types for the TrailGuard platform. The simulation core is
//! mostly infallible by design (pure generation from seeded RNG draws); the
//! variants here cover the few real failure paths: positioning-source denial,
//! registration validation, configuration parsing, and telemetry serialization.

use thiserror::Error;

/// Result type alias used throughout the TrailGuard crates
pub type AppResult<T> = Result<T, AppError>;

/// Application error type covering all TrailGuard failure paths
#[derive(Debug, Error)]
pub enum AppError {
    /// The positioning source exists but refused to provide a fix
    /// (e.g., location permission denied on the device)
    #[error("positioning access denied by source '{source_name}'")]
    PositioningDenied {
        /// Name of the source that denied access
        source_name: String,
    },

    /// No positioning source is available at all
    #[error("positioning source unavailable: {reason}")]
    PositioningUnavailable {
        /// Human-readable description of why no fix could be obtained
        reason: String,
    },

    /// A registration field failed validation during onboarding
    #[error("invalid registration field '{field}': {reason}")]
    InvalidRegistration {
        /// Name of the offending field
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// A document scan operation was invoked in the wrong state
    #[error("document scan error: {0}")]
    DocumentScan(String),

    /// Configuration value missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Telemetry record could not be serialized for streaming
    #[error("telemetry serialization failed")]
    Serialization(#[from] serde_json::Error),

    /// The telemetry sink rejected a record
    #[error("telemetry sink unavailable: {0}")]
    SinkUnavailable(String),
}

impl AppError {
    /// Create a positioning-denied error for the named source
    #[must_use]
    pub fn positioning_denied(source_name: impl Into<String>) -> Self {
        Self::PositioningDenied {
            source_name: source_name.into(),
        }
    }

    /// Create a registration validation error
    #[must_use]
    pub fn invalid_registration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRegistration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True when the error is recoverable by falling back to synthetic data
    ///
    /// Positioning failures are the only recoverable class: the simulator
    /// substitutes synthetic coordinates and keeps running.
    #[must_use]
    pub const fn is_positioning_failure(&self) -> bool {
        matches!(
            self,
            Self::PositioningDenied { .. } | Self::PositioningUnavailable { .. }
        )
    }
}
