// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Environment-based configuration management.
//!
//! All tunables come from `TRAILGUARD_*` environment variables with sensible
//! simulation defaults; the CLI may override individual fields afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use trailguard_core::constants::{auto_sos, env_config, positioning};
use trailguard_core::models::GeoPoint;

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Auto-SOS gate configuration
///
/// The gate is an explicit, seedable probability rather than hidden
/// randomness: the risk classifier only schedules an automatic trigger when
/// the opt-in toggle is on and a draw from the engine's seeded RNG passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoSosConfig {
    /// Opt-in toggle; when off, `Danger` classifications never auto-trigger
    pub enabled: bool,
    /// Probability (0.0..=1.0) that a `Danger` cycle schedules the trigger
    pub probability: f64,
    /// Delay between scheduling and firing the automatic trigger
    pub delay: Duration,
}

impl Default for AutoSosConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            probability: auto_sos::DEFAULT_PROBABILITY,
            delay: Duration::from_secs(auto_sos::DEFAULT_DELAY_SECS),
        }
    }
}

/// Top-level simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// RNG seed; `None` means seed from entropy (non-reproducible run)
    pub seed: Option<u64>,
    /// Auto-SOS gate settings
    pub auto_sos: AutoSosConfig,
    /// Base point for synthetic positioning fixes
    pub base_location: GeoPoint,
    /// Total width of the synthetic fix scatter (degrees)
    pub position_variance: f64,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            auto_sos: AutoSosConfig::default(),
            base_location: GeoPoint::new(positioning::BASE_LAT, positioning::BASE_LNG),
            position_variance: positioning::VARIANCE_DEG,
            environment: Environment::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse or a probability
    /// falls outside `0.0..=1.0`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(seed) = env::var(env_config::SEED) {
            config.seed = Some(
                seed.parse::<u64>()
                    .with_context(|| format!("{} must be a u64", env_config::SEED))?,
            );
        }

        if let Ok(enabled) = env::var(env_config::AUTO_SOS_ENABLED) {
            config.auto_sos.enabled = parse_bool(&enabled)
                .with_context(|| format!("{} must be true or false", env_config::AUTO_SOS_ENABLED))?;
        }

        if let Ok(probability) = env::var(env_config::AUTO_SOS_PROBABILITY) {
            let value = probability.parse::<f64>().with_context(|| {
                format!("{} must be a float", env_config::AUTO_SOS_PROBABILITY)
            })?;
            anyhow::ensure!(
                (0.0..=1.0).contains(&value),
                "{} must be within 0.0..=1.0, got {value}",
                env_config::AUTO_SOS_PROBABILITY
            );
            config.auto_sos.probability = value;
        }

        if let Ok(delay) = env::var(env_config::AUTO_SOS_DELAY_SECS) {
            let secs = delay
                .parse::<u64>()
                .with_context(|| format!("{} must be a u64", env_config::AUTO_SOS_DELAY_SECS))?;
            config.auto_sos.delay = Duration::from_secs(secs);
        }

        if let Ok(lat) = env::var(env_config::BASE_LAT) {
            config.base_location.lat = lat
                .parse::<f64>()
                .with_context(|| format!("{} must be a float", env_config::BASE_LAT))?;
        }

        if let Ok(lng) = env::var(env_config::BASE_LNG) {
            config.base_location.lng = lng
                .parse::<f64>()
                .with_context(|| format!("{} must be a float", env_config::BASE_LNG))?;
        }

        if let Ok(environment) = env::var(env_config::ENVIRONMENT) {
            config.environment = Environment::from_str_or_default(&environment);
        }

        Ok(config)
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "env={} seed={} auto_sos={{enabled={}, p={:.2}, delay={}s}} base=({})",
            self.environment,
            self.seed
                .map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
            self.auto_sos.enabled,
            self.auto_sos.probability,
            self.auto_sos.delay.as_secs(),
            self.base_location,
        )
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized boolean value: {other}"),
    }
}
