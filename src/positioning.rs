// ABOUTME: Positioning sources with synthetic-coordinate fallback on denial
// ABOUTME: PositioningSource trait, synthetic and always-denied implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Positioning layer.
//!
//! A positioning source is consulted opportunistically for an initial fix.
//! Denial or absence is the system's only failure path: the engine logs a
//! warning and substitutes a synthetic fix, so the simulation always starts.

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use tracing::warn;
use trailguard_core::errors::{AppError, AppResult};
use trailguard_core::models::GeoPoint;

/// Source of position fixes (device GPS or a stand-in)
#[async_trait]
pub trait PositioningSource: Send + Sync {
    /// Source name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Obtain the current position
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PositioningDenied`] when the source refuses access
    /// or [`AppError::PositioningUnavailable`] when no fix can be produced.
    async fn current_position(&self) -> AppResult<GeoPoint>;
}

/// Synthetic positioning: uniform scatter around a base point
///
/// Owns its RNG so fixes are reproducible from the seed independently of the
/// engine's draw order.
#[derive(Debug)]
pub struct SyntheticPositioning {
    base: GeoPoint,
    variance: f64,
    rng: Mutex<ChaCha8Rng>,
}

impl SyntheticPositioning {
    /// Create a source scattering fixes around `base` within `variance`
    /// total degrees, seeded for reproducibility
    #[must_use]
    pub fn new(base: GeoPoint, variance: f64, seed: u64) -> Self {
        Self {
            base,
            variance,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Draw one synthetic fix
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PositioningUnavailable`] if the internal RNG lock
    /// is poisoned.
    pub fn random_fix(&self) -> AppResult<GeoPoint> {
        let mut rng = self.rng.lock().map_err(|_| AppError::PositioningUnavailable {
            reason: "Mutex poisoned: rng lock".into(),
        })?;
        let half = self.variance / 2.0;
        Ok(GeoPoint::new(
            self.base.lat + rng.gen_range(-half..half),
            self.base.lng + rng.gen_range(-half..half),
        ))
    }

    /// Base point around which fixes scatter
    #[must_use]
    pub const fn base(&self) -> GeoPoint {
        self.base
    }
}

#[async_trait]
impl PositioningSource for SyntheticPositioning {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn current_position(&self) -> AppResult<GeoPoint> {
        self.random_fix()
    }
}

/// Source that always denies access
///
/// Stands in for a device whose location permission was refused; used to
/// exercise the fallback path in tests and via the CLI `--no-gps` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedPositioning;

#[async_trait]
impl PositioningSource for DeniedPositioning {
    fn name(&self) -> &'static str {
        "device-gps"
    }

    async fn current_position(&self) -> AppResult<GeoPoint> {
        Err(AppError::positioning_denied(self.name()))
    }
}

/// Resolve an initial fix, falling back to synthetic coordinates
///
/// Consults `source` first; on a positioning failure logs the user-facing
/// warning and substitutes a draw from `fallback`. Returns the fix and
/// whether the fallback was used.
///
/// # Errors
///
/// Only fails when the fallback itself cannot produce a fix.
pub async fn resolve_fix(
    source: &dyn PositioningSource,
    fallback: &SyntheticPositioning,
) -> AppResult<(GeoPoint, bool)> {
    match source.current_position().await {
        Ok(fix) => Ok((fix, false)),
        Err(err) if err.is_positioning_failure() => {
            warn!(source = source.name(), %err, "location access denied - using simulated GPS");
            Ok((fallback.random_fix()?, true))
        }
        Err(err) => Err(err),
    }
}
