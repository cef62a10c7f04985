// ABOUTME: Rule-based risk classification over current telemetry and time of day
// ABOUTME: Three equal-weight predicates, factor-count level mapping, and the auto-SOS gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Risk classifier.
//!
//! Three predicates are evaluated independently against current telemetry and
//! the hour of day; the count of satisfied predicates maps onto a three-level
//! risk enum. Classification itself is pure and deterministic.
//!
//! The auto-SOS side effect is separated out: when a cycle classifies as
//! `Danger`, no SOS is active, and the opt-in toggle is on, a draw from the
//! engine's seeded RNG against a configured probability decides whether an
//! automatic trigger is scheduled after a fixed delay. The original device
//! app buried this gate in hidden `Math.random()` calls; keeping it explicit
//! and seedable makes the safety decision reproducible under test.

use crate::config::AutoSosConfig;
use crate::context::SimulationContext;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, warn};
use trailguard_core::constants::{risk, vitals};
use trailguard_core::models::{RiskAssessment, RiskFactor, TrackingState};

/// Inputs to one classification cycle
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Altitude in meters
    pub altitude: f64,
    /// Heart rate in bpm
    pub heart_rate: f64,
    /// Ground speed in km/h
    pub speed: f64,
}

impl RiskInputs {
    /// Capture inputs from the current tracking state and clock hour
    #[must_use]
    pub fn capture(tracking: &TrackingState, hour: u32) -> Self {
        Self {
            hour,
            altitude: tracking.altitude,
            heart_rate: tracking.heart_rate,
            speed: tracking.speed,
        }
    }
}

/// Dusk-to-dawn window: evenings from 18:00 and early hours through 06:00
#[must_use]
pub fn is_dusk(hour: u32) -> bool {
    hour >= risk::DUSK_START_HOUR || hour <= risk::DAWN_END_HOUR
}

/// Evaluate all predicates and classify
///
/// Predicates are not mutually exclusive and carry equal weight:
/// 0 factors is `Safe`, 1 is `Warning`, 2 or more is `Danger`.
#[must_use]
pub fn evaluate(inputs: &RiskInputs) -> RiskAssessment {
    let mut factors = Vec::new();

    if is_dusk(inputs.hour) {
        factors.push(RiskFactor::Nightfall);
    }
    if inputs.altitude > risk::HIGH_ALTITUDE_M {
        factors.push(RiskFactor::HighAltitude);
    }
    if inputs.heart_rate > vitals::HR_ELEVATED_THRESHOLD
        && inputs.speed < risk::STATIONARY_SPEED_KMH
    {
        factors.push(RiskFactor::ElevatedHeartRateStationary);
    }

    let assessment = RiskAssessment::from_factors(factors);
    debug!(
        level = %assessment.level,
        factor_count = assessment.factors.len(),
        hour = inputs.hour,
        altitude = inputs.altitude,
        heart_rate = inputs.heart_rate,
        speed = inputs.speed,
        "risk assessment cycle"
    );
    assessment
}

/// Possibly schedule an automatic SOS trigger for a `Danger` classification
///
/// Schedules only when all of the following hold: the assessment is
/// `Danger`, no SOS is active, no trigger is already pending, the auto-SOS
/// opt-in is enabled, and the probability draw passes. Returns the scheduled
/// deadline when one was set.
pub fn maybe_schedule_auto_sos(
    assessment: &RiskAssessment,
    ctx: &mut SimulationContext,
    config: &AutoSosConfig,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if !assessment.is_danger()
        || ctx.emergency.is_active()
        || ctx.pending_auto_sos.is_some()
        || !config.enabled
    {
        return None;
    }
    if rng.gen::<f64>() >= config.probability {
        return None;
    }

    let deadline = now
        + chrono::Duration::from_std(config.delay)
            .unwrap_or_else(|_| chrono::Duration::seconds(0));
    warn!(
        %deadline,
        factors = assessment.factors.len(),
        "auto-SOS scheduled due to high risk factors"
    );
    ctx.pending_auto_sos = Some(deadline);
    Some(deadline)
}
