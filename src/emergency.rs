// ABOUTME: Emergency (SOS) state machine with simulated rescue dispatch
// ABOUTME: Normal/Active transitions, panic vitals override, and dispatch timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Emergency state machine.
//!
//! Two states exist: `Normal` and `Active`. Activation (manual SOS or
//! auto-SOS) pins speed to zero, moves heart rate into the panic band, and
//! freezes normal telemetry drift; only an explicit confirmation returns the
//! session to `Normal`, restoring the resting heart rate baseline.
//! Re-triggering while already active is a no-op.
//!
//! Dispatch is simulated on a fixed timeline after activation: a response
//! team is assigned, then a rescue ETA window is published.

use crate::context::SimulationContext;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use trailguard_core::constants::{dispatch, vitals};
use trailguard_core::models::GeoPoint;
use uuid::Uuid;

/// Emergency flow state for one session
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum EmergencyState {
    /// No emergency; normal simulation regime
    #[default]
    Normal,
    /// SOS active; drift frozen and vitals pinned to the panic band
    Active(EmergencyIncident),
}

impl EmergencyState {
    /// True while an SOS is active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Borrow the active incident, if any
    #[must_use]
    pub const fn incident(&self) -> Option<&EmergencyIncident> {
        match self {
            Self::Normal => None,
            Self::Active(incident) => Some(incident),
        }
    }
}

/// Record of one SOS activation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyIncident {
    /// Unique incident identifier
    pub id: Uuid,
    /// When the SOS was activated
    pub activated_at: DateTime<Utc>,
    /// Last known position at activation
    pub location: GeoPoint,
    /// Whether the trigger came from the auto-SOS gate rather than the trekker
    pub auto_triggered: bool,
    /// Response team assigned by simulated dispatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_team: Option<String>,
    /// Published rescue ETA window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<EtaWindow>,
}

/// Rescue ETA window in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtaWindow {
    /// Earliest estimated arrival (minutes from publication)
    pub min_minutes: u32,
    /// Latest estimated arrival (minutes from publication)
    pub max_minutes: u32,
}

impl fmt::Display for EtaWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} minutes", self.min_minutes, self.max_minutes)
    }
}

/// Activate the SOS flow
///
/// Transition `Normal` -> `Active`: heart rate jumps to a uniform draw in the
/// panic band, speed drops to exactly zero, and an incident record is opened
/// at the last known location. Any pending auto-SOS deadline is cleared.
///
/// Returns `false` (leaving all state untouched) when an SOS is already
/// active.
pub fn trigger(
    ctx: &mut SimulationContext,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
    auto_triggered: bool,
) -> bool {
    if ctx.emergency.is_active() {
        return false;
    }

    ctx.tracking.heart_rate = rng.gen_range(vitals::HR_EMERGENCY_MIN..vitals::HR_EMERGENCY_MAX);
    ctx.tracking.speed = 0.0;
    ctx.pending_auto_sos = None;

    // Incident ids come from the caller's seeded RNG, not OS entropy, so a
    // seeded session replays byte-for-byte.
    let incident = EmergencyIncident {
        id: Uuid::from_u128(rng.gen()),
        activated_at: now,
        location: ctx.tracking.location,
        auto_triggered,
        response_team: None,
        eta: None,
    };
    warn!(
        incident_id = %incident.id,
        location = %incident.location,
        auto_triggered,
        "EMERGENCY SOS ACTIVATED"
    );
    ctx.emergency = EmergencyState::Active(incident);
    true
}

/// Cancel an active SOS after explicit confirmation
///
/// Transition `Active` -> `Normal`: restores the resting heart rate baseline
/// and resumes normal simulation. Returns `false` when no SOS is active.
pub fn cancel(ctx: &mut SimulationContext) -> bool {
    let EmergencyState::Active(incident) = &ctx.emergency else {
        return false;
    };

    info!(incident_id = %incident.id, "emergency alert cancelled by trekker");
    ctx.emergency = EmergencyState::Normal;
    ctx.tracking.heart_rate = vitals::HR_RESTING_BASELINE;
    true
}

/// Advance the simulated dispatch timeline for an active incident
///
/// A response team is assigned once the team-assignment delay has elapsed,
/// and an ETA window is published once the ETA delay has elapsed. Calling
/// this with no active incident is a no-op.
pub fn tick_dispatch(ctx: &mut SimulationContext, rng: &mut impl Rng, now: DateTime<Utc>) {
    let EmergencyState::Active(incident) = &mut ctx.emergency else {
        return;
    };
    let elapsed = now - incident.activated_at;

    if incident.response_team.is_none()
        && elapsed >= Duration::seconds(dispatch::TEAM_ASSIGN_DELAY_SECS as i64)
    {
        let team_number = rng.gen_range(1..=dispatch::TEAM_POOL_SIZE);
        let team = format!("Mountain Rescue Team #{team_number}");
        info!(incident_id = %incident.id, team = %team, "response team dispatched");
        incident.response_team = Some(team);
    }

    if incident.eta.is_none()
        && elapsed >= Duration::seconds(dispatch::ETA_PUBLISH_DELAY_SECS as i64)
    {
        let min_minutes = rng.gen_range(dispatch::ETA_MIN_MINUTES..dispatch::ETA_MAX_MINUTES);
        let eta = EtaWindow {
            min_minutes,
            max_minutes: min_minutes + dispatch::ETA_SPREAD_MINUTES,
        };
        info!(incident_id = %incident.id, eta = %eta, "rescue ETA published");
        incident.eta = Some(eta);
    }
}
