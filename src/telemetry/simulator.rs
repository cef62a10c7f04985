// ABOUTME: Interval-driven synthetic telemetry generation (drift, vitals, battery)
// ABOUTME: Pure RNG-driven state mutation with no failure modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Telemetry simulator ticks.
//!
//! Each function mutates the [`SimulationContext`] exactly the way one
//! periodic callback of the device app would. All draws are uniform within
//! fixed bands; there are no error conditions. The emergency regime freezes
//! drift and vitals redraw — only the explicit emergency transitions touch
//! them while an SOS is active.

use crate::context::SimulationContext;
use rand::Rng;
use tracing::trace;
use trailguard_core::constants::{battery, drift, vitals};

/// Drift tick: perturb location and redraw movement values
///
/// Runs only while tracking is active and no emergency is active. Latitude
/// and longitude each move by an independent uniform draw within
/// ±`COORDINATE_VARIATION`/2; speed, altitude, and heading are redrawn
/// independently within their fixed bands.
pub fn tick_drift(ctx: &mut SimulationContext, rng: &mut impl Rng) {
    if !ctx.tracking.is_tracking || ctx.emergency.is_active() {
        return;
    }

    let half = drift::COORDINATE_VARIATION / 2.0;
    ctx.tracking.location.lat += rng.gen_range(-half..half);
    ctx.tracking.location.lng += rng.gen_range(-half..half);
    ctx.tracking.speed = rng.gen_range(drift::SPEED_MIN_KMH..drift::SPEED_MAX_KMH);
    ctx.tracking.altitude = rng.gen_range(drift::ALTITUDE_MIN_M..drift::ALTITUDE_MAX_M);
    ctx.tracking.direction = rng.gen_range(0.0..drift::DIRECTION_MAX_DEG);

    trace!(
        location = %ctx.tracking.location,
        speed = ctx.tracking.speed,
        altitude = ctx.tracking.altitude,
        "drift tick"
    );
}

/// Vitals tick: redraw heart rate within the normal band
///
/// Skipped entirely while an emergency is active; the panic-band override set
/// by the emergency transition must not be overwritten.
pub fn tick_vitals(ctx: &mut SimulationContext, rng: &mut impl Rng) {
    if ctx.emergency.is_active() {
        return;
    }
    ctx.tracking.heart_rate = rng.gen_range(vitals::HR_NORMAL_MIN..vitals::HR_NORMAL_MAX);
}

/// Status refresh: apply battery drain
///
/// Battery decreases by a fixed decrement per refresh and is clamped at the
/// floor. It never resets within a session, so the reading is monotone
/// non-increasing.
pub fn refresh_status(ctx: &mut SimulationContext) {
    ctx.tracking.battery =
        (ctx.tracking.battery - battery::DRAIN_PER_REFRESH).max(battery::FLOOR_PERCENT);
    trace!(
        battery = ctx.tracking.battery,
        heart_rate = ctx.tracking.heart_rate,
        activity = %ctx.tracking.activity_type(),
        "status refresh"
    );
}
