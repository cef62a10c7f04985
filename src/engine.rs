// ABOUTME: Simulation engine owning context, RNG, clock, and sink
// ABOUTME: Synchronous per-concern tick methods plus the async scheduled run loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Safety engine.
//!
//! [`SafetyEngine`] replaces the device app's unsynchronized timer callbacks
//! with explicit tick methods over one owned [`SimulationContext`]. Each tick
//! runs to completion before the next, so ordering is the schedule order and
//! every method is directly drivable from tests with a [`ManualClock`].
//! The async [`SafetyEngine::run`] loop wires the same methods to tokio
//! intervals at the production periods.
//!
//! [`ManualClock`]: crate::clock::ManualClock

use crate::clock::TimeSource;
use crate::config::SimulationConfig;
use crate::context::SimulationContext;
use crate::emergency;
use crate::identity::{self, DocumentScan};
use crate::positioning::{self, PositioningSource, SyntheticPositioning};
use crate::risk::{self, RiskInputs};
use crate::telemetry::streaming::LinkState;
use crate::telemetry::{simulator, TelemetrySink};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tracing::{info, warn};
use trailguard_core::constants::periods;
use trailguard_core::errors::AppResult;
use trailguard_core::models::{
    GeoPoint, RegistrationRequest, RiskAssessment, RiskLevel, TrekkerProfile,
};

/// Simulation engine for one trekking session
pub struct SafetyEngine {
    config: SimulationConfig,
    ctx: SimulationContext,
    rng: ChaCha8Rng,
    clock: Arc<dyn TimeSource>,
    sink: Arc<dyn TelemetrySink>,
    last_risk_level: Option<RiskLevel>,
}

impl SafetyEngine {
    /// Create an engine with the given configuration, clock, and sink
    ///
    /// A configured seed makes the whole session reproducible; without one
    /// the RNG seeds from entropy.
    #[must_use]
    pub fn new(
        config: SimulationConfig,
        clock: Arc<dyn TimeSource>,
        sink: Arc<dyn TelemetrySink>,
    ) -> Self {
        let rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            config,
            ctx: SimulationContext::new(),
            rng,
            clock,
            sink,
            last_risk_level: None,
        }
    }

    /// Current simulation state
    #[must_use]
    pub const fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    /// Mutable simulation state, for seeding scenarios
    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.ctx
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Start a tracking session
    ///
    /// Consults the positioning source for an initial fix; on denial or
    /// absence substitutes a synthetic fix around the configured base point.
    /// Returns `true` when the synthetic fallback was used.
    ///
    /// # Errors
    ///
    /// Fails only when the synthetic fallback itself cannot produce a fix.
    pub async fn start(&mut self, source: &dyn PositioningSource) -> AppResult<bool> {
        let fallback = SyntheticPositioning::new(
            self.config.base_location,
            self.config.position_variance,
            self.rng.gen(),
        );
        let (fix, fell_back) = positioning::resolve_fix(source, &fallback).await?;
        self.ctx.tracking.location = fix;
        self.ctx.tracking.is_tracking = true;
        info!(location = %fix, fell_back, "tracking session started");
        Ok(fell_back)
    }

    /// Register a trekker profile from onboarding form data
    ///
    /// # Errors
    ///
    /// Returns a validation error when a required field is empty or the
    /// email is malformed.
    pub fn register_trekker(&mut self, request: RegistrationRequest) -> AppResult<&TrekkerProfile> {
        let profile = request.into_profile(self.clock.now())?;
        info!(trekker = %profile.name, "registration data captured");
        Ok(&*self.ctx.profile.insert(profile))
    }

    /// Run the simulated document scan to completion and mint the DID
    ///
    /// Advances the scan on the production step period, logging each phase
    /// change, then completes verification on the registered profile.
    ///
    /// # Errors
    ///
    /// Fails when no profile is registered or it is already verified.
    pub async fn run_onboarding_scan(&mut self) -> AppResult<String> {
        if self.ctx.profile.is_none() {
            return Err(trailguard_core::errors::AppError::DocumentScan(
                "no registered profile to verify".into(),
            ));
        }

        let mut scan = DocumentScan::new();
        let mut last_phase = None;
        while !scan.is_complete() {
            let phase = scan.advance(&mut self.rng);
            if last_phase != Some(phase) {
                info!(progress = scan.progress(), status = phase.status_line(), "document scan");
                last_phase = Some(phase);
            }
            if !scan.is_complete() {
                tokio::time::sleep(Duration::from_millis(periods::SCAN_STEP_MILLIS)).await;
            }
        }

        let profile = self.ctx.profile.as_mut().ok_or_else(|| {
            trailguard_core::errors::AppError::DocumentScan(
                "no registered profile to verify".into(),
            )
        })?;
        identity::complete_verification(profile, &scan, &mut self.rng)
    }

    /// Drift tick: perturb location and movement values (5s period)
    pub fn tick_drift(&mut self) {
        simulator::tick_drift(&mut self.ctx, &mut self.rng);
    }

    /// Vitals tick: redraw heart rate in the normal band (3s period)
    pub fn tick_vitals(&mut self) {
        simulator::tick_vitals(&mut self.ctx, &mut self.rng);
    }

    /// Status refresh: battery drain plus time-based follow-ups (2s period)
    ///
    /// Also advances the dispatch timeline of an active incident and fires a
    /// pending auto-SOS whose deadline has passed.
    pub fn refresh_status(&mut self) {
        simulator::refresh_status(&mut self.ctx);
        self.tick_dispatch();
        self.poll_auto_sos();
    }

    /// Run one risk assessment cycle (10s period)
    ///
    /// Classifies current telemetry against the hour of day and, on a
    /// `Danger` result, consults the auto-SOS gate.
    pub fn assess_risk(&mut self) -> RiskAssessment {
        let inputs = RiskInputs::capture(&self.ctx.tracking, self.clock.hour_of_day());
        let assessment = risk::evaluate(&inputs);

        if self.last_risk_level != Some(assessment.level) {
            info!(level = %assessment.level, "safety level changed");
            self.last_risk_level = Some(assessment.level);
        }

        risk::maybe_schedule_auto_sos(
            &assessment,
            &mut self.ctx,
            &self.config.auto_sos,
            &mut self.rng,
            self.clock.now(),
        );
        assessment
    }

    /// Fire a pending auto-SOS whose deadline has passed
    ///
    /// Returns `true` when an automatic trigger fired this call.
    pub fn poll_auto_sos(&mut self) -> bool {
        let now = self.clock.now();
        let due = self
            .ctx
            .pending_auto_sos
            .is_some_and(|deadline| now >= deadline);
        if !due {
            return false;
        }
        self.ctx.pending_auto_sos = None;
        warn!("auto SOS triggered due to high risk factors");
        emergency::trigger(&mut self.ctx, &mut self.rng, now, true)
    }

    /// Manually trigger the SOS flow
    ///
    /// Idempotent: returns `false` without touching state when an SOS is
    /// already active.
    pub fn trigger_emergency(&mut self) -> bool {
        emergency::trigger(&mut self.ctx, &mut self.rng, self.clock.now(), false)
    }

    /// Cancel an active SOS after trekker confirmation
    pub fn cancel_emergency(&mut self) -> bool {
        emergency::cancel(&mut self.ctx)
    }

    /// Advance the simulated rescue dispatch timeline
    pub fn tick_dispatch(&mut self) {
        emergency::tick_dispatch(&mut self.ctx, &mut self.rng, self.clock.now());
    }

    /// Broker link health check (15s period)
    pub fn tick_broker(&mut self) -> LinkState {
        let now = self.clock.now();
        self.ctx.broker.check(&mut self.rng, now)
    }

    /// Stream one telemetry record to the sink (5s period)
    ///
    /// Emits only while tracking is active; returns whether a record was
    /// published.
    ///
    /// # Errors
    ///
    /// Propagates serialization and sink failures.
    pub async fn stream_telemetry(&self) -> AppResult<bool> {
        if !self.ctx.tracking.is_tracking {
            return Ok(false);
        }
        let record = self.ctx.tracking.to_record(self.clock.now());
        self.sink.publish(&record).await?;
        Ok(true)
    }

    /// Seed the scripted emergency scenario
    pub fn load_demo_scenario(&mut self) {
        self.ctx.load_demo_scenario();
        info!("demo scenario loaded: stationary trekker on hill trail with panic vitals");
    }

    /// Reset the session to the demo baseline at a fresh synthetic location
    pub fn reset_demo(&mut self) {
        let half = self.config.position_variance / 2.0;
        let location = GeoPoint::new(
            self.config.base_location.lat + self.rng.gen_range(-half..half),
            self.config.base_location.lng + self.rng.gen_range(-half..half),
        );
        self.ctx.reset_demo(location);
        self.last_risk_level = None;
        info!(location = %location, "demo reset complete");
    }

    /// Run the scheduled simulation loop
    ///
    /// Wires every tick method to its production period and runs until the
    /// optional duration elapses or a ctrl-c arrives. Dropping out of the
    /// loop clears all periodic work.
    ///
    /// # Errors
    ///
    /// Currently infallible at the loop level; sink failures are logged and
    /// the loop keeps running.
    pub async fn run(&mut self, run_for: Option<Duration>) -> AppResult<()> {
        let start = Instant::now();
        let mut drift = interval_at(
            start + Duration::from_secs(periods::DRIFT_SECS),
            Duration::from_secs(periods::DRIFT_SECS),
        );
        let mut vitals = interval_at(
            start + Duration::from_secs(periods::VITALS_SECS),
            Duration::from_secs(periods::VITALS_SECS),
        );
        let mut status = interval_at(
            start + Duration::from_secs(periods::STATUS_REFRESH_SECS),
            Duration::from_secs(periods::STATUS_REFRESH_SECS),
        );
        let mut risk_cycle = interval_at(
            start + Duration::from_secs(periods::RISK_ASSESSMENT_SECS),
            Duration::from_secs(periods::RISK_ASSESSMENT_SECS),
        );
        let mut stream = interval_at(
            start + Duration::from_secs(periods::STREAMING_SECS),
            Duration::from_secs(periods::STREAMING_SECS),
        );
        let mut broker = interval_at(
            start + Duration::from_secs(periods::BROKER_CHECK_SECS),
            Duration::from_secs(periods::BROKER_CHECK_SECS),
        );

        let deadline = async move {
            match run_for {
                Some(duration) => tokio::time::sleep(duration).await,
                None => future::pending().await,
            }
        };
        tokio::pin!(deadline);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        info!("simulation loop started");
        loop {
            tokio::select! {
                _ = drift.tick() => self.tick_drift(),
                _ = vitals.tick() => self.tick_vitals(),
                _ = status.tick() => self.refresh_status(),
                _ = risk_cycle.tick() => {
                    self.assess_risk();
                }
                _ = stream.tick() => {
                    if let Err(err) = self.stream_telemetry().await {
                        warn!(%err, "telemetry streaming failed");
                    }
                }
                _ = broker.tick() => {
                    self.tick_broker();
                }
                () = &mut deadline => {
                    info!("run duration elapsed");
                    break;
                }
                _ = &mut shutdown => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }
        info!("simulation loop stopped, periodic work cleared");
        Ok(())
    }
}
