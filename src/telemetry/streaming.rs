// ABOUTME: Telemetry sink abstraction and the simulated broker link
// ABOUTME: TracingSink/MemorySink implementations plus MQTT-stand-in connectivity state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Telemetry streaming layer.
//!
//! Once per streaming period the engine hands the current
//! [`TelemetryRecord`] to a [`TelemetrySink`]. The default sink serializes to
//! JSON and writes through `tracing`, standing in for a telemetry-ingestion
//! backend that does not actually exist in this system. [`BrokerLink`]
//! simulates the connectivity state such a backend would expose.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::sync::Mutex;
use tracing::{info, warn};
use trailguard_core::constants::broker;
use trailguard_core::errors::{AppError, AppResult};
use trailguard_core::models::TelemetryRecord;

/// Destination for streamed telemetry records
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Publish one record
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Serialization`] when the record cannot be encoded
    /// or [`AppError::SinkUnavailable`] when the sink rejects it.
    async fn publish(&self, record: &TelemetryRecord) -> AppResult<()>;
}

/// Sink that serializes records to JSON and emits them through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl TelemetrySink for TracingSink {
    async fn publish(&self, record: &TelemetryRecord) -> AppResult<()> {
        let payload = serde_json::to_string(record)?;
        info!(target: "trailguard::stream", %payload, "streaming telemetry record");
        Ok(())
    }
}

/// In-memory sink that retains every published record
///
/// Used by tests and demos to observe the stream without parsing log output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<TelemetryRecord>>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records published so far
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SinkUnavailable`] if the internal lock is poisoned.
    pub fn records(&self) -> AppResult<Vec<TelemetryRecord>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| AppError::SinkUnavailable("Mutex poisoned: records lock".into()))?
            .clone())
    }
}

#[async_trait]
impl TelemetrySink for MemorySink {
    async fn publish(&self, record: &TelemetryRecord) -> AppResult<()> {
        self.records
            .lock()
            .map_err(|_| AppError::SinkUnavailable("Mutex poisoned: records lock".into()))?
            .push(record.clone());
        Ok(())
    }
}

/// Connectivity state of the simulated ingestion broker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Link healthy; records flow
    Connected,
    /// Link degraded; reconnect in progress
    Reconnecting,
}

/// Simulated broker connection (MQTT stand-in)
///
/// Each health check degrades a healthy link with a small probability; a
/// degraded link recovers once the reconnect window has elapsed.
#[derive(Debug, Clone)]
pub struct BrokerLink {
    state: LinkState,
    reconnect_until: Option<DateTime<Utc>>,
}

impl Default for BrokerLink {
    fn default() -> Self {
        Self {
            state: LinkState::Connected,
            reconnect_until: None,
        }
    }
}

impl BrokerLink {
    /// Current link state
    #[must_use]
    pub const fn state(&self) -> LinkState {
        self.state
    }

    /// True while the link is healthy
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state == LinkState::Connected
    }

    /// Run one health check
    ///
    /// Returns the state after the check. The degradation draw comes from the
    /// caller's seeded RNG so connectivity flaps replay deterministically.
    pub fn check(&mut self, rng: &mut impl Rng, now: DateTime<Utc>) -> LinkState {
        match self.state {
            LinkState::Connected => {
                if rng.gen::<f64>() < broker::DEGRADE_PROBABILITY {
                    self.state = LinkState::Reconnecting;
                    self.reconnect_until =
                        Some(now + Duration::seconds(broker::RECONNECT_SECS as i64));
                    warn!("broker link degraded, reconnecting");
                }
            }
            LinkState::Reconnecting => {
                if self.reconnect_until.map_or(true, |until| now >= until) {
                    self.state = LinkState::Connected;
                    self.reconnect_until = None;
                    info!("broker link recovered");
                }
            }
        }
        self.state
    }
}
