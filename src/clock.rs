// ABOUTME: Injectable time sources for deterministic tick testing
// ABOUTME: TimeSource trait with a system clock and a manually-advanced test clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Time abstraction for the simulation engine.
//!
//! All wall-clock reads (timestamps on streamed records, hour-of-day for the
//! risk classifier, auto-SOS and dispatch deadlines) go through [`TimeSource`]
//! so tests can drive "tick" behavior without real delays.

use chrono::{DateTime, Duration, Timelike, Utc};
use std::sync::RwLock;

/// Source of the current wall-clock time
pub trait TimeSource: Send + Sync {
    /// Current UTC timestamp
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) used by the dusk predicate
    fn hour_of_day(&self) -> u32 {
        self.now().hour()
    }
}

/// Production time source backed by the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually-advanced clock for deterministic tests
///
/// Interior mutability lets the engine hold the clock behind a shared
/// reference while a test advances it between ticks. Lock poisoning is
/// impossible to act on meaningfully here; a poisoned clock falls back to
/// the last value it held.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant
    #[must_use]
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// Advance the clock by a duration
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.write() {
            *now += by;
        }
    }

    /// Jump the clock to an absolute instant
    pub fn set(&self, to: DateTime<Utc>) {
        if let Ok(mut now) = self.now.write() {
            *now = to;
        }
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
            .read()
            .map_or_else(|poisoned| *poisoned.into_inner(), |now| *now)
    }
}
