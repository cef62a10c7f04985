// ABOUTME: Tracking state and telemetry models mutated by the simulation ticks
// ABOUTME: GeoPoint, TrackingState, ActivityType, and streamed TelemetryRecord definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

use crate::constants::{activity, battery, demo, vitals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from latitude/longitude
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Live tracking state for one trekking session
///
/// Mutated in place on each simulation tick. Session-scoped only; there is
/// no persistence. Ranges differ between the normal and emergency regimes:
/// the emergency toggle pins speed to zero and moves heart rate into the
/// panic band until the trekker confirms cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingState {
    /// Current (real or synthetic) position
    pub location: GeoPoint,
    /// Heart rate in beats per minute
    pub heart_rate: f64,
    /// Tracker battery percentage, monotone non-increasing down to the floor
    pub battery: f64,
    /// Ground speed in km/h
    pub speed: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Heading in degrees (0-360)
    pub direction: f64,
    /// Whether a tracking session is active
    pub is_tracking: bool,
}

impl Default for TrackingState {
    fn default() -> Self {
        Self {
            location: GeoPoint::new(0.0, 0.0),
            heart_rate: vitals::HR_RESTING_BASELINE,
            battery: battery::START_PERCENT,
            speed: 0.0,
            altitude: 0.0,
            direction: 0.0,
            is_tracking: false,
        }
    }
}

impl TrackingState {
    /// Baseline state restored by a demo reset: tracking on, resting vitals,
    /// gentle walking pace on a level trail
    #[must_use]
    pub fn demo_baseline(location: GeoPoint) -> Self {
        Self {
            location,
            heart_rate: vitals::HR_RESTING_BASELINE,
            battery: battery::START_PERCENT,
            speed: demo::RESET_SPEED_KMH,
            altitude: demo::RESET_ALTITUDE_M,
            direction: demo::RESET_DIRECTION_DEG,
            is_tracking: true,
        }
    }

    /// Classify the current movement from ground speed
    #[must_use]
    pub fn activity_type(&self) -> ActivityType {
        ActivityType::from_speed(self.speed)
    }

    /// Build the structured record streamed to the telemetry sink
    #[must_use]
    pub fn to_record(&self, timestamp: DateTime<Utc>) -> TelemetryRecord {
        TelemetryRecord {
            location: self.location,
            heart_rate: self.heart_rate,
            timestamp,
        }
    }
}

/// Movement classification derived from ground speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Speed below the walking band
    Stationary,
    /// Gentle movement (0.5-2 km/h)
    Walking,
    /// Trail pace (2-6 km/h)
    Hiking,
    /// Above hiking pace (6+ km/h)
    Running,
}

impl ActivityType {
    /// Map a speed in km/h onto an activity band
    #[must_use]
    pub fn from_speed(speed_kmh: f64) -> Self {
        if speed_kmh >= activity::RUNNING_MIN_KMH {
            Self::Running
        } else if speed_kmh >= activity::HIKING_MIN_KMH {
            Self::Hiking
        } else if speed_kmh >= activity::WALKING_MIN_KMH {
            Self::Walking
        } else {
            Self::Stationary
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stationary => "Stationary",
            Self::Walking => "Walking",
            Self::Hiking => "Hiking",
            Self::Running => "Running",
        };
        write!(f, "{label}")
    }
}

/// One record of the periodic telemetry stream
///
/// Stands in for the payload an ingestion backend (MQTT/Kafka) would receive;
/// in this simulator the record is serialized to JSON and handed to a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Position at the time of the sample
    pub location: GeoPoint,
    /// Heart rate at the time of the sample (bpm)
    pub heart_rate: f64,
    /// Sample timestamp (UTC)
    pub timestamp: DateTime<Utc>,
}
