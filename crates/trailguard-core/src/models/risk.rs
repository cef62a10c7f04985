// ABOUTME: Risk factor and risk level types produced by the rule-based classifier
// ABOUTME: RiskFactor, RiskLevel, and per-cycle RiskAssessment definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

use crate::constants::risk;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One triggered risk predicate
///
/// Predicates are evaluated independently and are not mutually exclusive;
/// all carry equal weight regardless of severity. The classifier is
/// deliberately coarse — it counts factors, it does not weigh them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Hour of day falls in the dusk-to-dawn window
    Nightfall,
    /// Altitude above the high-altitude threshold
    HighAltitude,
    /// Elevated heart rate while effectively stationary
    ElevatedHeartRateStationary,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Nightfall => "nightfall",
            Self::HighAltitude => "high altitude",
            Self::ElevatedHeartRateStationary => "elevated heart rate with no movement",
        };
        write!(f, "{label}")
    }
}

/// Three-level risk classification derived from the factor count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No factors triggered
    Safe,
    /// Exactly one factor triggered
    Warning,
    /// Two or more factors triggered
    Danger,
}

impl RiskLevel {
    /// Map a factor count onto a level: 0 is `Safe`, 1 is `Warning`,
    /// 2 or more is `Danger`
    #[must_use]
    pub fn from_factor_count(count: usize) -> Self {
        if count >= risk::DANGER_FACTOR_COUNT {
            Self::Danger
        } else if count == 1 {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// User-facing label for the safety status display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Warning => "Caution",
            Self::Danger => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of one risk evaluation cycle
///
/// Recomputed each cycle from current telemetry plus wall-clock hour and never
/// stored beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Derived classification
    pub level: RiskLevel,
    /// Factors that triggered this cycle, in evaluation order
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    /// Build an assessment from the triggered factor set
    #[must_use]
    pub fn from_factors(factors: Vec<RiskFactor>) -> Self {
        Self {
            level: RiskLevel::from_factor_count(factors.len()),
            factors,
        }
    }

    /// True when the classification is `Danger`
    #[must_use]
    pub fn is_danger(&self) -> bool {
        self.level == RiskLevel::Danger
    }
}
