// ABOUTME: Onboarding identity flow: document scan simulation and DID minting
// ABOUTME: Scan phase progression and cosmetic did:ethr identifier generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Identity and onboarding flow.
//!
//! Registration data is validated into a [`TrekkerProfile`]
//! (see `trailguard_core::models::trekker`), then a simulated document scan
//! advances through its phases; completion mints a cosmetic decentralized
//! identifier onto the profile. The DID is a random hex string with no
//! cryptographic backing.

use rand::Rng;
use tracing::info;
use trailguard_core::constants::{identity, scan};
use trailguard_core::errors::{AppError, AppResult};
use trailguard_core::models::TrekkerProfile;

/// Generate a cosmetic decentralized identifier
///
/// Format: `did:ethr:0x` followed by 32 lowercase hex characters drawn from
/// the given RNG.
#[must_use]
pub fn generate_did(rng: &mut impl Rng) -> String {
    let mut bytes = [0_u8; identity::DID_RANDOM_BYTES];
    rng.fill(&mut bytes[..]);
    format!("{}{}", identity::DID_PREFIX, hex::encode(bytes))
}

/// Phase of the simulated document scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Locating the document in frame
    Detecting,
    /// Running OCR over the captured image
    ProcessingOcr,
    /// Extracting identity fields
    ExtractingData,
    /// Scan complete, document verified
    Verified,
}

impl ScanPhase {
    /// Status line shown while the phase is active
    #[must_use]
    pub const fn status_line(self) -> &'static str {
        match self {
            Self::Detecting => "Detecting document...",
            Self::ProcessingOcr => "Processing OCR...",
            Self::ExtractingData => "Extracting data...",
            Self::Verified => "Document verified successfully!",
        }
    }
}

/// Simulated document scan session
///
/// Progress advances by a uniform random step per tick; the phase is derived
/// from accumulated progress. One step period corresponds to
/// `periods::SCAN_STEP_MILLIS` in the scheduled flow.
#[derive(Debug, Clone, Default)]
pub struct DocumentScan {
    progress: f64,
}

impl DocumentScan {
    /// Start a scan at zero progress
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated progress, capped at 100
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress.min(scan::COMPLETE_AT)
    }

    /// True once progress has reached completion
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= scan::COMPLETE_AT
    }

    /// Current phase derived from progress
    #[must_use]
    pub fn phase(&self) -> ScanPhase {
        if self.progress >= scan::COMPLETE_AT {
            ScanPhase::Verified
        } else if self.progress >= scan::EXTRACTING_STARTS_AT {
            ScanPhase::ExtractingData
        } else if self.progress >= scan::OCR_STARTS_AT {
            ScanPhase::ProcessingOcr
        } else {
            ScanPhase::Detecting
        }
    }

    /// Advance the scan by one step
    ///
    /// Adds a uniform draw in `[STEP_MIN, STEP_MAX)` to progress and returns
    /// the phase after the step. Advancing a completed scan is a no-op that
    /// keeps reporting `Verified`.
    pub fn advance(&mut self, rng: &mut impl Rng) -> ScanPhase {
        if !self.is_complete() {
            self.progress += rng.gen_range(scan::STEP_MIN..scan::STEP_MAX);
        }
        self.phase()
    }
}

/// Complete identity verification for a scanned profile
///
/// Mints a DID onto the profile and returns it.
///
/// # Errors
///
/// Returns [`AppError::DocumentScan`] when the scan has not completed or the
/// profile is already verified.
pub fn complete_verification(
    profile: &mut TrekkerProfile,
    scan: &DocumentScan,
    rng: &mut impl Rng,
) -> AppResult<String> {
    if !scan.is_complete() {
        return Err(AppError::DocumentScan(format!(
            "scan incomplete at {:.0}%",
            scan.progress()
        )));
    }
    if profile.is_verified() {
        return Err(AppError::DocumentScan(
            "profile already carries a DID".into(),
        ));
    }

    let did = generate_did(rng);
    info!(trekker = %profile.name, did = %did, "blockchain DID created");
    profile.did = Some(did.clone());
    Ok(did)
}
