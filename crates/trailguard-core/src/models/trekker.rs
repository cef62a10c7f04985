// ABOUTME: Trekker profile and onboarding registration models
// ABOUTME: RegistrationRequest validation and the resulting TrekkerProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Onboarding form data captured before a trekking session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Nationality (for cross-border rescue coordination)
    pub nationality: String,
    /// Emergency contact phone number
    pub emergency_contact: String,
}

impl RegistrationRequest {
    /// Validate the request and produce a profile
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRegistration`] when a required field is
    /// empty or the email lacks a plausible shape.
    pub fn into_profile(self, registered_at: DateTime<Utc>) -> AppResult<TrekkerProfile> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_required("phone", &self.phone)?;
        validate_required("nationality", &self.nationality)?;
        validate_required("emergency_contact", &self.emergency_contact)?;

        if !self.email.contains('@') || self.email.starts_with('@') || self.email.ends_with('@') {
            return Err(AppError::invalid_registration(
                "email",
                "must contain a local part and a domain",
            ));
        }

        Ok(TrekkerProfile {
            name: self.name,
            email: self.email,
            phone: self.phone,
            nationality: self.nationality,
            emergency_contact: self.emergency_contact,
            registered_at,
            did: None,
        })
    }
}

fn validate_required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_registration(field, "must not be empty"));
    }
    Ok(())
}

/// Registered trekker identity
///
/// The decentralized identifier is minted only after the document scan
/// completes; until then the profile carries `did: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrekkerProfile {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Nationality
    pub nationality: String,
    /// Emergency contact phone number
    pub emergency_contact: String,
    /// When the trekker registered
    pub registered_at: DateTime<Utc>,
    /// Cosmetic decentralized identifier, minted on scan completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
}

impl TrekkerProfile {
    /// True once the identity flow has completed
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.did.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            name: "Asha Kumar".into(),
            email: "asha@example.com".into(),
            phone: "+91-98400-00000".into(),
            nationality: "IN".into(),
            emergency_contact: "+91-98400-11111".into(),
        }
    }

    #[test]
    fn valid_request_becomes_profile() {
        let profile = valid_request()
            .into_profile(Utc::now())
            .expect("valid registration");
        assert_eq!(profile.name, "Asha Kumar");
        assert!(!profile.is_verified());
    }

    #[test]
    fn empty_field_is_rejected() {
        let mut request = valid_request();
        request.emergency_contact = "  ".into();
        let err = request.into_profile(Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRegistration { ref field, .. } if field == "emergency_contact"
        ));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".into();
        assert!(request.into_profile(Utc::now()).is_err());
    }
}
