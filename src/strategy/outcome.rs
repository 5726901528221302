//! Authentication outcome types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity resolved by the caller's verify callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Application-level user identifier.
    pub id: String,
    /// Additional claims attached by the callback.
    #[serde(default)]
    pub claims: HashMap<String, serde_json::Value>,
}

impl Identity {
    /// Identity with the given id and no claims.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            claims: HashMap::new(),
        }
    }
}

/// Why an authentication attempt was refused.
///
/// Logged internally only. The hosting middleware turns any `Fail` into a
/// generic unauthorized response without the sub-reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    /// No usable certificate on the request, or the transport refused the
    /// handshake.
    NoCertificate,
    /// Now is outside the certificate validity window.
    ExpiredOrNotYetValid,
    /// Issuer name hash did not match the configured trust value.
    IssuerMismatch,
    /// Subject name hash did not match the configured trust value.
    SubjectMismatch,
    /// Certificate fingerprint did not match the configured trust value.
    FingerprintMismatch,
    /// The verify callback did not resolve an identity.
    NotMatched,
}

impl std::fmt::Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailReason::NoCertificate => write!(f, "no-certificate"),
            FailReason::ExpiredOrNotYetValid => write!(f, "expired-or-not-yet-valid"),
            FailReason::IssuerMismatch => write!(f, "issuer-mismatch"),
            FailReason::SubjectMismatch => write!(f, "subject-mismatch"),
            FailReason::FingerprintMismatch => write!(f, "fingerprint-mismatch"),
            FailReason::NotMatched => write!(f, "not-matched"),
        }
    }
}

/// Terminal result of one authentication attempt.
///
/// Exactly one variant is produced per attempt; the exhaustive enum
/// replaces the success/fail/error callback triple, which permitted
/// double or missing delivery.
#[derive(Debug)]
pub enum AuthOutcome {
    /// A trustworthy certificate resolved to an identity.
    Success(Identity),
    /// The request was refused. Maps to a generic unauthorized response.
    Fail(FailReason),
    /// Misconfiguration or an unexpected fault. Surfaced to the host's
    /// error channel rather than silently denied.
    Error(anyhow::Error),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, AuthOutcome::Fail(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AuthOutcome::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_reason_display() {
        assert_eq!(
            FailReason::ExpiredOrNotYetValid.to_string(),
            "expired-or-not-yet-valid"
        );
        assert_eq!(
            FailReason::FingerprintMismatch.to_string(),
            "fingerprint-mismatch"
        );
        assert_eq!(FailReason::NotMatched.to_string(), "not-matched");
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(AuthOutcome::Success(Identity::new("u1")).is_success());
        assert!(AuthOutcome::Fail(FailReason::NoCertificate).is_fail());
        assert!(AuthOutcome::Error(anyhow::anyhow!("boom")).is_error());
    }

    #[test]
    fn test_identity_claims_roundtrip() {
        let mut identity = Identity::new("user@example.test");
        identity
            .claims
            .insert("tier".to_string(), serde_json::json!("Premium"));

        let encoded = serde_json::to_string(&identity).unwrap();
        let decoded: Identity = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, identity);
    }
}
