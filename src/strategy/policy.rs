//! Trust policy checks for proxy-forwarded certificates.

use tracing::warn;

use super::certificate::CertificateModel;
use super::config::TrustPolicyConfig;
use super::outcome::FailReason;

/// Outcome of the trust policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(FailReason),
}

/// Apply the configured checks to a certificate obtained from the proxy
/// header, short-circuiting on the first rejection.
///
/// Certificates taken directly from the transport never pass through
/// here: their chain was validated by the TLS stack, and the two
/// acquisition paths are distinct trust roots.
pub fn validate_trust_policy(cert: &CertificateModel, cfg: &TrustPolicyConfig) -> ValidationResult {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    validate_at(cert, cfg, now)
}

fn validate_at(cert: &CertificateModel, cfg: &TrustPolicyConfig, now: i64) -> ValidationResult {
    if !cert.valid_at(now) {
        warn!(
            serial = %cert.serial,
            not_before = cert.not_before,
            not_after = cert.not_after,
            "certificate outside its validity window"
        );
        return ValidationResult::Rejected(FailReason::ExpiredOrNotYetValid);
    }

    // extraction guarantees the issuer trust value is set on this path
    match &cfg.expected_issuer_hash {
        Some(expected) if cert.issuer_hash.eq_ignore_ascii_case(expected) => {}
        _ => {
            warn!(issuer = %cert.issuer_dn, "certificate issuer not trusted");
            return ValidationResult::Rejected(FailReason::IssuerMismatch);
        }
    }

    if let Some(expected) = &cfg.expected_subject_hash {
        if !cert.subject_hash.eq_ignore_ascii_case(expected) {
            warn!(subject = %cert.subject_dn, "certificate subject not trusted");
            return ValidationResult::Rejected(FailReason::SubjectMismatch);
        }
    }

    if let Some(expected) = &cfg.expected_fingerprint {
        if !cert.fingerprint().eq_ignore_ascii_case(expected) {
            warn!(serial = %cert.serial, "certificate fingerprint mismatch");
            return ValidationResult::Rejected(FailReason::FingerprintMismatch);
        }
    }

    ValidationResult::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_fixtures::*;

    const NOW: i64 = 1_750_000_000; // mid-2025, inside the valid window

    fn matching_config() -> TrustPolicyConfig {
        TrustPolicyConfig {
            expected_issuer_hash: Some(VALID_ISSUER_HASH.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepted_with_issuer_only() {
        let cert = valid_cert_model();
        assert_eq!(
            validate_at(&cert, &matching_config(), NOW),
            ValidationResult::Accepted
        );
    }

    #[test]
    fn test_expired_rejected_before_other_checks() {
        // issuer and fingerprint both wrong too; expiry must win
        let cert = expired_cert_model();
        let cfg = TrustPolicyConfig {
            expected_issuer_hash: Some("00".repeat(20)),
            expected_fingerprint: Some("11".repeat(20)),
            ..Default::default()
        };
        assert_eq!(
            validate_at(&cert, &cfg, NOW),
            ValidationResult::Rejected(FailReason::ExpiredOrNotYetValid)
        );
    }

    #[test]
    fn test_not_yet_valid_rejected() {
        let cert = valid_cert_model();
        assert_eq!(
            validate_at(&cert, &matching_config(), cert.not_before - 1),
            ValidationResult::Rejected(FailReason::ExpiredOrNotYetValid)
        );
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let cert = valid_cert_model();
        let cfg = matching_config();
        assert_eq!(
            validate_at(&cert, &cfg, cert.not_before),
            ValidationResult::Accepted
        );
        assert_eq!(
            validate_at(&cert, &cfg, cert.not_after),
            ValidationResult::Accepted
        );
        assert_eq!(
            validate_at(&cert, &cfg, cert.not_after + 1),
            ValidationResult::Rejected(FailReason::ExpiredOrNotYetValid)
        );
    }

    #[test]
    fn test_issuer_mismatch() {
        let cert = valid_cert_model();
        let cfg = TrustPolicyConfig {
            expected_issuer_hash: Some("00".repeat(20)),
            ..Default::default()
        };
        assert_eq!(
            validate_at(&cert, &cfg, NOW),
            ValidationResult::Rejected(FailReason::IssuerMismatch)
        );
    }

    #[test]
    fn test_issuer_comparison_case_insensitive() {
        let cert = valid_cert_model();
        let cfg = TrustPolicyConfig {
            expected_issuer_hash: Some(VALID_ISSUER_HASH.to_uppercase()),
            ..Default::default()
        };
        assert_eq!(validate_at(&cert, &cfg, NOW), ValidationResult::Accepted);
    }

    #[test]
    fn test_subject_check_only_when_configured() {
        let cert = valid_cert_model();

        let mut cfg = matching_config();
        cfg.expected_subject_hash = Some("00".repeat(20));
        assert_eq!(
            validate_at(&cert, &cfg, NOW),
            ValidationResult::Rejected(FailReason::SubjectMismatch)
        );

        // self-signed fixture: subject hash equals issuer hash
        cfg.expected_subject_hash = Some(VALID_ISSUER_HASH.to_uppercase());
        assert_eq!(validate_at(&cert, &cfg, NOW), ValidationResult::Accepted);
    }

    #[test]
    fn test_fingerprint_mismatch() {
        let cert = valid_cert_model();
        let mut cfg = matching_config();
        cfg.expected_fingerprint = Some("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12".to_string());
        assert_eq!(
            validate_at(&cert, &cfg, NOW),
            ValidationResult::Rejected(FailReason::FingerprintMismatch)
        );
    }

    #[test]
    fn test_fingerprint_comparison_case_insensitive() {
        let cert = valid_cert_model();
        let mut cfg = matching_config();

        cfg.expected_fingerprint = Some(VALID_FINGERPRINT.to_uppercase());
        assert_eq!(validate_at(&cert, &cfg, NOW), ValidationResult::Accepted);

        cfg.expected_fingerprint = Some(VALID_FINGERPRINT.to_lowercase());
        assert_eq!(validate_at(&cert, &cfg, NOW), ValidationResult::Accepted);
    }
}
