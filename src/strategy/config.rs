//! Trust policy configuration.

use serde::{Deserialize, Serialize};

/// Trust policy applied to proxy-forwarded client certificates.
///
/// Built once at startup and shared read-only across requests; never
/// mutated per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustPolicyConfig {
    /// Pass the original request to the verify callback alongside the
    /// certificate.
    #[serde(default)]
    pub pass_request_to_callback: bool,

    /// Expected SHA-1 fingerprint of the DER-encoded certificate, hex.
    /// Compared case-insensitively when set.
    #[serde(default)]
    pub expected_fingerprint: Option<String>,

    /// Expected SHA-1 hash of the issuer name, hex. Required whenever
    /// certificates can arrive via the proxy header; compared
    /// case-insensitively.
    #[serde(default)]
    pub expected_issuer_hash: Option<String>,

    /// Expected SHA-1 hash of the subject name, hex. Optional narrowing
    /// on top of the issuer check.
    #[serde(default)]
    pub expected_subject_hash: Option<String>,
}

impl TrustPolicyConfig {
    /// Validate the configuration at startup.
    ///
    /// A missing issuer hash is only warned about here, not rejected: the
    /// header path may be unreachable in a direct-TLS deployment, and a
    /// request that does reach it reports the defect itself.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("expected_fingerprint", &self.expected_fingerprint),
            ("expected_issuer_hash", &self.expected_issuer_hash),
            ("expected_subject_hash", &self.expected_subject_hash),
        ] {
            if let Some(v) = value {
                if v.is_empty() || !v.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(format!("{} must be a hex digest, got {:?}", name, v));
                }
            }
        }

        if self.expected_issuer_hash.is_none() {
            tracing::warn!(
                "no issuer trust value configured; proxy-forwarded certificates will be \
                 reported as a configuration error"
            );
        }

        Ok(())
    }
}
