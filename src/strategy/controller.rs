//! Strategy state machine tying extraction, trust policy, and
//! verification together.

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{debug, warn};

use super::config::TrustPolicyConfig;
use super::outcome::{AuthOutcome, FailReason};
use super::policy::{validate_trust_policy, ValidationResult};
use super::source::{extract_certificate, ExtractionResult};
use super::verify::{resolve_identity, Verifier};
use crate::request::RequestContext;

/// A pluggable credential strategy, as consumed by the hosting
/// request-authentication middleware alongside its other strategies
/// (passwords, bearer tokens, and so on).
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Short name the middleware registers this strategy under.
    fn name(&self) -> &'static str;

    /// Run one authentication attempt. Exactly one outcome is produced;
    /// rejections stay inside the strategy while misconfiguration and
    /// unexpected faults surface on the `Error` variant.
    async fn authenticate(&self, ctx: &dyn RequestContext) -> AuthOutcome;
}

/// Client certificate strategy.
///
/// Extracts a certificate from the request, applies the trust policy to
/// proxy-forwarded certificates, and resolves accepted certificates to an
/// identity through the verify callback. Transport-validated certificates
/// skip the trust policy: the handshake already checked the chain.
pub struct ClientCertStrategy<V> {
    config: TrustPolicyConfig,
    verifier: V,
}

impl<V: Verifier> ClientCertStrategy<V> {
    /// Create a strategy with the given trust policy and verify callback.
    pub fn new(config: TrustPolicyConfig, verifier: V) -> Self {
        Self { config, verifier }
    }

    /// The trust policy this strategy was built with.
    pub fn config(&self) -> &TrustPolicyConfig {
        &self.config
    }
}

#[async_trait]
impl<V: Verifier> AuthStrategy for ClientCertStrategy<V> {
    fn name(&self) -> &'static str {
        "client-cert"
    }

    async fn authenticate(&self, ctx: &dyn RequestContext) -> AuthOutcome {
        let cert = match extract_certificate(ctx, &self.config) {
            Err(err) => {
                warn!(error = %err, "client certificate extraction failed");
                return AuthOutcome::Error(err);
            }
            Ok(ExtractionResult::NoCertificate) => {
                debug!("request carries no usable client certificate");
                return AuthOutcome::Fail(FailReason::NoCertificate);
            }
            Ok(ExtractionResult::Misconfigured(reason)) => {
                warn!(reason, "client certificate strategy misconfigured");
                return AuthOutcome::Error(anyhow!(reason));
            }
            Ok(ExtractionResult::NeedsPolicyCheck(cert)) => {
                match validate_trust_policy(&cert, &self.config) {
                    ValidationResult::Rejected(reason) => {
                        debug!(%reason, "forwarded certificate rejected by trust policy");
                        return AuthOutcome::Fail(reason);
                    }
                    ValidationResult::Accepted => cert,
                }
            }
            Ok(ExtractionResult::DirectlyTrusted(cert)) => cert,
        };

        resolve_identity(&cert, ctx, &self.config, &self.verifier).await
    }
}
