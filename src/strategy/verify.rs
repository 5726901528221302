//! Bridge from the caller-supplied verify callback to the strategy
//! outcome.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::certificate::CertificateModel;
use super::config::TrustPolicyConfig;
use super::outcome::{AuthOutcome, FailReason, Identity};
use crate::request::RequestContext;

/// Caller-supplied identity resolution.
///
/// Maps a trusted certificate to an application identity, typically by
/// looking it up in a user directory. The original request is passed
/// along only when `pass_request_to_callback` is set.
#[async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(
        &self,
        cert: &CertificateModel,
        request: Option<&dyn RequestContext>,
    ) -> Result<Option<Identity>>;
}

/// Run the verify callback once and fold its result into the outcome.
///
/// A callback error becomes `Error`, an absent identity becomes `Fail`,
/// a resolved identity becomes `Success`. The callback is invoked at
/// most once per attempt.
pub async fn resolve_identity(
    cert: &CertificateModel,
    ctx: &dyn RequestContext,
    cfg: &TrustPolicyConfig,
    verifier: &dyn Verifier,
) -> AuthOutcome {
    let request = cfg.pass_request_to_callback.then_some(ctx);
    match verifier.verify(cert, request).await {
        Err(err) => AuthOutcome::Error(err),
        Ok(None) => {
            debug!(subject = %cert.subject_dn, "verify callback did not match an identity");
            AuthOutcome::Fail(FailReason::NotMatched)
        }
        Ok(Some(identity)) => AuthOutcome::Success(identity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_fixtures::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct NoRequest;

    impl RequestContext for NoRequest {
        fn header_value(&self, _name: &str) -> Option<String> {
            None
        }

        fn transport_authorized(&self) -> bool {
            false
        }

        fn transport_peer_certificate(&self) -> Option<CertificateModel> {
            None
        }
    }

    /// Counts invocations and records whether the request was passed.
    struct RecordingVerifier {
        calls: AtomicUsize,
        saw_request: AtomicBool,
        result: fn() -> Result<Option<Identity>>,
    }

    impl RecordingVerifier {
        fn new(result: fn() -> Result<Option<Identity>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                saw_request: AtomicBool::new(false),
                result,
            }
        }
    }

    #[async_trait]
    impl Verifier for RecordingVerifier {
        async fn verify(
            &self,
            _cert: &CertificateModel,
            request: Option<&dyn RequestContext>,
        ) -> Result<Option<Identity>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.saw_request.store(request.is_some(), Ordering::SeqCst);
            (self.result)()
        }
    }

    #[tokio::test]
    async fn test_resolved_identity_is_success() {
        let verifier = RecordingVerifier::new(|| Ok(Some(Identity::new("user-1"))));
        let cert = valid_cert_model();
        let outcome = resolve_identity(
            &cert,
            &NoRequest,
            &TrustPolicyConfig::default(),
            &verifier,
        )
        .await;

        match outcome {
            AuthOutcome::Success(identity) => assert_eq!(identity.id, "user-1"),
            other => panic!("expected Success, got {:?}", other),
        }
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absent_identity_is_fail() {
        let verifier = RecordingVerifier::new(|| Ok(None));
        let cert = valid_cert_model();
        let outcome = resolve_identity(
            &cert,
            &NoRequest,
            &TrustPolicyConfig::default(),
            &verifier,
        )
        .await;

        assert!(matches!(
            outcome,
            AuthOutcome::Fail(FailReason::NotMatched)
        ));
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_callback_error_is_error() {
        let verifier = RecordingVerifier::new(|| Err(anyhow!("directory unavailable")));
        let cert = valid_cert_model();
        let outcome = resolve_identity(
            &cert,
            &NoRequest,
            &TrustPolicyConfig::default(),
            &verifier,
        )
        .await;

        assert!(outcome.is_error());
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_passed_only_when_configured() {
        let cert = valid_cert_model();

        let verifier = RecordingVerifier::new(|| Ok(None));
        let _ = resolve_identity(
            &cert,
            &NoRequest,
            &TrustPolicyConfig::default(),
            &verifier,
        )
        .await;
        assert!(!verifier.saw_request.load(Ordering::SeqCst));

        let cfg = TrustPolicyConfig {
            pass_request_to_callback: true,
            ..Default::default()
        };
        let _ = resolve_identity(&cert, &NoRequest, &cfg, &verifier).await;
        assert!(verifier.saw_request.load(Ordering::SeqCst));
    }
}
