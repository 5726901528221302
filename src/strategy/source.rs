//! Certificate acquisition from the two trust roots.

use anyhow::Result;
use tracing::debug;

use super::certificate::{parse_header_certificate, CertificateModel};
use super::config::TrustPolicyConfig;
use crate::request::RequestContext;

/// Header the TLS-offloading proxy uses to forward the client
/// certificate. Fixed, not configurable per request.
pub const CLIENT_CERT_HEADER: &str = "X-ARR-ClientCert";

/// How a certificate was (or was not) obtained from the request.
#[derive(Debug)]
pub enum ExtractionResult {
    /// Certificate taken from the transport. Its chain was already
    /// validated against the local trust store during the handshake, so
    /// no further issuer or fingerprint check applies at this layer.
    DirectlyTrusted(CertificateModel),
    /// Certificate parsed from the proxy header. Proxy-controlled input
    /// until the trust policy accepts it.
    NeedsPolicyCheck(CertificateModel),
    /// No usable certificate on the request.
    NoCertificate,
    /// The reachable code path is missing required trust configuration.
    Misconfigured(&'static str),
}

/// Extract a client certificate from the request.
///
/// Without the proxy header the transport's own authorization decision
/// governs; with it, the issuer trust value must be configured before the
/// header is even parsed. A malformed header is an error, not a
/// misconfiguration and not a plain refusal.
pub fn extract_certificate(
    ctx: &dyn RequestContext,
    cfg: &TrustPolicyConfig,
) -> Result<ExtractionResult> {
    match ctx.header_value(CLIENT_CERT_HEADER) {
        None => {
            debug!("no forwarded certificate header, reading transport peer certificate");
            if !ctx.transport_authorized() {
                return Ok(ExtractionResult::NoCertificate);
            }
            match ctx.transport_peer_certificate() {
                Some(cert) if !cert.is_empty() => Ok(ExtractionResult::DirectlyTrusted(cert)),
                // authorized anonymous/self-signed connections surface an
                // absent or all-empty certificate
                _ => Ok(ExtractionResult::NoCertificate),
            }
        }
        Some(header) => {
            debug!("client certificate forwarded by proxy, trust policy applies");
            if cfg.expected_issuer_hash.is_none() {
                return Ok(ExtractionResult::Misconfigured(
                    "issuer trust value not configured",
                ));
            }
            let cert = parse_header_certificate(&header)?;
            Ok(ExtractionResult::NeedsPolicyCheck(cert))
        }
    }
}
