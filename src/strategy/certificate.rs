//! Parsed client certificate model and header decoding.

use anyhow::{anyhow, ensure, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use sha1::{Digest, Sha1};
use x509_parser::prelude::*;

/// Standard certificate envelope delimiters.
const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// A parsed client certificate.
///
/// Produced by parsing the proxy-forwarded header, or supplied pre-parsed
/// by the hosting transport for direct TLS connections. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateModel {
    /// Subject Common Name, if present.
    pub subject_cn: Option<String>,
    /// Full subject Distinguished Name.
    pub subject_dn: String,
    /// SHA-1 over the DER-encoded subject name, lowercase hex.
    pub subject_hash: String,
    /// Full issuer Distinguished Name.
    pub issuer_dn: String,
    /// SHA-1 over the DER-encoded issuer name, lowercase hex.
    pub issuer_hash: String,
    /// Certificate serial number (hex, colon-separated).
    pub serial: String,
    /// Not valid before (Unix timestamp).
    pub not_before: i64,
    /// Not valid after (Unix timestamp).
    pub not_after: i64,
    /// Raw DER-encoded certificate bytes.
    pub raw_der: Vec<u8>,
}

impl CertificateModel {
    /// SHA-1 fingerprint of the DER-encoded certificate, lowercase hex.
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha1::digest(&self.raw_der))
    }

    /// An all-empty model stands for "no certificate", never a
    /// valid-but-empty identity.
    pub fn is_empty(&self) -> bool {
        self.subject_cn.is_none()
            && self.subject_dn.is_empty()
            && self.issuer_dn.is_empty()
            && self.serial.is_empty()
            && self.raw_der.is_empty()
    }

    /// Whether `now` falls inside the validity window. Both bounds are
    /// inclusive.
    pub fn valid_at(&self, now: i64) -> bool {
        self.not_before <= now && now <= self.not_after
    }
}

/// Parse a certificate forwarded by the proxy as a header value.
///
/// The header normally carries the base64 certificate body without
/// envelope delimiters; some proxies additionally URL-encode it, and a
/// few forward the full PEM block. All three forms are accepted.
pub fn parse_header_certificate(header: &str) -> Result<CertificateModel> {
    let der = decode_cert_data(header)?;
    parse_der(&der)
}

/// Parse a DER-encoded certificate into a model.
///
/// Used by hosts that terminate TLS themselves and hand the negotiated
/// peer certificate to the strategy through [`RequestContext`].
///
/// [`RequestContext`]: crate::request::RequestContext
pub fn parse_der_certificate(der: &[u8]) -> Result<CertificateModel> {
    parse_der(der)
}

/// Decode the header value down to DER bytes.
fn decode_cert_data(data: &str) -> Result<Vec<u8>> {
    let data = data.trim();

    // Proxies often URL-encode the header value
    let decoded = if data.contains('%') {
        urlencoding::decode(data)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| data.to_string())
    } else {
        data.to_string()
    };

    // Wrap bare base64 in the standard envelope, then extract the body
    let pem = if decoded.contains(PEM_BEGIN) {
        decoded
    } else {
        format!("{}{}{}", PEM_BEGIN, decoded, PEM_END)
    };

    let start = pem
        .find(PEM_BEGIN)
        .ok_or_else(|| anyhow!("invalid PEM: missing BEGIN marker"))?;
    let end = pem
        .find(PEM_END)
        .ok_or_else(|| anyhow!("invalid PEM: missing END marker"))?;
    ensure!(
        end >= start + PEM_BEGIN.len(),
        "invalid PEM: END marker precedes certificate body"
    );

    let body: String = pem[start + PEM_BEGIN.len()..end]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    STANDARD
        .decode(body.as_bytes())
        .context("failed to decode certificate base64 body")
}

/// Parse DER bytes into a certificate model.
fn parse_der(der: &[u8]) -> Result<CertificateModel> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| anyhow!("failed to parse X.509 certificate: {:?}", e))?;

    let subject_cn = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(String::from);

    let subject_dn = cert.subject().to_string();
    let issuer_dn = cert.issuer().to_string();
    let subject_hash = hex::encode(Sha1::digest(cert.subject().as_raw()));
    let issuer_hash = hex::encode(Sha1::digest(cert.issuer().as_raw()));

    let serial = cert
        .serial
        .to_bytes_be()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":");

    Ok(CertificateModel {
        subject_cn,
        subject_dn,
        subject_hash,
        issuer_dn,
        issuer_hash,
        serial,
        not_before: cert.validity().not_before.timestamp(),
        not_after: cert.validity().not_after.timestamp(),
        raw_der: der.to_vec(),
    })
}
