//! Client certificate authentication for services behind TLS-offloading
//! proxies.
//!
//! The strategy accepts a client identity from one of two trust roots:
//! certificates validated by the local TLS transport during the handshake,
//! or certificates forwarded by a reverse proxy in the `X-ARR-ClientCert`
//! header and re-checked against a configured trust policy (validity
//! window, issuer, fingerprint). Accepted certificates are handed to a
//! caller-supplied verify callback that resolves them to application
//! identities.
//!
//! A redb-backed session store with expiry housekeeping and a handful of
//! resource reference tables round out the middleware surface.

pub mod logging;
pub mod lookup;
pub mod request;
pub mod session;
pub mod strategy;

pub use request::RequestContext;
pub use session::{SessionRecord, SessionStore};
pub use strategy::{
    AuthOutcome, AuthStrategy, CertificateModel, ClientCertStrategy, FailReason, Identity,
    TrustPolicyConfig, Verifier, CLIENT_CERT_HEADER,
};
