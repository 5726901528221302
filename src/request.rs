//! Request-side view of an incoming connection.

use crate::strategy::CertificateModel;

/// What the hosting middleware exposes about an incoming request.
///
/// Implemented by the host for its HTTP stack of choice. Header lookup
/// must be case-insensitive on the header name.
pub trait RequestContext: Send + Sync {
    /// First value of the named header, if present.
    fn header_value(&self, name: &str) -> Option<String>;

    /// Whether the transport validated the peer's certificate chain
    /// against its trust store during the TLS handshake.
    fn transport_authorized(&self) -> bool;

    /// The peer certificate negotiated on the connection, if any.
    ///
    /// Anonymous and self-signed connections may surface an all-empty
    /// certificate here even when the transport reports authorized.
    fn transport_peer_certificate(&self) -> Option<CertificateModel>;
}
