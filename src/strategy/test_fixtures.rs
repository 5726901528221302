//! Certificates shared by the strategy tests.
//!
//! Both are self-signed. The client certificate is valid until 2090; the
//! stale one expired at the end of 2020.

use super::certificate::{parse_header_certificate, CertificateModel};

/// Base64 DER body as the proxy forwards it: one line, no envelope.
pub const VALID_CERT_B64: &str = concat!(
    "MIIC7zCCAdegAwIBAgIFESIzRFUwDQYJKoZIhvcNAQELBQAwODEcMBoGA1UEAwwTY2xpZW50LmV4",
    "YW1wbGUudGVzdDEYMBYGA1UECgwPRXhhbXBsZSBNZXRyaWNzMCAXDTI0MDEwMTAwMDAwMFoYDzIw",
    "OTAwMTAxMDAwMDAwWjA4MRwwGgYDVQQDDBNjbGllbnQuZXhhbXBsZS50ZXN0MRgwFgYDVQQKDA9F",
    "eGFtcGxlIE1ldHJpY3MwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQDM6rGIPlIkiiG8",
    "6vY1Z4BWIqkGn4WDNLeQtFyDAjo2gPu0jMreeDdFq2TALxieVTUxVatOIOgPlybd+/Ai+4lXcEsk",
    "v8dVWL/a0T/WDFf3pXMG4V28tztEY4QpX7TcxDmTNJQzPLMN1Og7Tw3LNNmf6nzEkHhGzCWPUTNN",
    "gnGa+ndwohjhlJe8Tl8njNQk3H9EDxlOc5ccGgji/ld5ueAV9FFIXsLOrVJxztSTzG3n5eNt3Z52",
    "TVMBcW7A/k4tA9kyYqgWl0Vs7fKQ4v2spyEZewMn0nphyyFpoLiUIYL6i/EjieueTirWfEbHfDQa",
    "yYGu0U6cyckIimFHm5c0vLG5AgMBAAEwDQYJKoZIhvcNAQELBQADggEBAEynj2rS1xTLaV8wS9Wm",
    "xPoIUItUMcOcl8XitjFsfACNnu3nb7UodBWl1RV6GC84IIKAZMBhMiKK6diND5PKwyxdudRR+aPX",
    "KXgDmbNaXTbF0+x+1VYF/8WAjTyJyDOIDYSxK3H3ga9i3N6ALkVtXt1lY9LfY1TG6KnWj53TSX5F",
    "Kk8todmnFMQceMRf6M3IAyuYdl0xK0MLG+Yr+4CqqgLgklpm4ZiDKmcbl78XeXpedI4sJqjlpj5l",
    "z6hww/iCKU1uJQv+OiMpzrRj/Szx1YBXkC3ZXeWdfI6LM6Dp+V4wi52FHOldrqIVDVvdH7eR6mi5",
    "xJjTI8xCwaoQaCFEpOw=",
);

/// SHA-1 over the DER-encoded issuer name of [`VALID_CERT_B64`].
pub const VALID_ISSUER_HASH: &str = "73d07576f1dc15e50b5df2c82f0c2437e7208ea9";

/// SHA-1 fingerprint of the full DER of [`VALID_CERT_B64`].
pub const VALID_FINGERPRINT: &str = "e2d9e7aa54b0d4418553072ff34ea4d7d9766ff6";

/// CN=stale.example.test, valid 2020-01-01 through 2021-01-01.
pub const EXPIRED_CERT_B64: &str = concat!(
    "MIIC6jCCAdKgAwIBAgIEAJmquzANBgkqhkiG9w0BAQsFADA3MRswGQYDVQQDDBJzdGFsZS5leGFt",
    "cGxlLnRlc3QxGDAWBgNVBAoMD0V4YW1wbGUgTWV0cmljczAeFw0yMDAxMDEwMDAwMDBaFw0yMTAx",
    "MDEwMDAwMDBaMDcxGzAZBgNVBAMMEnN0YWxlLmV4YW1wbGUudGVzdDEYMBYGA1UECgwPRXhhbXBs",
    "ZSBNZXRyaWNzMIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA6eWwy2JJZkMgFlU/Bwe1",
    "/hfqz4+x2A2RHsh6k9Pw99l/f/FVDLVj9nSoF+G0sQInUSHolYGJ4lZTa/U/MEq0VXjFk9ZhjQfW",
    "w9GWEHg+S6lUuNJI2NENn2u6tsxK9Vcl/i0B+CqnrjzDmOpkFxTvn4QdtXPWeMH9lL60CrORISG/",
    "SJcIDtesy2Jlg/PzODdFXbo63MnJDEb0Oy253CrfhmlWIqa47xJXoN18kOKybIpocWY2baB2O+e8",
    "fdSy8gB7zUgWOUeIYJ7IW61O4Va99a4WKTG3CX2g+abaSZ/U7Ueqg3ROyLt5oAZkj9H6REC9W96O",
    "FI9QGvIpXt4Fgjv6OQIDAQABMA0GCSqGSIb3DQEBCwUAA4IBAQAnX+ZsCC+kOfrxowwrb5mQnncW",
    "IxRKTvoyxA/7s+yjcTX4rwha+AUReCOEKmBi3cbfGsHV6xzKibsOLuQyw1ctv+LWROLY2RHeOLfv",
    "s3caTqXi9YoTrskCUJD2KIdlCYVYxPzo8Ta6riNNoOZR39j8Cvs00Cq7OjeaNeuSe/IpCwusPZPk",
    "Eo+FPCtOgTELzDHhWPWlHZN1HwKZsYS04nw+gNSCIn5k6gr2nSKWkJoT2TiH1PTws2dqD3pMCS5K",
    "sex6DIdO0pb09LLqHVAcP5aYMf2KI9+Z2gMmgU7xT5TQipM84JgTdXCYVDzK15LmigYDWwVCNg8n",
    "XGBs3dpkO9Bc",
);

/// SHA-1 over the DER-encoded issuer name of [`EXPIRED_CERT_B64`].
pub const EXPIRED_ISSUER_HASH: &str = "20f17bd537ae07a00fd32d61d5ea0a2411a7bee8";

pub fn valid_cert_model() -> CertificateModel {
    parse_header_certificate(VALID_CERT_B64).unwrap()
}

pub fn expired_cert_model() -> CertificateModel {
    parse_header_certificate(EXPIRED_CERT_B64).unwrap()
}

pub fn empty_cert_model() -> CertificateModel {
    CertificateModel {
        subject_cn: None,
        subject_dn: String::new(),
        subject_hash: String::new(),
        issuer_dn: String::new(),
        issuer_hash: String::new(),
        serial: String::new(),
        not_before: 0,
        not_after: 0,
        raw_der: Vec::new(),
    }
}
