//! FEMS HTTP client implementation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{FemsError, Result};

/// Standard Base64 encoding of `"{username}:{password}"`, the payload of
/// an HTTP Basic `Authorization` header.
fn basic_credential(username: &str, password: &str) -> String {
    BASE64.encode(format!("{username}:{password}"))
}

/// The slice of a FEMS channel document the client cares about. Channel
/// responses also carry address/type/unit metadata, all ignored here.
#[derive(Debug, Deserialize)]
struct ChannelDocument {
    value: Option<serde_json::Value>,
}

/// Client for the FEMS REST channel interface.
///
/// Connection parameters and the Basic-Auth credential are fixed at
/// construction; the client is immutable afterwards and may be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct FemsClient {
    http: Client,
    base_url: Url,
}

impl FemsClient {
    /// Create a new FEMS client.
    ///
    /// The Basic-Auth credential is computed once here and installed as a
    /// default header on every request. No I/O is performed; construction
    /// fails only on a malformed host or an HTTP client build failure.
    ///
    /// # Arguments
    /// * `host` - Hostname or IP address of the FEMS server
    /// * `port` - Port of the REST interface (plain HTTP)
    /// * `username` - Username for Basic authentication
    /// * `password` - Password for Basic authentication
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Result<Self> {
        let credential = basic_credential(username, password);

        let mut headers = HeaderMap::new();
        // Base64 output is always ASCII, so this cannot fail for any input
        let mut value = HeaderValue::from_str(&format!("Basic {credential}"))
            .map_err(|e| FemsError::MalformedResponse(format!("invalid credential: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        let http = Client::builder().default_headers(headers).build()?;
        let base_url = Url::parse(&format!("http://{host}:{port}/"))?;

        Ok(Self { http, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Read the integer value of one telemetry channel.
    ///
    /// Performs a single blocking GET against the channel's REST path and
    /// extracts the `value` field from the JSON response; all other
    /// response fields are ignored. Each call is independent: no retries,
    /// no caching, no state carried between calls.
    #[instrument(skip(self))]
    pub fn fetch_int(&self, endpoint: Endpoint) -> Result<i64> {
        let url = self.base_url.join(endpoint.path())?;
        debug!(%url, "reading channel value");

        let response = self.http.get(url).send()?;

        let status = response.status().as_u16();
        if status > 299 {
            return Err(FemsError::RequestFailed { status });
        }

        let body = response.text()?;
        let document: ChannelDocument = serde_json::from_str(&body)
            .map_err(|e| FemsError::MalformedResponse(format!("invalid JSON: {e}")))?;

        match document.value {
            None => Err(FemsError::MalformedResponse(
                "missing or null `value` field".to_string(),
            )),
            Some(value) => value.as_i64().ok_or_else(|| {
                FemsError::MalformedResponse(format!("`value` is not an integer: {value}"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_matches_known_vector() {
        // RFC 7617 style vector: admin:secret
        assert_eq!(basic_credential("admin", "secret"), "YWRtaW46c2VjcmV0");
    }

    #[test]
    fn credential_handles_empty_password() {
        assert_eq!(basic_credential("x", ""), BASE64.encode("x:"));
    }

    #[test]
    fn construction_performs_no_io() {
        // TEST-NET address, nothing listening; construction must still succeed
        let client = FemsClient::new("203.0.113.1", 80, "x", "user").unwrap();
        assert_eq!(client.base_url().as_str(), "http://203.0.113.1/");
    }

    #[test]
    fn construction_rejects_malformed_host() {
        let err = FemsClient::new("not a host", 80, "x", "user").unwrap_err();
        assert!(matches!(err, FemsError::InvalidUrl(_)));
    }
}
