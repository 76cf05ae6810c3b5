//! Private HTTPS transport for the ExactTarget XML API
//!
//! This crate knows nothing about the XML protocol itself. It posts an
//! already-serialized document as the `XML` field of a form (alongside the
//! fixed `qf=xml` marker) and hands back the raw response body. Interpreting
//! that body is the job of the API crate.

mod error;

pub use error::XmlClientError;

use std::time::Duration;

/// Production endpoint of the XML API
pub const API_URI: &str = "https://api.dc1.exacttarget.com/integrate.aspx";

/// Environment variable that overrides the endpoint
pub const ENDPOINT_ENV: &str = "EXACTTARGET_ENDPOINT";

/// Connection settings for [`XmlClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlClientConfig {
    /// Full URL the form is posted to
    pub endpoint: String,
    /// Timeout for establishing the connection
    pub connect_timeout: Duration,
    /// Timeout for reading the response
    pub read_timeout: Duration,
}

impl Default for XmlClientConfig {
    fn default() -> Self {
        Self {
            endpoint: API_URI.to_string(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl XmlClientConfig {
    /// Default configuration with the endpoint taken from `EXACTTARGET_ENDPOINT` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        config
    }

    /// Replace the endpoint, keeping the timeouts
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// A minimal form-post client for the XML API
#[derive(Debug, Clone)]
pub struct XmlClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl XmlClient {
    /// Create a client for the production endpoint with default timeouts
    pub fn new() -> Self {
        Self::with_config(XmlClientConfig::default())
    }

    /// Create a client from explicit settings
    pub fn with_config(config: XmlClientConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(config.connect_timeout)
                .timeout_read(config.read_timeout)
                .build(),
            endpoint: config.endpoint,
        }
    }

    /// The URL documents are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post an XML document and return the raw response body
    ///
    /// A successful HTTP exchange may still carry an application-level
    /// failure inside the body; that is not inspected here.
    pub fn post(&self, document: &str) -> Result<String, XmlClientError> {
        tracing::debug!(endpoint = %self.endpoint, bytes = document.len(), "posting XML document");

        let response = self
            .agent
            .post(&self.endpoint)
            .send_form(&[("qf", "xml"), ("XML", document)])
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => XmlClientError::Status(code),
                other => XmlClientError::Network(other.to_string()),
            })?;

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| XmlClientError::Network(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(body)
    }
}

impl Default for XmlClient {
    fn default() -> Self {
        Self::new()
    }
}
