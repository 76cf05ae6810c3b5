//! Error types for the XML transport

use thiserror::Error;

/// Errors that can occur while exchanging a document with the API
#[derive(Debug, Error)]
pub enum XmlClientError {
    /// Network, TLS or I/O failure before a response body was read
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),
}
