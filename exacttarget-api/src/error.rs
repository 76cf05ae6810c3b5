use thiserror::Error;
use xml_client::XmlClientError;

/// High-level API errors for ExactTarget operations
///
/// Only failures that prevent an answer from being obtained are errors. A
/// well-formed response that reports an application-level failure (a
/// subscriber that was already deleted, a job that was not created) is a
/// negative result value, never an `ApiError`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection, TLS or I/O failure reported by the transport.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The server answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Response parsing error
    ///
    /// The body is not well-formed XML, or a success response lacks the
    /// payload element that must accompany it.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A required parameter was not supplied
    #[error("Required parameter '{0}' is missing")]
    MissingParameter(&'static str),

    /// An attribute key that cannot be turned into a field tag
    #[error("Invalid attribute key: {0}")]
    InvalidAttributeKind(String),

    /// An email address did not resolve to a subscriber id
    #[error("Subscriber \"{0}\" does not seem to exist")]
    SubscriberNotFound(String),

    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<XmlClientError> for ApiError {
    fn from(error: XmlClientError) -> Self {
        match error {
            XmlClientError::Network(msg) => ApiError::NetworkError(msg),
            XmlClientError::Status(code) => ApiError::HttpStatus(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_client_error_conversion() {
        let api_error: ApiError = XmlClientError::Network("connection reset".to_string()).into();
        assert!(matches!(api_error, ApiError::NetworkError(_)));

        let api_error: ApiError = XmlClientError::Status(502).into();
        assert!(matches!(api_error, ApiError::HttpStatus(502)));
    }

    #[test]
    fn test_error_display() {
        let parse_err = ApiError::ParseError("invalid XML".to_string());
        assert_eq!(format!("{}", parse_err), "Parse error: invalid XML");

        let missing = ApiError::MissingParameter("email_id");
        assert_eq!(format!("{}", missing), "Required parameter 'email_id' is missing");

        let not_found = ApiError::SubscriberNotFound("jo@example.com".to_string());
        assert_eq!(
            format!("{}", not_found),
            "Subscriber \"jo@example.com\" does not seem to exist"
        );
    }
}
