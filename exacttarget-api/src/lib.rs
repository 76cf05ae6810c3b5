//! Client for the ExactTarget XML API
//!
//! The API speaks a fixed XML protocol over HTTPS form posts. Each request is
//! an `exacttarget` envelope with an authorization block and one
//! system/action block; each response is parsed back into a typed value.
//! Transport lives in the private `xml-client` crate.
//!
//! ```rust,no_run
//! use exacttarget_api::{Credentials, ExactTargetClient, SendToSubscriber};
//!
//! let client = ExactTargetClient::new(Credentials::new("user", "password"));
//!
//! // Resolves the subscriber id with a retrieve call, then sends
//! let job = client.send_to_subscriber(
//!     &SendToSubscriber::new("3003")
//!         .with_email_address("jo@example.com")
//!         .with_sender("Newsletter", "news@example.com"),
//! )?;
//! # Ok::<(), exacttarget_api::ApiError>(())
//! ```
//!
//! Application-level failures (a send job that was not created, a delete of
//! an unknown subscriber) are reported as `false`/`None`/empty values, not
//! as errors; see [`ApiError`] for what is.

pub mod attribute;
pub mod client;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod operation;
pub mod operations;
pub mod response;
pub mod system;

pub use attribute::{format_attribute, AttributeKey, Attributes};
pub use client::{ExactTargetClient, SendToSubscriber};
pub use credentials::Credentials;
pub use error::{ApiError, Result};
pub use operation::ExactTargetOperation;
pub use operations::Subscriber;
pub use system::System;
pub use xml_client::{XmlClient, XmlClientConfig, XmlClientError};
