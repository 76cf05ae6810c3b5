//! The contract every protocol action implements

use xmltree::Element;

use crate::envelope::{Envelope, Field};
use crate::credentials::Credentials;
use crate::error::Result;
use crate::system::System;

/// Base trait for all ExactTarget API operations
///
/// An operation names the system and action it addresses, knows how to lay
/// out its request fields inside the system block, and how to read its
/// answer out of the response document.
pub trait ExactTargetOperation {
    /// The request data for this operation
    type Request;

    /// The typed result of this operation
    type Response;

    /// The backend system this operation belongs to
    const SYSTEM: System;

    /// The action name sent in the system block
    const ACTION: &'static str;

    /// Fields following `system_name` and `action`, in wire order
    ///
    /// Fails only on caller errors that must never reach the server.
    fn build_fields(request: &Self::Request) -> Result<Vec<Field>>;

    /// Read the typed result out of a parsed response document
    ///
    /// Application-level failures are negative values; only structural
    /// problems are errors.
    fn parse_response(xml: &Element) -> Result<Self::Response>;

    /// Assemble the full envelope for `request`
    fn build_envelope(credentials: &Credentials, request: &Self::Request) -> Result<Envelope> {
        Ok(Envelope::new(credentials, Self::SYSTEM, Self::ACTION)
            .with_fields(Self::build_fields(request)?))
    }
}

/// The `search_type`, `search_value`, `search_value2` triple most actions start with
pub(crate) fn search_fields(
    search_type: &str,
    value: Option<&str>,
    value2: Option<&str>,
) -> Vec<Field> {
    vec![
        Field::value("search_type", search_type),
        Field::optional("search_value", value),
        Field::optional("search_value2", value2),
    ]
}
