//! Add operation for the subscriber system

use xmltree::Element;

use crate::attribute::Attributes;
use crate::envelope::Field;
use crate::operation::search_fields;
use crate::response::{description, status_is};
use crate::{ExactTargetOperation, Result, System};

/// Status text of a successful add or update
pub const SUBSCRIBER_ADDED: &str = "Subscriber was added/updated successfully";

/// Add (or update) a subscriber on a list
pub struct AddSubscriberOperation;

/// Request for Add operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSubscriberRequest {
    pub email: String,
    pub list_id: String,
    /// Custom fields, written after the injected address and status
    pub attributes: Attributes,
}

impl ExactTargetOperation for AddSubscriberOperation {
    type Request = AddSubscriberRequest;
    /// The subscriber description on success, `None` otherwise
    type Response = Option<String>;

    const SYSTEM: System = System::Subscriber;
    const ACTION: &'static str = "add";

    fn build_fields(request: &Self::Request) -> Result<Vec<Field>> {
        let mut values = vec![
            Field::value("Email__Address", request.email.as_str()),
            Field::value("status", "active"),
        ];
        values.extend(
            request
                .attributes
                .formatted()?
                .into_iter()
                .map(|(tag, value)| Field::value(tag, value)),
        );

        let mut fields = search_fields("listid", Some(request.list_id.as_str()), None);
        fields.push(Field::group("values", values));
        Ok(fields)
    }

    fn parse_response(xml: &Element) -> Result<Self::Response> {
        if status_is(xml, Self::SYSTEM, SUBSCRIBER_ADDED) {
            description(xml, Self::SYSTEM).map(Some)
        } else {
            Ok(None)
        }
    }
}
