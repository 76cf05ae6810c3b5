//! Delete operation for the subscriber system

use xmltree::Element;

use crate::envelope::Field;
use crate::operation::search_fields;
use crate::response::status_is;
use crate::{ExactTargetOperation, Result, System};

/// Status text of a successful delete, spelled as the server spells it
pub const SUBSCRIBER_DELETED: &str = "Subscriber Deleted Sucessfully";

/// Delete a subscriber, either from one list or entirely
pub struct DeleteSubscriberOperation;

/// Request for Delete operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteSubscriberRequest {
    /// Remove `email` from the list `list_id`
    FromList { email: String, list_id: String },
    /// Delete the subscriber with id `subscriber_id`
    ById { subscriber_id: String },
}

impl ExactTargetOperation for DeleteSubscriberOperation {
    type Request = DeleteSubscriberRequest;
    type Response = bool;

    const SYSTEM: System = System::Subscriber;
    const ACTION: &'static str = "delete";

    fn build_fields(request: &Self::Request) -> Result<Vec<Field>> {
        Ok(match request {
            DeleteSubscriberRequest::FromList { email, list_id } => {
                search_fields("listid", Some(list_id.as_str()), Some(email.as_str()))
            }
            DeleteSubscriberRequest::ById { subscriber_id } => {
                search_fields("subid", Some(subscriber_id.as_str()), None)
            }
        })
    }

    fn parse_response(xml: &Element) -> Result<Self::Response> {
        Ok(status_is(xml, Self::SYSTEM, SUBSCRIBER_DELETED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::tests::{child_names, child_text, round_trip};
    use crate::response::parse_document;
    use crate::Credentials;
    use rstest::rstest;

    fn system_texts(request: &DeleteSubscriberRequest) -> Vec<(String, String)> {
        let envelope =
            DeleteSubscriberOperation::build_envelope(&Credentials::new("u", "p"), request).unwrap();
        let root = round_trip(&envelope);
        let system = root.get_child("system").unwrap().clone();
        child_names(&system)
            .into_iter()
            .map(|name| {
                let text = child_text(&system, &name).unwrap();
                (name, text)
            })
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn test_delete_variants_differ_only_in_search_fields() {
        let by_list = system_texts(&DeleteSubscriberRequest::FromList {
            email: "jo@example.com".to_string(),
            list_id: "123".to_string(),
        });
        let by_id = system_texts(&DeleteSubscriberRequest::ById {
            subscriber_id: "777".to_string(),
        });

        assert_eq!(
            by_list,
            pairs(&[
                ("system_name", "subscriber"),
                ("action", "delete"),
                ("search_type", "listid"),
                ("search_value", "123"),
                ("search_value2", "jo@example.com"),
            ])
        );
        assert_eq!(
            by_id,
            pairs(&[
                ("system_name", "subscriber"),
                ("action", "delete"),
                ("search_type", "subid"),
                ("search_value", "777"),
                ("search_value2", ""),
            ])
        );
    }

    #[rstest]
    #[case("Subscriber Deleted Sucessfully", true)]
    #[case("Subscriber Deleted Successfully", false)]
    #[case("Subscriber not found", false)]
    fn test_delete_response_parsing(#[case] info: &str, #[case] expected: bool) {
        let xml = parse_document(&format!(
            "<exacttarget><system><subscriber><subscriber_info>{}</subscriber_info></subscriber></system></exacttarget>",
            info
        ))
        .unwrap();

        assert_eq!(DeleteSubscriberOperation::parse_response(&xml).unwrap(), expected);
    }

    #[test]
    fn test_delete_response_without_info() {
        let xml = parse_document("<exacttarget><system><subscriber/></system></exacttarget>").unwrap();
        assert!(!DeleteSubscriberOperation::parse_response(&xml).unwrap());
    }
}
