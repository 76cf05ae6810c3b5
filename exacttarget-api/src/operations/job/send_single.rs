//! SendSingle operation for the job system

use xmltree::Element;

use crate::envelope::Field;
use crate::operation::search_fields;
use crate::response::{description, status_is};
use crate::{ExactTargetOperation, Result, System};

/// Status text of a created send job
pub const JOB_CREATED: &str = "Job was successfully created.";

/// Send one email to one subscriber
pub struct SendSingleOperation;

/// Request for SendSingle operation
///
/// The subscriber must already be resolved to an id; see
/// [`ExactTargetClient::send_to_subscriber`](crate::ExactTargetClient::send_to_subscriber)
/// for sending by email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSingleRequest {
    pub email_id: String,
    pub subscriber_id: String,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
}

impl ExactTargetOperation for SendSingleOperation {
    type Request = SendSingleRequest;
    /// The job description on success, `None` otherwise
    type Response = Option<String>;

    const SYSTEM: System = System::Job;
    const ACTION: &'static str = "send_single";

    fn build_fields(request: &Self::Request) -> Result<Vec<Field>> {
        let mut fields = search_fields(
            "emailid",
            Some(request.email_id.as_str()),
            Some(request.subscriber_id.as_str()),
        );
        fields.push(Field::optional("from_name", request.sender_name.as_deref()));
        fields.push(Field::optional("from_email", request.sender_email.as_deref()));
        Ok(fields)
    }

    fn parse_response(xml: &Element) -> Result<Self::Response> {
        if status_is(xml, Self::SYSTEM, JOB_CREATED) {
            description(xml, Self::SYSTEM).map(Some)
        } else {
            Ok(None)
        }
    }
}
