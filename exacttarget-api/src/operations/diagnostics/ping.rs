//! Ping operation for the diagnostics system

use xmltree::Element;

use crate::envelope::Field;
use crate::response::text_at;
use crate::{ExactTargetOperation, Result, System};

/// Status text of a healthy API
pub const PING_RUNNING: &str = "Running";

/// Ping operation
pub struct PingOperation;

/// Request for Ping operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingRequest;

impl ExactTargetOperation for PingOperation {
    type Request = PingRequest;
    type Response = bool;

    const SYSTEM: System = System::Diagnostics;
    const ACTION: &'static str = "Ping";

    fn build_fields(_request: &Self::Request) -> Result<Vec<Field>> {
        Ok(Vec::new())
    }

    fn parse_response(xml: &Element) -> Result<Self::Response> {
        Ok(text_at(xml, &["system", "diagnostics", "Ping"]).as_deref() == Some(PING_RUNNING))
    }
}
