//! Response document helpers
//!
//! Every answer is an `exacttarget` document with a `system` section that
//! contains one subsystem element (`diagnostics`, `subscriber`, `job`).
//! Failure responses routinely omit elements that success responses carry,
//! so lookups return `Option` and callers decide what absence means.

use xmltree::Element;

use crate::envelope::ROOT;
use crate::error::{ApiError, Result};
use crate::system::System;

/// Parse a raw response body
///
/// Malformed XML is a protocol error, never a negative result.
pub fn parse_document(body: &str) -> Result<Element> {
    Element::parse(body.as_bytes())
        .map_err(|e| ApiError::ParseError(format!("Malformed response XML: {}", e)))
}

/// Follow `path` from the document root (`exacttarget/system/...`)
pub fn find<'a>(root: &'a Element, path: &[&str]) -> Option<&'a Element> {
    if root.name != ROOT {
        return None;
    }
    path.iter()
        .try_fold(root, |element, name| element.get_child(*name))
}

/// Text of the element at `path`, empty string when the element has no text
pub fn text_at(root: &Element, path: &[&str]) -> Option<String> {
    find(root, path).map(element_text)
}

/// The section of `system` inside the response
pub fn section(root: &Element, system: System) -> Option<&Element> {
    find(root, &["system", system.name()])
}

/// Whether the system's status element carries exactly `expected`
pub fn status_is(root: &Element, system: System, expected: &str) -> bool {
    system
        .info_element()
        .and_then(|info| text_at(root, &["system", system.name(), info]))
        .map_or(false, |status| status == expected)
}

/// The description accompanying a successful status
///
/// Only called once the success marker matched, so a missing element means
/// the server broke its own response shape.
pub fn description(root: &Element, system: System) -> Result<String> {
    let name = system.description_element().ok_or_else(|| {
        ApiError::ParseError(format!("{} responses carry no description", system.name()))
    })?;

    text_at(root, &["system", system.name(), name])
        .ok_or_else(|| ApiError::ParseError(format!("Missing {} element", name)))
}

pub(crate) fn element_text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB_CREATED: &str = r#"<?xml version="1.0"?>
        <exacttarget>
            <system>
                <job>
                    <job_info>Job was successfully created.</job_info>
                    <job_description>1234</job_description>
                </job>
            </system>
        </exacttarget>"#;

    #[test]
    fn test_parse_document_rejects_malformed_xml() {
        match parse_document("<exacttarget><system>") {
            Err(ApiError::ParseError(msg)) => assert!(msg.contains("Malformed response XML")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
        assert!(matches!(parse_document(""), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_find_follows_path() {
        let root = parse_document(JOB_CREATED).unwrap();
        assert_eq!(
            text_at(&root, &["system", "job", "job_description"]).as_deref(),
            Some("1234")
        );
        assert!(find(&root, &["system", "subscriber"]).is_none());
        assert!(section(&root, System::Job).is_some());
    }

    #[test]
    fn test_find_requires_exacttarget_root() {
        let root = parse_document("<other><system><job/></system></other>").unwrap();
        assert!(find(&root, &["system", "job"]).is_none());
    }

    #[test]
    fn test_status_is_exact_match() {
        let root = parse_document(JOB_CREATED).unwrap();
        assert!(status_is(&root, System::Job, "Job was successfully created."));
        assert!(!status_is(&root, System::Job, "Job was successfully created"));
        assert!(!status_is(&root, System::Subscriber, "Job was successfully created."));
    }

    #[test]
    fn test_description() {
        let root = parse_document(JOB_CREATED).unwrap();
        assert_eq!(description(&root, System::Job).unwrap(), "1234");

        match description(&root, System::Subscriber) {
            Err(ApiError::ParseError(msg)) => assert!(msg.contains("subscriber_description")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_element_text() {
        let root = parse_document("<exacttarget><system><job><job_info/></job></system></exacttarget>")
            .unwrap();
        assert_eq!(text_at(&root, &["system", "job", "job_info"]).as_deref(), Some(""));
    }
}
