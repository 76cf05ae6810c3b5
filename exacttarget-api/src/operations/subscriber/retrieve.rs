//! Retrieve operation for the subscriber system

use std::collections::BTreeMap;

use xmltree::Element;

use crate::envelope::Field;
use crate::operation::search_fields;
use crate::response::{element_text, find};
use crate::{ExactTargetOperation, Result, System};

/// The list every subscriber of an account belongs to
pub const ALL_SUBSCRIBERS_LIST: &str = "All Subscribers";

/// One retrieved subscriber
///
/// The field set is whatever the server returned. Names are normalized by
/// lower-casing and collapsing `__` to `_`, so `Email__Address` is available
/// as `email_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscriber {
    fields: BTreeMap<String, String>,
}

impl Subscriber {
    /// Build a record from a `<subscriber>` response element
    pub fn from_element(element: &Element) -> Self {
        element
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .map(|child| (normalize_field_name(&child.name), element_text(child)))
            .collect()
    }

    /// Value of a field by normalized name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The subscriber id (`subid`), `None` when absent or blank
    pub fn subscriber_id(&self) -> Option<&str> {
        self.get("subid").filter(|id| !id.trim().is_empty())
    }

    /// Name of the list this record was found on
    pub fn list_name(&self) -> Option<&str> {
        self.get("list_name")
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Subscriber {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// `Email__Address` -> `email_address`
pub fn normalize_field_name(name: &str) -> String {
    name.to_lowercase().replace("__", "_")
}

/// Look up a subscriber by email address
pub struct RetrieveSubscriberOperation;

/// Request for Retrieve operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieveSubscriberRequest {
    pub email: String,
    /// Restrict the lookup to one list; sent as an empty element when `None`
    pub list_id: Option<String>,
}

impl ExactTargetOperation for RetrieveSubscriberOperation {
    type Request = RetrieveSubscriberRequest;
    /// Every matching record in document order; empty when nothing matched
    type Response = Vec<Subscriber>;

    const SYSTEM: System = System::Subscriber;
    const ACTION: &'static str = "retrieve";

    fn build_fields(request: &Self::Request) -> Result<Vec<Field>> {
        Ok(search_fields(
            "listid",
            request.list_id.as_deref(),
            Some(request.email.as_str()),
        ))
    }

    fn parse_response(xml: &Element) -> Result<Self::Response> {
        let Some(system) = find(xml, &["system"]) else {
            return Ok(Vec::new());
        };

        Ok(system
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .filter(|element| element.name == Self::SYSTEM.name())
            .map(Subscriber::from_element)
            .collect())
    }
}
