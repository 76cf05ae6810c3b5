//! Request envelope construction
//!
//! Every request is a single `exacttarget` document holding an
//! `authorization` block followed by one `system` block:
//!
//! ```text
//! <exacttarget>
//!   <authorization><username/><password/></authorization>
//!   <system><system_name/><action/> ...fields... </system>
//! </exacttarget>
//! ```
//!
//! Field order is significant to the server, so fields are written exactly in
//! the order they are added, and absent values still produce an empty element.

use xmltree::{Element, EmitterConfig, XMLNode};

use crate::credentials::Credentials;
use crate::error::{ApiError, Result};
use crate::system::System;

/// Name of the document root, in requests and responses
pub const ROOT: &str = "exacttarget";

/// One element inside the system block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A text element; `None` is written as an empty element
    Value { name: String, value: Option<String> },
    /// A nested element holding further fields
    Group { name: String, children: Vec<Field> },
}

impl Field {
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Field::Value {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn optional(name: impl Into<String>, value: Option<&str>) -> Self {
        Field::Value {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Field::Value {
            name: name.into(),
            value: None,
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<Field>) -> Self {
        Field::Group {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Field::Value { name, .. } | Field::Group { name, .. } => name,
        }
    }

    fn to_element(&self) -> Element {
        match self {
            Field::Value { name, value } => text_element(name, value.as_deref()),
            Field::Group { name, children } => {
                let mut element = Element::new(name);
                element
                    .children
                    .extend(children.iter().map(|c| XMLNode::Element(c.to_element())));
                element
            }
        }
    }
}

/// A complete request document for one action
#[derive(Debug, Clone)]
pub struct Envelope {
    credentials: Credentials,
    system: System,
    action: String,
    fields: Vec<Field>,
}

impl Envelope {
    pub fn new(credentials: &Credentials, system: System, action: impl Into<String>) -> Self {
        Self {
            credentials: credentials.clone(),
            system,
            action: action.into(),
            fields: Vec::new(),
        }
    }

    /// Append fields after `system_name` and `action`
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn system(&self) -> System {
        self.system
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Build the document tree
    pub fn to_element(&self) -> Element {
        let mut authorization = Element::new("authorization");
        push(&mut authorization, text_element("username", Some(self.credentials.username())));
        push(&mut authorization, text_element("password", Some(self.credentials.password())));

        let mut system = Element::new("system");
        push(&mut system, text_element("system_name", Some(self.system.name())));
        push(&mut system, text_element("action", Some(&self.action)));
        for field in &self.fields {
            push(&mut system, field.to_element());
        }

        let mut root = Element::new(ROOT);
        push(&mut root, authorization);
        push(&mut root, system);
        root
    }

    /// Serialize the envelope as a declaration-prefixed UTF-8 document
    pub fn to_xml(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.to_element()
            .write_with_config(
                &mut buffer,
                EmitterConfig::new()
                    .write_document_declaration(true)
                    .perform_indent(true),
            )
            .map_err(|e| ApiError::ParseError(format!("Failed to serialize envelope: {}", e)))?;

        String::from_utf8(buffer)
            .map_err(|e| ApiError::ParseError(format!("Envelope is not UTF-8: {}", e)))
    }
}

fn text_element(name: &str, value: Option<&str>) -> Element {
    let mut element = Element::new(name);
    if let Some(text) = value.filter(|t| !t.is_empty()) {
        element.children.push(XMLNode::Text(text.to_string()));
    }
    element
}

fn push(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}
