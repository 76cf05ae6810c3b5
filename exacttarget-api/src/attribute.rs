//! Subscriber attribute keys and their field-tag spelling
//!
//! The API stores custom subscriber fields as XML elements whose names use
//! `__` as a word separator inside a single tag (`First__Name`). Callers name
//! attributes either as free text (`"first name"`) or as a symbolic
//! identifier (`first_name`); both end up as the same tag.

use crate::error::{ApiError, Result};

/// A caller-supplied attribute name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Free text, words separated by whitespace (`"first name"`)
    Text(String),
    /// Identifier, words separated by underscores (`first_name`)
    Symbol(String),
}

impl AttributeKey {
    pub fn text(key: impl Into<String>) -> Self {
        Self::Text(key.into())
    }

    pub fn symbol(key: impl Into<String>) -> Self {
        Self::Symbol(key.into())
    }

    /// The key as the caller wrote it
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Symbol(s) => s,
        }
    }
}

/// Ordered attribute values for an add request
///
/// The server accepts arbitrary custom fields, so this is an open key/value
/// sequence rather than a fixed record. Insertion order is the order the
/// fields appear in the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(AttributeKey, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-text keyed attribute
    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(AttributeKey::text(key), value);
        self
    }

    /// Add an identifier keyed attribute
    pub fn symbol(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(AttributeKey::symbol(key), value);
        self
    }

    pub fn insert(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pair every value with its formatted field tag, failing on the first bad key
    pub fn formatted(&self) -> Result<Vec<(String, String)>> {
        self.0
            .iter()
            .map(|(key, value)| Ok((format_attribute(key)?, value.clone())))
            .collect()
    }
}

impl FromIterator<(AttributeKey, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Convert an attribute key into the API's field tag
///
/// Each word is camelized and the words are joined with `__`:
/// `"first name"` and `first_name` both become `First__Name`.
pub fn format_attribute(key: &AttributeKey) -> Result<String> {
    let segments: Vec<&str> = match key {
        AttributeKey::Text(text) => text
            .split(|c: char| c == ' ' || c == '\r' || c == '\n')
            .filter(|s| !s.is_empty())
            .collect(),
        AttributeKey::Symbol(symbol) => {
            if !is_identifier(symbol) {
                return Err(ApiError::InvalidAttributeKind(format!(
                    "symbol '{}' is not an identifier",
                    symbol
                )));
            }
            symbol
                .split(|c: char| c == '_' || c == '\r' || c == '\n')
                .filter(|s| !s.is_empty())
                .collect()
        }
    };

    if segments.is_empty() {
        return Err(ApiError::InvalidAttributeKind(format!(
            "key '{}' has no words",
            key.as_str().escape_debug()
        )));
    }

    let tag = segments
        .iter()
        .map(|segment| camelize(segment))
        .collect::<Vec<_>>()
        .join("__");

    if !is_xml_name(&tag) {
        return Err(ApiError::InvalidAttributeKind(format!(
            "'{}' is not a valid field tag",
            tag
        )));
    }

    Ok(tag)
}

fn camelize(word: &str) -> String {
    word.split('_').map(capitalize).collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_xml_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
