//! Error body shared by every non-2xx API response.
//!
//! The body is `{"detail": ...}` where `detail` is either a plain message
//! (`"Space not found"`) or a list of field errors, each carrying a `loc`
//! path such as `["body", "title"]`, a human message, and a machine `type`.
//! Clients key field errors by the last `loc` element.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One segment of a field error location: an object key or a list index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocPart {
    Key(String),
    Index(u64),
}

impl fmt::Display for LocPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for LocPart {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<LocPart>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl FieldError {
    #[must_use]
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self { loc: loc.iter().copied().map(LocPart::from).collect(), msg: msg.into(), kind: kind.to_owned() }
    }

    /// The field this error belongs to, if the location names one.
    #[must_use]
    pub fn field(&self) -> Option<String> {
        if self.loc.len() < 2 {
            return None;
        }
        self.loc.last().map(ToString::to_string)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Fields(Vec<FieldError>),
    Message(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: Detail,
}

impl ErrorBody {
    #[must_use]
    pub fn message(msg: impl Into<String>) -> Self {
        Self { detail: Detail::Message(msg.into()) }
    }

    #[must_use]
    pub fn fields(errors: Vec<FieldError>) -> Self {
        Self { detail: Detail::Fields(errors) }
    }

    /// Field-keyed messages; empty for plain-message bodies.
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match &self.detail {
            Detail::Fields(errors) => field_errors(errors),
            Detail::Message(_) => BTreeMap::new(),
        }
    }

    /// The plain message, if this body carries one.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match &self.detail {
            Detail::Message(msg) => Some(msg),
            Detail::Fields(_) => None,
        }
    }
}

/// Collapse a field error list into `field -> message`.
///
/// Entries whose `loc` has fewer than two segments are skipped. When several
/// entries target the same field the last one wins.
#[must_use]
pub fn field_errors(errors: &[FieldError]) -> BTreeMap<String, String> {
    errors
        .iter()
        .filter_map(|err| err.field().map(|field| (field, err.msg.clone())))
        .collect()
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
