//! Rule descriptors - the declarative grammar description
//!
//! A descriptor is plain data, usually read from JSON or YAML:
//!
//! ```text
//! { "name": "block", "type": "seq", "content": [
//!     { "name": "id",   "content": "#(\\d+)" },
//!     { "name": "text", "type": "repeat", "content": { "name": "line", "content": ".+" } }
//! ] }
//! ```
//!
//! `type` is kept as free text here. Resolving it (and rejecting unknown values)
//! is the compiler's job, so a bad grammar fails at compile time with a precise
//! error instead of a generic deserialization message.

use crate::linelang::error::LoadError;
use serde::{Deserialize, Serialize};

/// One parsing rule as described by the grammar author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Doubles as the AST tag and the visitor dispatch key.
    #[serde(default)]
    pub name: String,

    /// `terminal`, `seq`, `or` or `repeat`. Absent (or null) means `terminal`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// Payload of a descriptor; its expected shape depends on the rule type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Regex source of a terminal.
    Pattern(String),
    /// Ordered children of `seq` / `or`.
    Many(Vec<RuleDescriptor>),
    /// Single child of `repeat`.
    One(Box<RuleDescriptor>),
}

impl RuleDescriptor {
    pub fn terminal(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            optional: false,
            content: Some(Content::Pattern(pattern.into())),
        }
    }

    pub fn seq(name: impl Into<String>, children: Vec<RuleDescriptor>) -> Self {
        Self::composite(name, "seq", Content::Many(children))
    }

    pub fn or(name: impl Into<String>, alternatives: Vec<RuleDescriptor>) -> Self {
        Self::composite(name, "or", Content::Many(alternatives))
    }

    pub fn repeat(name: impl Into<String>, inner: RuleDescriptor) -> Self {
        Self::composite(name, "repeat", Content::One(Box::new(inner)))
    }

    /// Mark this rule as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn composite(name: impl Into<String>, kind: &str, content: Content) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind.to_string()),
            optional: false,
            content: Some(content),
        }
    }

    /// Parse a descriptor from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a descriptor from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse a descriptor, picking the syntax from a file extension
    /// (`json`, `yaml` or `yml`, case-insensitive).
    pub fn from_str_with_format(text: &str, format: &str) -> Result<Self, LoadError> {
        match format.to_ascii_lowercase().as_str() {
            "json" => Self::from_json_str(text),
            "yaml" | "yml" => Self::from_yaml_str(text),
            other => Err(LoadError::UnknownFormat(other.to_string())),
        }
    }
}
