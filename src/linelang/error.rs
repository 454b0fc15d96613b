//! Error types for grammar loading, compilation and top-level parsing
//!
//! Diagnostics produced while matching lines are not errors; they live in
//! [`crate::linelang::parsing::diagnostics`] and are logged by the driver.

use thiserror::Error;

/// Failure to turn a rule descriptor into a compiled grammar.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("({rule}) Unsupported rule type: {kind}")]
    UnsupportedRuleType { rule: String, kind: String },

    #[error("({rule}) Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("({rule}) Rule of type `{kind}` expects {expected} as content")]
    InvalidContent {
        rule: String,
        kind: &'static str,
        expected: &'static str,
    },
}

/// Failure to read a rule descriptor from text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid JSON grammar: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML grammar: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown grammar format '{0}' (expected json, yaml or yml)")]
    UnknownFormat(String),
}

/// Outcome of a top-level parse that was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar matched, but lines were left over.
    #[error("Input not fully consumed: parsed {consumed} of {total} line(s)")]
    Incomplete { consumed: usize, total: usize },

    /// The grammar did not match at the first line.
    #[error("Input rejected by grammar ({total} line(s))")]
    Rejected { total: usize },
}
