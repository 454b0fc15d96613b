//! Diagnostics recorded while matching lines
//!
//! A diagnostic names the rule that reported it, the 0-based line index and the
//! text of that line. It renders as
//! `(<rule>) Error in line <n>: <line text>: <reason>`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A terminal was asked to match past the last line.
    EndOfInput,
    /// A terminal's pattern did not match the line.
    NoMatch,
    /// A child of a sequence failed; tagged with the sequence's start line.
    ChildFailure,
    /// Every alternative of an `or` failed.
    NoAlternativeMatched,
    /// The grammar matched but lines remain after it.
    TrailingContent,
    /// The engine consumed more lines than exist. Always an engine bug.
    InternalOverrun,
}

impl DiagnosticKind {
    pub fn reason(self) -> &'static str {
        match self {
            DiagnosticKind::EndOfInput => "Unexpected end of input",
            DiagnosticKind::NoMatch => "Expression does not match",
            DiagnosticKind::ChildFailure => "Error in child rule",
            DiagnosticKind::NoAlternativeMatched => "None of the alternatives matches",
            DiagnosticKind::TrailingContent => "Unexpected content starting at this line",
            DiagnosticKind::InternalOverrun => {
                "Parser consumed past the end of input (this is a bug in the parser)"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: String,
    pub line: usize,
    /// Text of the offending line; `None` when `line` is past the input.
    pub text: Option<String>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn at<S: AsRef<str>>(rule: &str, line: usize, lines: &[S], kind: DiagnosticKind) -> Self {
        Self {
            rule: rule.to_string(),
            line,
            text: lines.get(line).map(|l| l.as_ref().to_string()),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) Error in line {}: {}: {}",
            self.rule,
            self.line,
            self.text.as_deref().unwrap_or("<end of input>"),
            self.kind.reason()
        )
    }
}

/// A failed rule, carrying the diagnostics that explain it, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub diagnostics: Vec<Diagnostic>,
}

impl Failure {
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }

    /// Append the diagnostic of an enclosing rule.
    pub fn wrap(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// The outermost diagnostic.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }
}
