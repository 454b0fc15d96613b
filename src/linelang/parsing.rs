//! Parsing: the rule engine, its diagnostics and the top-level driver

pub mod diagnostics;
pub mod driver;
pub mod engine;

pub use diagnostics::{Diagnostic, DiagnosticKind, Failure};
pub use driver::LineParser;
pub use engine::{Outcome, RuleResult, Step, ROOT_NAME};
