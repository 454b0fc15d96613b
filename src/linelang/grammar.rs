//! Grammar description, compiled rule tree and the compiler between them

pub mod compiler;
pub mod descriptor;
pub mod rules;

pub use compiler::{anchor_pattern, anchored_regex, compile};
pub use descriptor::{Content, RuleDescriptor};
pub use rules::{Grammar, Rule, RuleId, RuleKind};
