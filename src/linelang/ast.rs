//! The AST produced by a parse
//!
//! Two shapes only: a [`Leaf`] for one consumed line, an [`Interior`] node for
//! everything built out of sub-rules. Both are tagged with the rule name that
//! produced them, which is also the key visitors dispatch on.

pub mod captures;
pub mod node;
pub mod pretty;

pub use captures::Captures;
pub use node::{Ast, Interior, Leaf};
pub use pretty::DEFAULT_INDENT;
