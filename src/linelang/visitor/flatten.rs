//! Flattening consumer
//!
//! Subscribes to no rule names. Its fallback collects the primary capture
//! (the whole matched line) of every leaf, in traversal order.

use super::Visitor;
use crate::linelang::ast::Ast;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flatten {
    lines: Vec<String>,
}

impl Flatten {
    pub fn new() -> Self {
        Self::default()
    }

    /// A visitor driving a fresh `Flatten`.
    pub fn visitor() -> Visitor<Flatten> {
        Visitor::new(Flatten::new()).otherwise(Flatten::collect)
    }

    /// Flatten `tree` bottom-up and return the collected consumer.
    pub fn run(tree: &mut Ast) -> Flatten {
        let mut visitor = Self::visitor();
        visitor.visit(tree);
        visitor.into_inner()
    }

    fn collect(&mut self, node: &mut Ast) {
        if let Some(leaf) = node.as_leaf() {
            self.lines.push(leaf.captures.primary().to_string());
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined with `\n`, newline-terminated. Empty when nothing was collected.
    pub fn to_text(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
