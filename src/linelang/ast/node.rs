//! AST node types
//!
//! Every node carries its rule name and the half-open line range `[begin, end)`
//! it consumed. Children of an interior node are kept in parse order.

use super::captures::Captures;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Ast {
    Leaf(Leaf),
    Interior(Interior),
}

/// One consumed line and its capture result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub name: String,
    pub begin: usize,
    pub end: usize,
    pub captures: Captures,
}

/// A node owning an ordered sequence of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interior {
    pub name: String,
    pub begin: usize,
    pub end: usize,
    pub children: Vec<Ast>,
}

impl Leaf {
    pub fn new(name: impl Into<String>, line: usize, captures: Captures) -> Self {
        Self {
            name: name.into(),
            begin: line,
            end: line + 1,
            captures,
        }
    }
}

impl Interior {
    pub fn new(name: impl Into<String>, begin: usize, end: usize, children: Vec<Ast>) -> Self {
        Self {
            name: name.into(),
            begin,
            end,
            children,
        }
    }
}

impl Ast {
    pub fn name(&self) -> &str {
        match self {
            Ast::Leaf(leaf) => &leaf.name,
            Ast::Interior(node) => &node.name,
        }
    }

    pub fn range(&self) -> Range<usize> {
        match self {
            Ast::Leaf(leaf) => leaf.begin..leaf.end,
            Ast::Interior(node) => node.begin..node.end,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Ast::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Ast::Leaf(leaf) => Some(leaf),
            Ast::Interior(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match self {
            Ast::Leaf(leaf) => Some(leaf),
            Ast::Interior(_) => None,
        }
    }

    /// Children in parse order; empty for a leaf.
    pub fn children(&self) -> &[Ast] {
        match self {
            Ast::Leaf(_) => &[],
            Ast::Interior(node) => &node.children,
        }
    }

    /// Mutable children, `None` for a leaf.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Ast>> {
        match self {
            Ast::Leaf(_) => None,
            Ast::Interior(node) => Some(&mut node.children),
        }
    }

    /// Keep only the direct children accepted by `keep`. No-op on a leaf.
    pub fn retain_children<F>(&mut self, keep: F)
    where
        F: FnMut(&Ast) -> bool,
    {
        if let Some(children) = self.children_mut() {
            children.retain(keep);
        }
    }

    /// All leaves under this node (itself included), in parse order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        match self {
            Ast::Leaf(leaf) => out.push(leaf),
            Ast::Interior(node) => {
                for child in &node.children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// First node named `name` in depth-first pre-order.
    pub fn find(&self, name: &str) -> Option<&Ast> {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }
}

impl From<Leaf> for Ast {
    fn from(leaf: Leaf) -> Self {
        Ast::Leaf(leaf)
    }
}

impl From<Interior> for Ast {
    fn from(node: Interior) -> Self {
        Ast::Interior(node)
    }
}
