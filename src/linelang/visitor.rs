//! Name-keyed AST visitor
//!
//! A [`Visitor`] pairs a consumer value with a table of handlers keyed by rule
//! name. The table is built once, when the visitor is constructed; nodes whose
//! name has no entry go to the fallback handler (a no-op unless replaced).
//!
//! ```ignore
//! struct Ids { current: String }
//!
//! let mut visitor = Visitor::new(Ids { current: String::new() })
//!     .on("id", |ids, node| {
//!         if let Some(leaf) = node.as_leaf() {
//!             ids.current = leaf.captures.get(1).unwrap_or_default().to_string();
//!         }
//!     });
//! visitor.visit_top_down(&mut tree);
//! ```
//!
//! Handlers receive the node mutably, so they may rewrite captures or drop
//! children in place.

pub mod flatten;

pub use flatten::Flatten;

use crate::linelang::ast::Ast;
use std::collections::HashMap;

/// A handler invoked with the consumer and the visited node.
pub type Handler<C> = Box<dyn Fn(&mut C, &mut Ast)>;

/// Traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Children before their parent.
    BottomUp,
    /// Parent before its children.
    TopDown,
}

pub struct Visitor<C> {
    consumer: C,
    handlers: HashMap<String, Handler<C>>,
    fallback: Handler<C>,
}

impl<C> Visitor<C> {
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            handlers: HashMap::new(),
            fallback: Box::new(|_, _| {}),
        }
    }

    /// Register the handler for nodes named `name`, replacing any previous one.
    pub fn on<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut C, &mut Ast) + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    /// Replace the fallback used for names without a handler.
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut C, &mut Ast) + 'static,
    {
        self.fallback = Box::new(handler);
        self
    }

    pub fn handles(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Bottom-up traversal: children are dispatched before their parent.
    pub fn visit(&mut self, tree: &mut Ast) {
        if let Some(children) = tree.children_mut() {
            for child in children.iter_mut() {
                self.visit(child);
            }
        }
        self.dispatch(tree);
    }

    /// Top-down traversal: a node is dispatched before its children, so a
    /// handler that edits the children list decides what gets visited next.
    pub fn visit_top_down(&mut self, tree: &mut Ast) {
        self.dispatch(tree);
        if let Some(children) = tree.children_mut() {
            for child in children.iter_mut() {
                self.visit_top_down(child);
            }
        }
    }

    pub fn visit_in(&mut self, order: Order, tree: &mut Ast) {
        match order {
            Order::BottomUp => self.visit(tree),
            Order::TopDown => self.visit_top_down(tree),
        }
    }

    fn dispatch(&mut self, node: &mut Ast) {
        match self.handlers.get(node.name()) {
            Some(handler) => handler(&mut self.consumer, node),
            None => (self.fallback)(&mut self.consumer, node),
        }
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    pub fn into_inner(self) -> C {
        self.consumer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linelang::ast::{Captures, Interior, Leaf};

    #[derive(Default)]
    struct Trace {
        calls: Vec<String>,
    }

    fn tree() -> Ast {
        Interior::new(
            "pair",
            0,
            2,
            vec![
                Leaf::new("a", 0, Captures::from_groups([Some("a")])).into(),
                Leaf::new("b", 1, Captures::from_groups([Some("b")])).into(),
            ],
        )
        .into()
    }

    fn tracing_visitor() -> Visitor<Trace> {
        Visitor::new(Trace::default())
            .on("a", |t: &mut Trace, n: &mut Ast| t.calls.push(format!("custom:{}", n.name())))
            .otherwise(|t: &mut Trace, n: &mut Ast| t.calls.push(format!("default:{}", n.name())))
    }

    #[test]
    fn test_registered_and_fallback_handlers() {
        let mut visitor = tracing_visitor();
        visitor.visit(&mut tree());
        assert_eq!(
            visitor.into_inner().calls,
            vec!["custom:a", "default:b", "default:pair"]
        );
    }

    #[test]
    fn test_top_down_order() {
        let mut visitor = tracing_visitor();
        visitor.visit_in(Order::TopDown, &mut tree());
        assert_eq!(
            visitor.consumer().calls,
            vec!["default:pair", "custom:a", "default:b"]
        );
    }

    #[test]
    fn test_default_fallback_is_noop() {
        let mut visitor = Visitor::new(0usize).on("b", |count: &mut usize, _: &mut Ast| *count += 1);
        assert!(visitor.handles("b"));
        assert!(!visitor.handles("a"));
        visitor.visit(&mut tree());
        assert_eq!(*visitor.consumer(), 1);
    }

    #[test]
    fn test_handlers_mutate_in_place() {
        let mut t = tree();
        let mut visitor = Visitor::new(()).on("pair", |_: &mut (), node: &mut Ast| {
            node.retain_children(|c| c.name() != "b");
        });
        visitor.visit_top_down(&mut t);
        assert_eq!(t.children().len(), 1);
        assert_eq!(t.children()[0].name(), "a");
    }
}
