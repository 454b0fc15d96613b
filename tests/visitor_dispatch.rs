//! Visitors over parsed documents
//!
//! Exercises name-keyed dispatch on real parse output, including a consumer
//! that rewrites captures and prunes children before flattening.

use linelang::linelang::ast::Ast;
use linelang::linelang::grammar::RuleDescriptor as R;
use linelang::linelang::visitor::Order;
use linelang::linelang::{Flatten, LineParser, Visitor};
use std::fs;

fn parse_blocks() -> Ast {
    let desc = R::from_json_str(&fs::read_to_string("tests/fixtures/blocks.json").unwrap())
        .unwrap();
    let source = fs::read_to_string("tests/fixtures/blocks.txt").unwrap();
    LineParser::new(&desc).unwrap().parse_str(&source, false).unwrap()
}

fn parse_pair() -> Ast {
    let desc = R::seq("pair", vec![R::terminal("a", "a"), R::terminal("b", "b")]);
    LineParser::new(&desc).unwrap().parse_str("a\nb", false).unwrap()
}

#[derive(Default)]
struct Calls {
    custom: Vec<String>,
    fallback: Vec<String>,
}

#[test]
fn handler_for_a_and_fallback_for_b() {
    let mut ast = parse_pair();
    let mut visitor = Visitor::new(Calls::default())
        .on("a", |c: &mut Calls, n: &mut Ast| c.custom.push(n.name().to_string()))
        .otherwise(|c: &mut Calls, n: &mut Ast| c.fallback.push(n.name().to_string()));

    visitor.visit(&mut ast);
    let calls = visitor.into_inner();
    assert_eq!(calls.custom, vec!["a"]);
    assert_eq!(calls.fallback, vec!["b", "pair", "start"]);
}

#[test]
fn flatten_pair_in_parse_order() {
    let mut ast = parse_pair();
    let flat = Flatten::run(&mut ast);
    assert_eq!(flat.lines(), ["a", "b"]);
    assert_eq!(flat.to_text(), "a\nb\n");
}

/// Rewrites text lines with the id of their block and drops the id lines.
#[derive(Default)]
struct Relabel {
    current_id: String,
}

impl Relabel {
    fn visitor() -> Visitor<Relabel> {
        Visitor::new(Relabel::default())
            .on("id", |r: &mut Relabel, node: &mut Ast| {
                if let Some(leaf) = node.as_leaf() {
                    r.current_id = leaf.captures.get(1).unwrap_or_default().to_string();
                }
            })
            .on("jtxt", |r: &mut Relabel, node: &mut Ast| {
                if let Some(leaf) = node.as_leaf_mut() {
                    let text = format!("[{}]{}", r.current_id, leaf.captures.get(1).unwrap_or_default());
                    leaf.captures.set(0, text);
                }
            })
            .on("ctxt", |r: &mut Relabel, node: &mut Ast| {
                if let Some(leaf) = node.as_leaf_mut() {
                    let text = format!(";[{}]{}", r.current_id, leaf.captures.primary());
                    leaf.captures.set(0, text);
                }
            })
            .on("block", |_: &mut Relabel, node: &mut Ast| {
                node.retain_children(|c| ["jtxt", "ctxt", "whitespace"].contains(&c.name()));
            })
    }
}

#[test]
fn mutating_visitor_then_flatten() {
    let mut ast = parse_blocks();
    Relabel::visitor().visit(&mut ast);

    let flat = Flatten::run(&mut ast);
    assert_eq!(
        flat.lines(),
        ["[1]Hello there", ";[1]; greeting", "", "[2]Goodbye"]
    );
}

#[test]
fn top_down_pruning_skips_removed_children() {
    let mut ast = parse_blocks();
    let mut visitor = Visitor::new(Vec::<String>::new())
        .on("block", |_: &mut Vec<String>, node: &mut Ast| {
            node.retain_children(|c| c.name() != "id");
        })
        .otherwise(|seen: &mut Vec<String>, node: &mut Ast| {
            if node.is_leaf() {
                seen.push(node.name().to_string());
            }
        });

    visitor.visit_in(Order::TopDown, &mut ast);
    assert!(!visitor.consumer().iter().any(|n| n == "id"));
    assert_eq!(visitor.consumer().len(), 4);
}
