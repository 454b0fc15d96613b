//! Indented textual rendering of an AST
//!
//! ```text
//! <doc  range=[0, 2]
//!   <a  range=[0, 1]  data="a"/>,
//!   <b  range=[1, 2]  data="b"/>
//! />
//! ```
//!
//! Leaves show their capture groups joined by `,` (a group that did not
//! participate renders as nothing). Siblings are separated by `,\n`. An
//! interior node without children still gets its own empty line.

use super::node::Ast;
use std::fmt;

pub const DEFAULT_INDENT: &str = "  ";

impl Ast {
    pub fn pretty(&self) -> String {
        self.pretty_with_indent(DEFAULT_INDENT)
    }

    pub fn pretty_with_indent(&self, indent: &str) -> String {
        let mut out = String::new();
        write_node(&mut out, self, indent, 0);
        out
    }
}

fn write_node(out: &mut String, node: &Ast, indent: &str, level: usize) {
    let pad = indent.repeat(level);
    let range = node.range();
    match node {
        Ast::Leaf(leaf) => {
            let data = leaf
                .captures
                .groups()
                .iter()
                .map(|g| g.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&format!(
                "{}<{}  range=[{}, {}]  data=\"{}\"/>",
                pad, leaf.name, range.start, range.end, data
            ));
        }
        Ast::Interior(interior) => {
            out.push_str(&format!(
                "{}<{}  range=[{}, {}]\n",
                pad, interior.name, range.start, range.end
            ));
            for (i, child) in interior.children.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                write_node(out, child, indent, level + 1);
            }
            out.push('\n');
            out.push_str(&pad);
            out.push_str("/>");
        }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
