//! # linelang
//!
//! A parser for line-oriented text driven by a declarative grammar.
//!
//! A grammar description (JSON or YAML) is compiled once into an immutable
//! rule tree ([`linelang::grammar::Grammar`]). Each parse walks the input
//! lines against that tree and yields an [`linelang::ast::Ast`], which
//! consumers then traverse through [`linelang::visitor::Visitor`].

pub mod linelang;
