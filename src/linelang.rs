//! Main module for linelang library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod grammar;
pub mod parsing;
pub mod visitor;

pub use ast::Ast;
pub use error::{CompileError, LoadError, ParseError};
pub use grammar::{compile, Grammar, RuleDescriptor};
pub use parsing::LineParser;
pub use visitor::{Flatten, Visitor};
