//! Top-level parse entry
//!
//! [`LineParser`] owns a compiled grammar and turns text into an AST. A parse
//! is accepted only when every line was consumed. Otherwise the collected
//! diagnostics are written to the log and the caller either gets an error or,
//! when it asked for partial results, the best-effort tree.

use super::engine::Outcome;
use crate::linelang::ast::Ast;
use crate::linelang::error::{CompileError, ParseError};
use crate::linelang::grammar::{compile, Grammar, RuleDescriptor};

#[derive(Debug, Clone)]
pub struct LineParser {
    grammar: Grammar,
}

impl LineParser {
    /// Compile `descriptor` once; the parser can then be reused for any number of inputs.
    pub fn new(descriptor: &RuleDescriptor) -> Result<Self, CompileError> {
        Ok(Self::from_grammar(compile(descriptor)?))
    }

    pub fn from_grammar(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Split `input` into lines and parse them.
    pub fn parse_str(&self, input: &str, allow_partial: bool) -> Result<Ast, ParseError> {
        let lines: Vec<&str> = input.lines().collect();
        self.parse_lines(&lines, allow_partial)
    }

    pub fn parse_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        allow_partial: bool,
    ) -> Result<Ast, ParseError> {
        let outcome = self.grammar.run(lines);
        if outcome.is_complete() {
            return Ok(outcome.root);
        }

        for diagnostic in &outcome.diagnostics {
            log::warn!("{}", diagnostic);
        }
        let error = Self::rejection(&outcome);
        if allow_partial {
            log::info!("returning partial result: {}", error);
            Ok(outcome.root)
        } else {
            Err(error)
        }
    }

    fn rejection(outcome: &Outcome) -> ParseError {
        match outcome.end {
            Some(consumed) => ParseError::Incomplete {
                consumed,
                total: outcome.total,
            },
            None => ParseError::Rejected {
                total: outcome.total,
            },
        }
    }
}
