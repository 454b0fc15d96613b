//! Recursive-descent engine over compiled rules
//!
//! Every rule follows one contract: given the lines and a start index, either
//! return a [`Step`] (the index after the consumed lines plus the AST nodes to
//! append to the caller's container) or a [`Failure`]. Nothing is written to a
//! shared container, so a failed rule never leaves partial output behind.
//!
//! Speculative callers (`or`, `repeat`, optional) drop the failures of their
//! trials and report only their own outcome.

use super::diagnostics::{Diagnostic, DiagnosticKind, Failure};
use crate::linelang::ast::{Ast, Captures, Interior, Leaf};
use crate::linelang::grammar::{Grammar, RuleId, RuleKind};

/// Name of the root node wrapping a whole parse.
pub const ROOT_NAME: &str = "start";

/// A successful rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Index of the first line not consumed.
    pub next: usize,
    /// Nodes to append to the enclosing container, in order.
    pub nodes: Vec<Ast>,
}

impl Step {
    fn empty(next: usize) -> Self {
        Self {
            next,
            nodes: Vec::new(),
        }
    }
}

pub type RuleResult = Result<Step, Failure>;

/// Result of running the whole grammar over an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Root node named [`ROOT_NAME`], spanning `[0, end]`. Empty when the
    /// grammar failed outright.
    pub root: Ast,
    /// Index reached by the grammar, `None` if it failed.
    pub end: Option<usize>,
    /// Total number of input lines.
    pub total: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    /// True when every line was consumed.
    pub fn is_complete(&self) -> bool {
        self.end == Some(self.total)
    }
}

impl Grammar {
    /// Run the anchored grammar over `lines`.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> Outcome {
        let total = lines.len();
        let anchor = self.rule(self.root());
        let result = match anchor.kind {
            RuleKind::Anchor(inner) => self.parse_rule(inner, lines, 0),
            _ => self.parse_rule(self.root(), lines, 0),
        };

        match result {
            Ok(step) => {
                let mut diagnostics = Vec::new();
                if step.next > total {
                    diagnostics.push(Diagnostic::at(
                        &anchor.name,
                        step.next,
                        lines,
                        DiagnosticKind::InternalOverrun,
                    ));
                } else if step.next < total {
                    diagnostics.push(Diagnostic::at(
                        &anchor.name,
                        step.next,
                        lines,
                        DiagnosticKind::TrailingContent,
                    ));
                }
                Outcome {
                    root: Interior::new(ROOT_NAME, 0, step.next, step.nodes).into(),
                    end: Some(step.next),
                    total,
                    diagnostics,
                }
            }
            Err(failure) => Outcome {
                root: Interior::new(ROOT_NAME, 0, 0, Vec::new()).into(),
                end: None,
                total,
                diagnostics: failure.diagnostics,
            },
        }
    }

    /// Apply one rule at `index`.
    pub fn parse_rule<S: AsRef<str>>(&self, id: RuleId, lines: &[S], index: usize) -> RuleResult {
        let rule = self.rule(id);
        match &rule.kind {
            RuleKind::Terminal(regex) => {
                let Some(line) = lines.get(index) else {
                    return Err(Failure::new(Diagnostic::at(
                        &rule.name,
                        index,
                        lines,
                        DiagnosticKind::EndOfInput,
                    )));
                };
                match regex.captures(line.as_ref()) {
                    Some(caps) => {
                        let leaf = Leaf::new(&rule.name, index, Captures::from_match(regex, &caps));
                        Ok(Step {
                            next: index + 1,
                            nodes: vec![leaf.into()],
                        })
                    }
                    None => Err(Failure::new(Diagnostic::at(
                        &rule.name,
                        index,
                        lines,
                        DiagnosticKind::NoMatch,
                    ))),
                }
            }

            RuleKind::Sequential(children) => {
                let mut next = index;
                let mut nodes = Vec::new();
                for &child in children {
                    match self.parse_rule(child, lines, next) {
                        Ok(step) => {
                            next = step.next;
                            nodes.extend(step.nodes);
                        }
                        Err(failure) => {
                            return Err(failure.wrap(Diagnostic::at(
                                &rule.name,
                                index,
                                lines,
                                DiagnosticKind::ChildFailure,
                            )));
                        }
                    }
                }
                Ok(Step {
                    next,
                    nodes: vec![Interior::new(&rule.name, index, next, nodes).into()],
                })
            }

            RuleKind::Alternation(alternatives) => {
                for &alt in alternatives {
                    match self.parse_rule(alt, lines, index) {
                        Ok(step) => return Ok(step),
                        Err(failure) => {
                            log::trace!(
                                "({}) alternative '{}' rejected at line {}: {} diagnostic(s) dropped",
                                rule.name,
                                self.rule(alt).name,
                                index,
                                failure.diagnostics.len()
                            );
                        }
                    }
                }
                Err(Failure::new(Diagnostic::at(
                    &rule.name,
                    index,
                    lines,
                    DiagnosticKind::NoAlternativeMatched,
                )))
            }

            RuleKind::Repetition(inner) => {
                let mut next = index;
                let mut nodes = Vec::new();
                // A success that does not advance ends the loop as well;
                // otherwise a rule matching zero lines would repeat forever.
                while let Ok(step) = self.parse_rule(*inner, lines, next) {
                    if step.next <= next {
                        break;
                    }
                    next = step.next;
                    nodes.extend(step.nodes);
                }
                Ok(Step {
                    next,
                    nodes: vec![Interior::new(&rule.name, index, next, nodes).into()],
                })
            }

            RuleKind::Optional(inner) => match self.parse_rule(*inner, lines, index) {
                Ok(step) => Ok(step),
                Err(_) => Ok(Step::empty(index)),
            },

            // Only meaningful at the root, where `run` checks full consumption.
            RuleKind::Anchor(inner) => self.parse_rule(*inner, lines, index),
        }
    }
}
