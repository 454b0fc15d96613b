//! Grammar compiler - descriptors to an executable rule arena
//!
//! Compilation is recursive and post-order: children are pushed into the arena
//! before their parent, and the whole tree is finally wrapped in an anchor.
//! Every problem with the grammar (unknown `type`, mismatched `content`, bad
//! regex) is reported here, never during a parse.

use super::descriptor::{Content, RuleDescriptor};
use super::rules::{Grammar, Rule, RuleId, RuleKind};
use crate::linelang::error::CompileError;
use regex::Regex;

/// Compile a descriptor tree into an anchored [`Grammar`].
pub fn compile(descriptor: &RuleDescriptor) -> Result<Grammar, CompileError> {
    let mut compiler = Compiler { rules: Vec::new() };
    let inner = compiler.compile_node(descriptor, true)?;
    let root = compiler.push(descriptor.name.clone(), RuleKind::Anchor(inner));
    log::debug!(
        "compiled grammar '{}' into {} rule(s)",
        descriptor.name,
        compiler.rules.len()
    );
    Ok(Grammar::from_parts(compiler.rules, root))
}

/// Make a terminal pattern match whole lines only.
///
/// A missing `^` / `$` is added, and the body is wrapped in a non-capturing
/// group so alternations inside the pattern stay anchored on both sides.
/// Capture group numbering is unchanged.
pub fn anchor_pattern(pattern: &str) -> String {
    format!("^(?:{})$", pattern_body(pattern))
}

/// Compile a terminal pattern anchored to whole lines.
///
/// A trailing `# comment` in verbose mode (`(?x)`) would swallow the closing
/// group. If the plain wrap does not parse, the body is retried with a newline
/// ending the comment; the first error is reported when that fails too.
pub fn anchored_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&anchor_pattern(pattern)).or_else(|err| {
        Regex::new(&format!("^(?:{}\n)$", pattern_body(pattern))).map_err(|_| err)
    })
}

fn pattern_body(pattern: &str) -> &str {
    let body = pattern.strip_prefix('^').unwrap_or(pattern);
    if ends_with_unescaped_dollar(body) {
        &body[..body.len() - 1]
    } else {
        body
    }
}

fn ends_with_unescaped_dollar(s: &str) -> bool {
    match s.strip_suffix('$') {
        Some(rest) => rest.chars().rev().take_while(|&c| c == '\\').count() % 2 == 0,
        None => false,
    }
}

struct Compiler {
    rules: Vec<Rule>,
}

impl Compiler {
    fn push(&mut self, name: String, kind: RuleKind) -> RuleId {
        self.rules.push(Rule { name, kind });
        RuleId(self.rules.len() - 1)
    }

    /// `honor_optional` is false when compiling the inner rule of an optional
    /// wrapper, so the flag is consumed exactly once.
    fn compile_node(
        &mut self,
        desc: &RuleDescriptor,
        honor_optional: bool,
    ) -> Result<RuleId, CompileError> {
        if desc.optional && honor_optional {
            let inner = self.compile_node(desc, false)?;
            return Ok(self.push(desc.name.clone(), RuleKind::Optional(inner)));
        }

        let kind = match desc.kind.as_deref() {
            None | Some("terminal") => self.terminal(desc)?,
            Some("seq") => RuleKind::Sequential(self.children(desc, "seq")?),
            Some("or") => RuleKind::Alternation(self.children(desc, "or")?),
            Some("repeat") => match &desc.content {
                Some(Content::One(inner)) => RuleKind::Repetition(self.compile_node(inner, true)?),
                _ => return Err(invalid_content(desc, "repeat", "a single rule")),
            },
            Some(other) => {
                return Err(CompileError::UnsupportedRuleType {
                    rule: desc.name.clone(),
                    kind: other.to_string(),
                })
            }
        };
        Ok(self.push(desc.name.clone(), kind))
    }

    fn terminal(&mut self, desc: &RuleDescriptor) -> Result<RuleKind, CompileError> {
        let pattern = match &desc.content {
            Some(Content::Pattern(p)) => p,
            _ => return Err(invalid_content(desc, "terminal", "a pattern string")),
        };
        let regex = anchored_regex(pattern).map_err(|source| {
            CompileError::InvalidPattern {
                rule: desc.name.clone(),
                pattern: pattern.clone(),
                source,
            }
        })?;
        Ok(RuleKind::Terminal(regex))
    }

    fn children(
        &mut self,
        desc: &RuleDescriptor,
        kind: &'static str,
    ) -> Result<Vec<RuleId>, CompileError> {
        match &desc.content {
            Some(Content::Many(items)) => items
                .iter()
                .map(|item| self.compile_node(item, true))
                .collect(),
            _ => Err(invalid_content(desc, kind, "a list of rules")),
        }
    }
}

fn invalid_content(
    desc: &RuleDescriptor,
    kind: &'static str,
    expected: &'static str,
) -> CompileError {
    CompileError::InvalidContent {
        rule: desc.name.clone(),
        kind,
        expected,
    }
}
