//! Compiled rule tree
//!
//! Rules are stored in a flat arena and refer to their children by [`RuleId`].
//! The arena is filled once by the compiler and never mutated afterwards, so a
//! [`Grammar`] can be shared freely between parses (and threads).

use regex::Regex;

/// Index of a rule inside its [`Grammar`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(pub(crate) usize);

impl RuleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub kind: RuleKind,
}

/// The closed set of rule variants.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Matches exactly one whole line against a fully anchored pattern.
    Terminal(Regex),
    /// All children, in order, each starting where the previous one stopped.
    Sequential(Vec<RuleId>),
    /// First child that matches at the starting line wins.
    Alternation(Vec<RuleId>),
    /// The child as many times as it matches and advances.
    Repetition(RuleId),
    /// The child once, or nothing.
    Optional(RuleId),
    /// Wraps the whole grammar and requires every line to be consumed.
    Anchor(RuleId),
}

/// An immutable, reusable rule tree rooted at an [`RuleKind::Anchor`].
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<Rule>,
    root: RuleId,
}

impl Grammar {
    pub(crate) fn from_parts(rules: Vec<Rule>, root: RuleId) -> Self {
        Self { rules, root }
    }

    /// The anchor rule wrapping the whole grammar.
    pub fn root(&self) -> RuleId {
        self.root
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.0]
    }

    /// Number of compiled rules, the anchor included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules.iter().enumerate().map(|(i, r)| (RuleId(i), r))
    }
}
