//! Regex capture results owned by a leaf
//!
//! Group 0 is the whole matched line. Groups are stored as owned strings so a
//! visitor can rewrite them in place.

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Captures {
    groups: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    names: Vec<(String, usize)>,
}

impl Captures {
    /// Collect every group of `caps`, which must come from `regex`.
    pub fn from_match(regex: &Regex, caps: &regex::Captures<'_>) -> Self {
        let groups = caps
            .iter()
            .map(|m| m.map(|m| m.as_str().to_string()))
            .collect();
        let names = regex
            .capture_names()
            .enumerate()
            .filter_map(|(i, name)| name.map(|n| (n.to_string(), i)))
            .collect();
        Self { groups, names }
    }

    /// Build captures from raw group values, without names.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(|g| g.map(Into::into)).collect(),
            names: Vec::new(),
        }
    }

    /// The whole matched line (group 0), or "" if group 0 was cleared.
    pub fn primary(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|g| g.as_deref())
    }

    /// Value of a named group, if the group exists and participated.
    pub fn name(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|&(_, i)| self.get(i))
    }

    /// Replace a group value. Growing past the current length pads with `None`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.groups.len() {
            self.groups.resize(index + 1, None);
        }
        self.groups[index] = Some(value.into());
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Option<String>] {
        &self.groups
    }
}
