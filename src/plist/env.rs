// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable sources for expansion.
//!
//! ```text
//! VariableSource::lookup(name) -> Option<Cow<str>>
//!   Environment              owned BTreeMap<String, String>
//!   BTreeMap / HashMap<_, V: Display>
//!   Node (dictionary)        scalar entries only
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::error::ConfigError;

/// Anything variables can be resolved against.
pub trait VariableSource {
    /// Returns the string form of `name`, or `None` when it is undefined.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: VariableSource + ?Sized> VariableSource for &T {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

impl<V: Display> VariableSource for BTreeMap<String, V> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Owned(v.to_string()))
    }
}

impl<V: Display, S: BuildHasher> VariableSource for HashMap<String, V, S> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Owned(v.to_string()))
    }
}

/// A dictionary node used as an environment (build settings resolving
/// against each other). Non-dictionary nodes define nothing.
impl VariableSource for Node {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)
            .and_then(|n| n.to_scalar_string())
            .map(Cow::Owned)
    }
}

/// Named variables available for substitution.
///
/// Later insertions replace earlier ones, so layering is a matter of
/// insertion order: process environment, then config, then command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Overlays `other` on top of this environment.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        for (k, v) in &other.vars {
            self.vars.insert(k.clone(), v.clone());
        }
        self
    }

    /// Parses and applies a `KEY=VALUE` assignment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAssignment` when there is no `=` or the
    /// key is empty.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<&mut Self, ConfigError> {
        let (key, value) = parse_assignment(assignment)?;
        Ok(self.set(key, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads scalar entries of a dictionary node into an environment.
    ///
    /// Returns `None` if `node` is not a dictionary. Entries without a
    /// string form (null, containers) are skipped.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Dict(dict) => Some(
                dict.borrow()
                    .iter()
                    .filter_map(|(k, v)| Some((k.clone(), v.to_scalar_string()?)))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl VariableSource for Environment {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Environment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.vars.insert(k.into(), v.into());
        }
    }
}

/// Splits `KEY=VALUE` at the first `=`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidAssignment` when there is no `=` or the key
/// is empty.
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), ConfigError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(ConfigError::InvalidAssignment(assignment.to_string())),
    }
}
