// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable expansion over configuration nodes.
//!
//! ```text
//! expand(node, env)
//!   walk containers (visited set keyed by identity)
//!     Dict   string entries -> expand_string -> write back if changed
//!            container entries -> walk
//!     Array  container elements -> walk (string elements untouched)
//!
//! expand_string
//!   "..${A}..$(B:fmt)..@C@.."
//!      ^ leftmost open delimiter of any syntax
//!   defined   -> splice value, resume after the inserted text
//!   undefined -> notify (key, name), resume after the close delimiter
//!   no close  -> stop
//! ```
//!
//! Inserted text is never rescanned, so a value containing `$(OTHER)` stays
//! literal. Callers that want settings to resolve against each other use
//! [`expand_setting`], which repeats whole passes until nothing changes.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, trace, warn};

use super::env::VariableSource;
use super::identifier::Formatter;
use super::node::Node;
use crate::error::ExpandError;

/// Delimiters of one reference syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Syntax {
    open: &'static str,
    close: &'static str,
}

const SYNTAXES: [Syntax; 3] = [
    Syntax {
        open: "${",
        close: "}",
    },
    Syntax {
        open: "$(",
        close: ")",
    },
    Syntax {
        open: "@",
        close: "@",
    },
];

/// Default upper bound for [`expand_setting`] passes.
pub const DEFAULT_MAX_ROUNDS: u32 = 16;

/// Receives references that could not be resolved.
///
/// Called once per unresolved occurrence with the dictionary key whose value
/// contained it and the variable name. Must not panic; expansion continues
/// after it returns.
pub trait UndefinedVariableHandler {
    fn undefined_variable(&mut self, key: &str, name: &str);
}

impl<F: FnMut(&str, &str)> UndefinedVariableHandler for F {
    fn undefined_variable(&mut self, key: &str, name: &str) {
        self(key, name);
    }
}

/// Handler that drops notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreUndefined;

impl UndefinedVariableHandler for IgnoreUndefined {
    fn undefined_variable(&mut self, _key: &str, _name: &str) {}
}

/// Handler that logs each unresolved reference as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarnUndefined;

impl UndefinedVariableHandler for WarnUndefined {
    fn undefined_variable(&mut self, key: &str, name: &str) {
        warn!(key, "undefined variable {name} in variable expansion");
    }
}

/// Replaces `${NAME}`, `$(NAME)` and `@NAME@` references in dictionary
/// string values.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use plistenv::plist::{Node, VariableExpander};
///
/// let plist = Node::dict([("CFBundleName", "$(PRODUCT_NAME)")]);
/// let env = BTreeMap::from([("PRODUCT_NAME".to_string(), "Viewer")]);
///
/// VariableExpander::new().expand(&plist, &env);
/// assert_eq!(plist.get_str("CFBundleName").as_deref(), Some("Viewer"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableExpander<H = IgnoreUndefined> {
    handler: H,
}

impl VariableExpander<IgnoreUndefined> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handler: IgnoreUndefined,
        }
    }
}

impl<H: UndefinedVariableHandler> VariableExpander<H> {
    pub const fn with_handler(handler: H) -> Self {
        Self { handler }
    }

    pub const fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Expands every reference reachable from `node`, in place.
    ///
    /// Each container is entered at most once per call, so self-referencing
    /// structures terminate and a dictionary shared by several keys is
    /// expanded only through the first key that reaches it. Returns `node`.
    pub fn expand<'n, E>(&mut self, node: &'n Node, env: &E) -> &'n Node
    where
        E: VariableSource + ?Sized,
    {
        let mut visited = HashSet::new();
        self.walk(node, env, &mut visited);
        debug!(containers = visited.len(), "expanded variables");
        node
    }

    fn walk<E>(&mut self, node: &Node, env: &E, visited: &mut HashSet<usize>)
    where
        E: VariableSource + ?Sized,
    {
        let Some(id) = node.container_id() else {
            return;
        };
        if !visited.insert(id) {
            trace!(id, "container already visited, skipping");
            return;
        }

        // No borrow is held while expanding: `env` may be this very
        // container or one reachable from it.
        let children = match node {
            Node::Dict(dict) => {
                let (strings, children) = split_entries(&dict.borrow());
                for (key, text) in strings {
                    if let Some(expanded) = self.expand_string(&key, &text, env) {
                        dict.borrow_mut().insert(key, Node::String(expanded));
                    }
                }
                children
            }
            Node::Array(items) => items
                .borrow()
                .iter()
                .filter(|n| n.is_container())
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        for child in &children {
            self.walk(child, env, visited);
        }
    }

    /// Expands the references in one string.
    ///
    /// Returns `None` when nothing was substituted, so the caller can leave
    /// the entry untouched.
    pub fn expand_string<E>(&mut self, key: &str, input: &str, env: &E) -> Option<String>
    where
        E: VariableSource + ?Sized,
    {
        let mut cursor = find_reference(input, 0)?;
        let mut value = input.to_string();
        let mut changed = false;

        loop {
            let (start, syntax) = cursor;
            let body = start + syntax.open.len();
            let Some(len) = value[body..].find(syntax.close) else {
                break;
            };
            let close = body + len;
            let after = close + syntax.close.len();

            let (name, formatter) = split_reference(&value[body..close]);
            let resolved = env.lookup(name).map(|v| match formatter {
                Some(f) => f.apply(&v),
                None => v.into_owned(),
            });

            let next = match resolved {
                None => {
                    self.handler.undefined_variable(key, name);
                    after
                }
                Some(resolved) => {
                    trace!(key, start, "substituted {}", &value[start..after]);
                    value.replace_range(start..after, &resolved);
                    changed = true;
                    start + resolved.len()
                }
            };

            match find_reference(&value, next) {
                Some(found) => cursor = found,
                None => break,
            }
        }

        changed.then_some(value)
    }
}

type Entries = (Vec<(String, String)>, Vec<Node>);

/// String entries and container handles of a dictionary, in key order.
fn split_entries(dict: &BTreeMap<String, Node>) -> Entries {
    let mut strings = Vec::new();
    let mut children = Vec::new();
    for (key, value) in dict {
        match value {
            Node::String(text) => strings.push((key.clone(), text.clone())),
            Node::Dict(_) | Node::Array(_) => children.push(value.clone()),
            _ => {}
        }
    }
    (strings, children)
}

/// Leftmost opening delimiter at or after `from`, across all syntaxes.
fn find_reference(value: &str, from: usize) -> Option<(usize, Syntax)> {
    let rest = value.get(from..)?;
    SYNTAXES
        .iter()
        .filter_map(|s| rest.find(s.open).map(|i| (from + i, *s)))
        .min_by_key(|(i, _)| *i)
}

/// `NAME[:formatter[:ignored...]]`
fn split_reference(body: &str) -> (&str, Option<Formatter>) {
    let mut parts = body.split(':');
    let name = parts.next().unwrap_or_default();
    (name, parts.next().and_then(Formatter::from_name))
}

/// Expands a node, warning about undefined variables when `warn` is set.
pub fn expand_plist_environment_variables<'n, E>(node: &'n Node, env: &E, warn: bool) -> &'n Node
where
    E: VariableSource + ?Sized,
{
    let mut expander = VariableExpander::with_handler(|key: &str, name: &str| {
        if warn {
            WarnUndefined.undefined_variable(key, name);
        }
    });
    expander.expand(node, env)
}

/// Resolves a single setting against `env` until it stops changing.
///
/// One expansion pass never rescans inserted text; this repeats whole passes
/// so that `$(A)` with `A = "$(B)"` and `B = "x"` ends up as `x`. Undefined
/// references are logged as warnings on every pass and left in place.
///
/// # Errors
///
/// Returns `ExpandError::NoFixpoint` when the value still changes after
/// `max_rounds` passes (for example `A = "$(B)"`, `B = "$(A)"`).
pub fn expand_setting<E>(setting: &str, env: &E, max_rounds: u32) -> Result<String, ExpandError>
where
    E: VariableSource + ?Sized,
{
    const KEY: &str = "key";

    let mut expander = VariableExpander::with_handler(WarnUndefined);
    let mut current = setting.to_string();
    for round in 1..=max_rounds {
        let holder = Node::dict([(KEY, current.as_str())]);
        expander.expand(&holder, env);
        let next = holder.get_str(KEY).unwrap_or_default();
        if next == current {
            debug!(round, "setting settled");
            return Ok(next);
        }
        current = next;
    }

    Err(ExpandError::NoFixpoint {
        setting: setting.to_string(),
        rounds: max_rounds,
    })
}

#[cfg(test)]
mod tests;
