// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration node model.
//!
//! ```text
//! Node
//!   Null | Bool | Integer | Real | String      leaves (owned)
//!   Array(Rc<RefCell<Vec<Node>>>)               shared handle
//!   Dict(Rc<RefCell<BTreeMap<String, Node>>>)   shared handle
//! ```
//!
//! Containers are reference-counted handles: cloning a `Node::Dict` clones
//! the handle, not the entries. That is what lets one dictionary be reachable
//! from several keys (or from itself), and what the expander's visited set
//! keys on.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::error::DocumentError;

/// Entries of a dictionary node.
pub type Dict = BTreeMap<String, Node>;

/// Elements of an array node.
pub type Array = Vec<Node>;

/// A property-list / configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Rc<RefCell<Array>>),
    Dict(Rc<RefCell<Dict>>),
}

impl Default for Node {
    fn default() -> Self {
        Self::empty_dict()
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Node {
    /// Creates a dictionary node from key/value pairs.
    pub fn dict<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::Dict(Rc::new(RefCell::new(entries)))
    }

    /// Creates an empty dictionary node.
    #[must_use]
    pub fn empty_dict() -> Self {
        Self::Dict(Rc::new(RefCell::new(Dict::new())))
    }

    /// Creates an array node.
    pub fn array<V: Into<Self>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::Array(Rc::new(RefCell::new(
            items.into_iter().map(Into::into).collect(),
        )))
    }

    /// Returns the string value, if this is a string node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Dict(_))
    }

    /// Identity of the underlying container, stable while the node is alive.
    ///
    /// Leaves have no identity and return `None`.
    #[must_use]
    pub fn container_id(&self) -> Option<usize> {
        match self {
            Self::Array(rc) => Some(Rc::as_ptr(rc).cast::<()>().addr()),
            Self::Dict(rc) => Some(Rc::as_ptr(rc).cast::<()>().addr()),
            _ => None,
        }
    }

    /// Whether both nodes are handles to the same container.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Dict(a), Self::Dict(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Looks up `key` in a dictionary node.
    ///
    /// Returns a clone of the entry; for containers that is another handle
    /// to the same data.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Self> {
        match self {
            Self::Dict(dict) => dict.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// Convenience for reading a string entry of a dictionary node.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|n| n.as_str().map(str::to_string))
    }

    /// Inserts an entry into a dictionary node.
    ///
    /// Returns `false` (and does nothing) when `self` is not a dictionary.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Self>) -> bool {
        match self {
            Self::Dict(dict) => {
                dict.borrow_mut().insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    /// Appends to an array node. Returns `false` when `self` is not an array.
    pub fn push(&self, value: impl Into<Self>) -> bool {
        match self {
            Self::Array(items) => {
                items.borrow_mut().push(value.into());
                true
            }
            _ => false,
        }
    }

    /// String form of a leaf, as used when the node serves as a variable value.
    ///
    /// Containers and `Null` have no string form.
    #[must_use]
    pub fn to_scalar_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Real(r) => Some(r.to_string()),
            Self::Null | Self::Array(_) | Self::Dict(_) => None,
        }
    }

    /// Builds a node tree from a JSON value.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Real(n.as_f64().unwrap_or(f64::NAN)), Self::Integer),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::array(items.iter().map(Self::from_json)),
            Value::Object(map) => Self::dict(map.iter().map(|(k, v)| (k.clone(), Self::from_json(v)))),
        }
    }

    /// Converts the node tree to JSON.
    ///
    /// Shared (non-cyclic) containers are written out at every place they
    /// occur.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Cycle` when a container contains itself, and
    /// `DocumentError::UnsupportedValue` for non-finite reals.
    pub fn to_json(&self) -> Result<serde_json::Value, DocumentError> {
        let mut path = HashSet::new();
        to_json_inner(self, "<root>", &mut path)
    }
}

/// `path` holds the containers on the current descent, not every container
/// seen so far: a shared dictionary is fine, only a loop back is an error.
fn to_json_inner(
    node: &Node,
    key: &str,
    path: &mut HashSet<usize>,
) -> Result<serde_json::Value, DocumentError> {
    use serde_json::Value;
    match node {
        Node::Null => Ok(Value::Null),
        Node::Bool(b) => Ok(Value::Bool(*b)),
        Node::Integer(i) => Ok(Value::from(*i)),
        Node::Real(r) => serde_json::Number::from_f64(*r).map(Value::Number).ok_or_else(|| {
            DocumentError::UnsupportedValue {
                key: key.to_string(),
                message: format!("{r} has no JSON representation"),
            }
        }),
        Node::String(s) => Ok(Value::String(s.clone())),
        Node::Array(items) => {
            let id = enter(node, key, path)?;
            let out = items
                .borrow()
                .iter()
                .enumerate()
                .map(|(i, item)| to_json_inner(item, &format!("{key}[{i}]"), path))
                .collect::<Result<Vec<_>, _>>();
            path.remove(&id);
            Ok(Value::Array(out?))
        }
        Node::Dict(dict) => {
            let id = enter(node, key, path)?;
            let out = dict
                .borrow()
                .iter()
                .map(|(k, v)| to_json_inner(v, k, path).map(|v| (k.clone(), v)))
                .collect::<Result<serde_json::Map<_, _>, _>>();
            path.remove(&id);
            Ok(Value::Object(out?))
        }
    }
}

fn enter(node: &Node, key: &str, path: &mut HashSet<usize>) -> Result<usize, DocumentError> {
    let id = node.container_id().unwrap_or_default();
    if path.insert(id) {
        Ok(id)
    } else {
        Err(DocumentError::Cycle {
            key: key.to_string(),
        })
    }
}
