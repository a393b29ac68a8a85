// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Removal of empty values from property lists.

use std::collections::HashSet;

use tracing::trace;

use super::node::Node;

/// Recursively removes `Null` and empty-string values.
///
/// Dictionary entries are dropped; array elements are removed, shifting the
/// rest down. Leaf roots are left alone. Each container is cleaned once even
/// when it is reachable from several places.
///
/// Returns the number of values removed.
pub fn clean_property_list(node: &Node) -> usize {
    let mut visited = HashSet::new();
    clean(node, &mut visited)
}

fn is_empty_value(node: &Node) -> bool {
    match node {
        Node::Null => true,
        Node::String(s) => s.is_empty(),
        _ => false,
    }
}

fn clean(node: &Node, visited: &mut HashSet<usize>) -> usize {
    let Some(id) = node.container_id() else {
        return 0;
    };
    if !visited.insert(id) {
        return 0;
    }

    match node {
        Node::Dict(dict) => {
            let mut dict = dict.borrow_mut();
            let before = dict.len();
            dict.retain(|key, value| {
                let keep = !is_empty_value(value);
                if !keep {
                    trace!(key, "removing empty value");
                }
                keep
            });
            let removed = before - dict.len();
            removed + dict.values().map(|v| clean(v, visited)).sum::<usize>()
        }
        Node::Array(items) => {
            let mut items = items.borrow_mut();
            let before = items.len();
            items.retain(|v| !is_empty_value(v));
            let removed = before - items.len();
            removed + items.iter().map(|v| clean(v, visited)).sum::<usize>()
        }
        _ => 0,
    }
}
