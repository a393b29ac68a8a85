// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property-list values and variable expansion.
//!
//! # Architecture
//!
//! ```text
//! node        Node (leaf | Rc<RefCell<..>> container)
//! env         VariableSource, Environment
//! identifier  Formatter, rfc1034_identifier()
//! expander    VariableExpander, expand_setting()
//! clean       clean_property_list()
//! ```

pub mod clean;
pub mod env;
pub mod expander;
pub mod identifier;
pub mod node;


pub use clean::clean_property_list;
pub use env::{Environment, VariableSource, parse_assignment};
pub use expander::{
    DEFAULT_MAX_ROUNDS, IgnoreUndefined, UndefinedVariableHandler, VariableExpander,
    WarnUndefined, expand_plist_environment_variables, expand_setting,
};
pub use identifier::{Formatter, rfc1034_identifier};
pub use node::Node;
