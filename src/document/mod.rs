// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading and writing JSON property-list documents.
//!
//! ```text
//! read_json(path | "-")  --> Node
//! read_environment(path) --> Environment (flat object of scalars)
//! write_json(node, w)    --> compact or pretty JSON + newline
//! ```

use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{DocumentError, FsError, PlistResult};
use crate::plist::{Environment, Node};

/// Path that stands for standard input.
pub const STDIN: &str = "-";

/// Parses a JSON document from a string. `origin` names it in errors.
///
/// # Errors
///
/// Returns `DocumentError::Json` on malformed input.
pub fn parse_json(content: &str, origin: &str) -> PlistResult<Node> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|source| DocumentError::Json {
            path: origin.to_string(),
            source,
        })?;
    Ok(Node::from_json(&value))
}

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `FsError` if the file cannot be read and `DocumentError::Json`
/// if it is not valid JSON.
pub fn read_json(path: &Path) -> PlistResult<Node> {
    let content = if path.as_os_str() == STDIN {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?
    };
    debug!(path = %path.display(), bytes = content.len(), "read document");
    parse_json(&content, &path.display().to_string())
}

/// Reads a flat JSON object of variables.
///
/// Scalar values are stringified; null and nested values are skipped.
///
/// # Errors
///
/// Returns the errors of [`read_json`], or `DocumentError::NotAMapping` when
/// the root is not an object.
pub fn read_environment(path: &Path) -> PlistResult<Environment> {
    let node = read_json(path)?;
    Environment::from_node(&node).ok_or_else(|| {
        DocumentError::NotAMapping {
            path: path.display().to_string(),
        }
        .into()
    })
}

/// Writes `node` as JSON followed by a newline.
///
/// # Errors
///
/// Returns `DocumentError` for cycles or unrepresentable values, and an I/O
/// error if writing fails.
pub fn write_json<W: Write>(node: &Node, mut writer: W, pretty: bool) -> PlistResult<()> {
    let rendered = to_json_string(node, pretty)?;
    writeln!(writer, "{rendered}")?;
    writer.flush()?;
    Ok(())
}

/// Renders `node` as a JSON string (no trailing newline).
///
/// # Errors
///
/// Returns `DocumentError` for cycles or unrepresentable values.
pub fn to_json_string(node: &Node, pretty: bool) -> PlistResult<String> {
    let value = node.to_json()?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(std::io::Error::from)?;
    Ok(rendered)
}
