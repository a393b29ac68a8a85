// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value formatters applied inside `$(NAME:formatter)` references.

/// Formatter named after the colon in a variable reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// `rfc1034identifier`: DNS-label-safe form, used for bundle identifiers.
    Rfc1034Identifier,
}

impl Formatter {
    /// Looks up a formatter by name (case-insensitive).
    ///
    /// Unknown names yield `None`; the value is then substituted as is.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rfc1034identifier" => Some(Self::Rfc1034Identifier),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rfc1034Identifier => "rfc1034identifier",
        }
    }

    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Rfc1034Identifier => rfc1034_identifier(value),
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9.-]` with `-`.
///
/// One dash is written per UTF-16 code unit, so characters outside the
/// Basic Multilingual Plane become two dashes.
///
/// ```
/// use plistenv::plist::rfc1034_identifier;
///
/// assert_eq!(rfc1034_identifier("My App!"), "My-App-");
/// assert_eq!(rfc1034_identifier("com.example.tool"), "com.example.tool");
/// assert_eq!(rfc1034_identifier("Caf\u{e9}\u{1f600}"), "Caf---");
/// ```
#[must_use]
pub fn rfc1034_identifier(value: &str) -> String {
    let mut identifier = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            identifier.push(c);
        } else {
            identifier.extend(std::iter::repeat_n('-', c.len_utf16()));
        }
    }
    identifier
}
