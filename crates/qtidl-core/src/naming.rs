//! Name derivation for generated members.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `user_name` | [`to_lower_camel`] | `userName` |
//! | `UserName` | [`backing_field_name`] | `m_userName` |
//! | `URLPath` | [`notify_signal_name`] | `urlPathChanged` |
//!
//! # Boundary rule
//!
//! - `_`, `-`, `.` and space separate words. They are dropped and the next
//!   character is uppercased, unless nothing has been emitted yet.
//! - A leading run of uppercase letters is lowercased. When the run is longer
//!   than one letter and is directly followed by a lowercase letter, its last
//!   letter starts the next word and stays uppercase.
//! - Everything else is copied unchanged.
//!
//! The transform is total, and already lower-camel-case input comes back
//! unchanged. Case mapping uses Unicode default rules, never the locale.

const BACKING_FIELD_PREFIX: &str = "m_";
const NOTIFY_SIGNAL_SUFFIX: &str = "Changed";

/// Convert an identifier to lowerCamelCase.
///
/// # Examples
///
/// ```
/// use qtidl_core::naming::to_lower_camel;
///
/// assert_eq!(to_lower_camel("Count"), "count");
/// assert_eq!(to_lower_camel("display_name"), "displayName");
/// assert_eq!(to_lower_camel("HTTPServer"), "httpServer");
/// assert_eq!(to_lower_camel("alreadyCamel"), "alreadyCamel");
/// ```
pub fn to_lower_camel(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len());

    let mut start = 0;
    while start < chars.len() && is_separator(chars[start]) {
        start += 1;
    }

    let mut run_end = start;
    while run_end < chars.len() && chars[run_end].is_uppercase() {
        run_end += 1;
    }
    let followed_by_lower = chars.get(run_end).is_some_and(|c| c.is_lowercase());
    if run_end - start > 1 && followed_by_lower {
        run_end -= 1;
    }

    for c in &chars[start..run_end] {
        result.extend(c.to_lowercase());
    }

    let mut capitalize_next = false;
    for &c in &chars[run_end..] {
        if is_separator(c) {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Private member that stores a property: `m_` + lowerCamel name.
pub fn backing_field_name(property: &str) -> String {
    format!("{BACKING_FIELD_PREFIX}{}", to_lower_camel(property))
}

/// Signal emitted when a property changes: lowerCamel name + `Changed`.
pub fn notify_signal_name(property: &str) -> String {
    format!("{}{NOTIFY_SIGNAL_SUFFIX}", to_lower_camel(property))
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}
