//! Identifier and label escaping for the DOT output language.
//!
//! These functions are the only sanitization boundary between user-authored
//! text and the generated graph document. Renderers pass every node id
//! through [`escape_node_id`] and every human-readable string through
//! [`escape_label`], exactly once.
//!
//! # Examples
//!
//! ```
//! use netdot_core::identifier::{escape_label, escape_node_id};
//!
//! assert_eq!(escape_node_id("spine_01"), "spine_01");
//! assert_eq!(escape_node_id("leaf-01"), "\"leaf-01\"");
//! assert_eq!(escape_label("Rack \"A\"\nrow 1"), "Rack \\\"A\\\"\\nrow 1");
//! ```

/// Returns `true` if `id` matches the bare DOT identifier grammar
/// `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_bare_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Returns `true` if `id` is a DOT keyword. Keywords are case-insensitive.
pub fn is_keyword(id: &str) -> bool {
    const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(id))
}

/// Returns `id` unchanged when it is a bare identifier, otherwise wraps it
/// in double quotes.
///
/// Keywords such as `node` are quoted as well; unquoted, `node [..]` would
/// set node defaults instead of declaring a node. Inside the quotes,
/// backslashes and double quotes are escaped so the quoted form is always
/// terminated where it should be.
pub fn escape_node_id(id: &str) -> String {
    if is_bare_identifier(id) && !is_keyword(id) {
        return id.to_string();
    }

    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Escapes a label for use inside a double-quoted attribute value.
///
/// Double quotes and backslashes are escaped, and literal newlines become
/// the DOT `\n` line break. The caller supplies the surrounding quotes.
pub fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Returns the identifier of a `subgraph cluster_<raw>` block.
///
/// The `cluster_` prefix is part of the escaped identifier, so a raw id
/// that needs quoting yields `"cluster_rack-1"` rather than the malformed
/// `cluster_"rack-1"`.
pub fn cluster_id(raw: &str) -> String {
    escape_node_id(&format!("cluster_{raw}"))
}
