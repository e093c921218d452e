//! Rewriting of generic `?` markers into SQLite's numbered `$n` parameters.
//!
//! Callers write WHERE fragments with plain `?` markers in source order. The
//! builder owns the numbering: the i-th marker (0-indexed) becomes
//! `$<offset + i + 1>`, where `offset` counts the parameters already bound by
//! the part of the statement that precedes the WHERE clause.

/// Marker accepted in caller-supplied WHERE fragments.
pub const PLACEHOLDER: char = '?';

/// Replace every `?` in `clause` with `$n`, numbering from `offset + 1`.
///
/// Returns the rewritten text and the number of markers found.
pub fn translate_placeholders(clause: &str, offset: usize) -> (String, usize) {
    let mut out = String::with_capacity(clause.len() + 8);
    let mut seen = 0usize;

    for ch in clause.chars() {
        if ch == PLACEHOLDER {
            seen += 1;
            out.push('$');
            out.push_str(&(offset + seen).to_string());
        } else {
            out.push(ch);
        }
    }

    (out, seen)
}

/// Build the ` WHERE ...` tail of a statement.
///
/// An empty or blank clause yields an empty suffix, never a dangling `WHERE`.
pub fn where_suffix(clause: &str, offset: usize) -> (String, usize) {
    if clause.trim().is_empty() {
        return (String::new(), 0);
    }
    let (translated, markers) = translate_placeholders(clause, offset);
    (format!(" WHERE {translated}"), markers)
}
