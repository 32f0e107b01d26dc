//! VCF text escaping and line primitives.

/// Property line terminator.
pub const CRLF: &str = "\r\n";

/// Escapes a text value for a property line.
///
/// Replaces newline with the two-character `\n` escape, `,` with `\,`,
/// and `;` with `\;`. Nothing else is touched — colons and backslashes
/// pass through, and any parameter quoting is the caller's concern.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes an optional value, mapping absence to the empty string.
#[must_use]
pub fn escape_opt(value: Option<&str>) -> String {
    value.map(escape_text).unwrap_or_default()
}
