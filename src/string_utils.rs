//! String utility functions for common string operations.

/// Strip the first matching prefix from a string.
///
/// Iterates through the provided prefixes and returns the matched prefix
/// together with the remainder. Longer prefixes must come first when one
/// prefix is a prefix of another.
///
/// # Example
///
/// ```
/// use project_explorer::string_utils::strip_any_prefix;
///
/// const QUOTES: &[&str] = &["\"\"\"", "'''", "\"", "'"];
/// assert_eq!(strip_any_prefix("\"\"\"doc\"\"\"", QUOTES), Some(("\"\"\"", "doc\"\"\"")));
/// assert_eq!(strip_any_prefix("'x'", QUOTES), Some(("'", "x'")));
/// assert_eq!(strip_any_prefix("plain", QUOTES), None);
/// ```
pub fn strip_any_prefix<'a, 'p>(s: &'a str, prefixes: &[&'p str]) -> Option<(&'p str, &'a str)> {
    prefixes
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix).map(|rest| (*prefix, rest)))
}

/// Strip an opening delimiter and its matching closing delimiter.
///
/// Returns `None` unless the string both starts and ends with the same
/// delimiter from `delimiters`, non-overlapping.
pub fn strip_delimiters<'a>(s: &'a str, delimiters: &[&str]) -> Option<&'a str> {
    let (delim, rest) = strip_any_prefix(s, delimiters)?;
    rest.strip_suffix(delim)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Expand tab characters to the next multiple of `tab_size` columns.
pub fn expand_tabs(s: &str, tab_size: usize) -> String {
    if !s.contains('\t') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + tab_size);
    let mut column = 0;
    for c in s.chars() {
        match c {
            '\t' => {
                let pad = tab_size - (column % tab_size);
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
