//! Docstring literal decoding and cleanup

use crate::string_utils::{expand_tabs, strip_delimiters};

/// Longest delimiters first so `"""` is not taken for `"`.
const QUOTES: &[&str] = &["\"\"\"", "'''", "\"", "'"];

/// Decode the source text of a Python string literal into a docstring.
///
/// Returns `None` for bytes and f-string literals, which never count as
/// docstrings, and for empty results.
pub fn docstring_from_literal(literal: &str) -> Option<String> {
    docstring_from_literals([literal])
}

/// Docstring of an implicitly concatenated literal (`"a" "b"`): the pieces
/// are decoded and joined before cleaning. Any bytes or f-string piece
/// disqualifies the whole literal.
pub fn docstring_from_literals<'a>(pieces: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut text = String::new();
    for piece in pieces {
        text.push_str(&decode_literal(piece)?);
    }

    let cleaned = clean_docstring(&text);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Value of a single `str` literal, or `None` for bytes and f-strings.
fn decode_literal(literal: &str) -> Option<String> {
    let body_start = literal
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(literal.len());
    let (prefix, quoted) = literal.split_at(body_start);
    let prefix = prefix.to_ascii_lowercase();
    if prefix.contains('b') || prefix.contains('f') {
        return None;
    }

    let raw = strip_delimiters(quoted, QUOTES)?;
    Some(if prefix.contains('r') {
        raw.to_string()
    } else {
        unescape(raw)
    })
}

/// Normalize docstring indentation.
///
/// Tabs are expanded, the first line loses its leading whitespace, the
/// common indentation of the remaining lines is removed, and lines left
/// empty at either end are dropped. A whitespace-only line that still has
/// content after the margin is removed is kept.
pub fn clean_docstring(doc: &str) -> String {
    let expanded = expand_tabs(doc, 8);
    let mut lines: Vec<&str> = expanded.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min();

    if let Some(first) = lines.first_mut() {
        let current = *first;
        *first = current.trim_start();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            let current = *line;
            *line = current.get(margin..).unwrap_or_else(|| current.trim_start());
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading_blank = lines.iter().take_while(|line| line.is_empty()).count();

    lines[leading_blank..].join("\n")
}

/// Decode the backslash escapes of a non-raw literal. Escapes Python would
/// reject are kept as written.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = &rest[pos + 1..];
        rest = match decode_escape(escape) {
            Escape::Char(c, len) => {
                out.push(c);
                &escape[len..]
            }
            Escape::Skip(len) => &escape[len..],
            Escape::Unknown => {
                out.push('\\');
                escape
            }
        };
    }
    out.push_str(rest);
    out
}

/// One decoded escape and the bytes it used after the backslash.
enum Escape {
    Char(char, usize),
    Skip(usize),
    Unknown,
}

fn decode_escape(s: &str) -> Escape {
    let Some(first) = s.chars().next() else {
        return Escape::Unknown;
    };
    let c = match first {
        // line continuation
        '\n' => return Escape::Skip(1),
        '\\' | '\'' | '"' => first,
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '0'..='7' => return octal_escape(s),
        'x' => return hex_escape(s, 2),
        'u' => return hex_escape(s, 4),
        'U' => return hex_escape(s, 8),
        'N' => return named_escape(s),
        _ => return Escape::Unknown,
    };
    Escape::Char(c, 1)
}

/// `\ooo`: one to three octal digits.
fn octal_escape(s: &str) -> Escape {
    let digits = s
        .bytes()
        .take(3)
        .take_while(|b| (b'0'..=b'7').contains(b))
        .count();
    u32::from_str_radix(&s[..digits], 8)
        .ok()
        .and_then(char::from_u32)
        .map_or(Escape::Unknown, |c| Escape::Char(c, digits))
}

/// `\xhh`, `\uXXXX` and `\UXXXXXXXX`: exactly `digits` hex digits after the
/// letter.
fn hex_escape(s: &str, digits: usize) -> Escape {
    let Some(hex) = s.get(1..1 + digits) else {
        return Escape::Unknown;
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Escape::Unknown;
    }
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .map_or(Escape::Unknown, |c| Escape::Char(c, 1 + digits))
}

/// `\N{NAME}`, looked up in the Unicode name table.
fn named_escape(s: &str) -> Escape {
    let Some(body) = s.strip_prefix("N{") else {
        return Escape::Unknown;
    };
    let Some(end) = body.find('}') else {
        return Escape::Unknown;
    };
    unicode_names2::character(&body[..end]).map_or(Escape::Unknown, |c| Escape::Char(c, end + 3))
}
