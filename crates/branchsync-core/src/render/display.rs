//! Display strings for document values.
//!
//! A top-level string renders as its raw text. Every other value renders in a
//! literal notation: `None`, `True`/`False`, numbers as JSON text, quoted
//! strings, `[a, b]` sequences and `{'k': v}` mappings. Report consumers rely
//! on this exact notation, so it must not drift.

use serde_json::Value;

/// Render a value as its display string.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_literal(&mut out, other);
            out
        }
    }
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_literal(out, item);
            }
            out.push('}');
        }
    }
}

/// Quote a string, preferring single quotes.
///
/// Double quotes are used only when the text contains a single quote and no
/// double quote.
fn write_quoted(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => write_escaped(out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Characters written as escapes inside quotes: controls, format characters,
/// separators other than the ASCII space, and private-use code points.
/// Unassigned code points are written verbatim.
fn is_unprintable(c: char) -> bool {
    matches!(
        c as u32,
        0x00..=0x1f
            | 0x7f..=0xa0
            | 0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x1680
            | 0x180e
            | 0x2000..=0x200f
            | 0x2028..=0x202f
            | 0x205f..=0x2064
            | 0x2066..=0x206f
            | 0x3000
            | 0xe000..=0xf8ff
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..=0xffffd
            | 0x100000..=0x10fffd
    )
}

fn write_escaped(out: &mut String, c: char) {
    let code = c as u32;
    let escaped = if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    };
    out.push_str(&escaped);
}
