//! A minimal JSON renderer used only to drive round-trip tests.
use alloc::string::String;
use core::fmt::Write;

use crate::Value;

/// Renders `value` as compact JSON.
pub(crate) fn to_json(value: &Value) -> String {
    to_json_with(value, &mut || "", false)
}

/// Renders `value`, calling `ws` for the whitespace to put around every
/// token. With `escape_all`, non-ASCII characters are written as `\uXXXX`
/// escapes (surrogate pairs above the BMP).
pub(crate) fn to_json_with(
    value: &Value,
    ws: &mut dyn FnMut() -> &'static str,
    escape_all: bool,
) -> String {
    let mut out = String::new();
    out.push_str(ws());
    write_value(&mut out, value, ws, escape_all);
    out.push_str(ws());
    out
}

fn write_value(out: &mut String, value: &Value, ws: &mut dyn FnMut() -> &'static str, escape_all: bool) {
    match value {
        Value::Null => out.push_str("null"),
        Value::True => out.push_str("true"),
        Value::False => out.push_str("false"),
        Value::Integer(n) => write!(out, "{n}").unwrap(),
        // `{:?}` always includes a `.` or an exponent, so the text stays real.
        Value::Real(x) => write!(out, "{x:?}").unwrap(),
        Value::String(s) => write_string(out, s, escape_all),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(ws());
                write_value(out, item, ws, escape_all);
                out.push_str(ws());
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(ws());
                write_string(out, key, escape_all);
                out.push_str(ws());
                out.push(':');
                out.push_str(ws());
                write_value(out, item, ws, escape_all);
                out.push_str(ws());
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str, escape_all: bool) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{20}' => write!(out, "\\u{:04x}", c as u32).unwrap(),
            c if escape_all && !c.is_ascii() => {
                let mut units = [0; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(out, "\\u{unit:04X}").unwrap();
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[test]
fn renders_compact() {
    let value = crate::parse(r#"{"a":[1,2.5,"x\"y"],"b":null}"#).unwrap();
    assert_eq!(to_json(&value), r#"{"a":[1,2.5,"x\"y"],"b":null}"#);
}

#[test]
fn escapes_astral_as_surrogates() {
    let value = Value::String("😀".into());
    let text = to_json_with(&value, &mut || "", true);
    assert_eq!(text, r#""\uD83D\uDE00""#);
}
