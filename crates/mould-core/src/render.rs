//! Deterministic JSON-like rendering.
//!
//! Used for `Display` of values and records, and for the values quoted in
//! validation errors. Plain data renders as compact JSON; values JSON cannot
//! represent get a readable placeholder instead of being dropped:
//!
//! ```text
//! undefined   NaN   Infinity   Symbol(desc)   [Function name]
//! ```
//!
//! Containers nested deeper than `max_depth` render as `[Object]` / `[Array]`.

use std::fmt::Write;

use crate::map::Map;
use crate::value::Value;

/// Nesting depth used by `Display` when no explicit depth is configured.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Render a value.
#[must_use]
pub fn render(value: &Value, max_depth: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, max_depth);
    out
}

/// Render the entries of a map as an object, in the map's order.
#[must_use]
pub fn render_entries<'a, I>(entries: I, max_depth: usize) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let mut out = String::new();
    write_entries(&mut out, entries, 0, max_depth);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, max_depth: usize) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => write_string(out, s),
        Value::Symbol(sym) => {
            let _ = write!(out, "{sym}");
        }
        Value::Function(f) => {
            let _ = write!(out, "{f}");
        }
        Value::Array(_) if depth >= max_depth => out.push_str("[Array]"),
        Value::Object(_) if depth >= max_depth => out.push_str("[Object]"),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item, depth + 1, max_depth);
            }
            out.push(']');
        }
        Value::Object(map) => write_map(out, map, depth, max_depth),
    }
}

fn write_map(out: &mut String, map: &Map, depth: usize, max_depth: usize) {
    write_entries(out, map.iter(), depth, max_depth);
}

fn write_entries<'a, I>(out: &mut String, entries: I, depth: usize, max_depth: usize)
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(out, key);
        out.push(':');
        write_value(out, value, depth + 1, max_depth);
    }
    out.push('}');
}

fn write_number(out: &mut String, n: f64) {
    if n.is_nan() {
        out.push_str("NaN");
    } else if n.is_infinite() {
        out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    } else if n == 0.0 {
        // Covers -0 as well.
        out.push('0');
    } else {
        let _ = write!(out, "{n}");
    }
}

fn write_string(out: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => {
            let _ = write!(out, "{s:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(6), "6")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(-0.0), "0")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::from("say \"hi\""), r#""say \"hi\"""#)]
    fn renders_scalars(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(render(&value, DEFAULT_MAX_DEPTH), expected);
    }

    #[test]
    fn renders_containers_in_order() {
        let value = Value::from(json!({"b": [1, "two"], "a": {"x": null}}));
        assert_eq!(
            render(&value, DEFAULT_MAX_DEPTH),
            r#"{"b":[1,"two"],"a":{"x":null}}"#
        );
    }

    #[test]
    fn renders_non_json_values_with_placeholders() {
        let value = Value::object([
            ("u", Value::Undefined),
            ("s", Value::from(Symbol::new(Some("k")))),
            ("f", Value::from(Function::new("check", 1, |_| Value::Null))),
        ]);
        assert_eq!(
            render(&value, DEFAULT_MAX_DEPTH),
            r#"{"u":undefined,"s":Symbol(k),"f":[Function check]}"#
        );
    }

    #[test]
    fn truncates_beyond_max_depth() {
        let value = Value::from(json!({"outer": {"inner": {"leaf": 1}}, "list": [[1]]}));
        assert_eq!(
            render(&value, 1),
            r#"{"outer":[Object],"list":[Array]}"#
        );
        assert_eq!(render(&value, 0), "[Object]");
    }

    #[test]
    fn renders_bare_entries() {
        let one = Value::from(1);
        let two = Value::from("2");
        let text = render_entries([("a", &one), ("b", &two)], DEFAULT_MAX_DEPTH);
        assert_eq!(text, r#"{"a":1,"b":"2"}"#);
    }
}
