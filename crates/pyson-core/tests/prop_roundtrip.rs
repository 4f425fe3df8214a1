//! Property-based round-trip tests.
//!
//! Uses `proptest` to generate random JSON-compatible values and verify the
//! two structural guarantees of the parser:
//!
//! - The grammar is a superset of strict JSON: serializing any generated
//!   value with `serde_json` and parsing it back yields an equal tree.
//! - Rendering the same value in Python flavor (single quotes, `True` /
//!   `False` / `None`, optionally tuples for sequences) also parses back
//!   equal, and re-serializing that parse is idempotent.
//!
//! Generated values avoid shapes the data model deliberately folds away:
//! integral floats (stored as integers), integers beyond `i64`, and control
//! characters outside `\b \f \n \r \t` (serde escapes those as `\uXXXX`,
//! which the escape table does not decode).

use proptest::prelude::*;
use pyson_core::{parse, to_json};
use serde_json::{Map, Number, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Dict keys: identifier-shaped strings, never needing escapes.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

/// String values with edge cases: empty, keyword look-alikes, number
/// look-alikes, unicode, quotes, backslashes, and escapable control chars.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[ -~]{0,30}").unwrap(),
        Just(String::new()),
        Just("None".to_string()),
        Just("True".to_string()),
        Just("False".to_string()),
        Just("42".to_string()),
        Just("-3.5".to_string()),
        Just("café ✨".to_string()),
        Just("line1\nline2".to_string()),
        Just("tab\tand\rreturn".to_string()),
        Just("bs\u{0008}ff\u{000C}".to_string()),
        Just("back\\slash 'single' \"double\"".to_string()),
        Just("# not a comment".to_string()),
    ]
}

fn arb_integer() -> impl Strategy<Value = Value> {
    (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(Number::from(n)))
}

/// Floats with 1–4 decimal places and a non-zero fractional part; integral
/// floats are excluded because the parser stores them as integers.
fn arb_float() -> impl Strategy<Value = Value> {
    (-100_000_000i64..100_000_000i64, 1u32..5u32).prop_filter_map(
        "must have a fractional part",
        |(mantissa, decimals)| {
            let f = mantissa as f64 / 10f64.powi(decimals as i32);
            if !f.is_finite() || f.fract() == 0.0 {
                return None;
            }
            Number::from_f64(f).map(Value::Number)
        },
    )
}

/// Full value trees: scalars at the leaves, arrays/objects up to 3 levels.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_integer(),
        arb_float(),
        arb_string().prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

// ============================================================================
// Python-flavored rendering
// ============================================================================

/// Render a value the way a Python repr would: single-quoted strings,
/// `None`/`True`/`False`, and (optionally) tuples instead of lists.
fn render_python(value: &Value, tuples: bool, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            out.push('\'');
            for c in s.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '\'' => out.push_str("\\'"),
                    c => out.push(c),
                }
            }
            out.push('\'');
        }
        Value::Array(items) => {
            let (open, close) = if tuples { ('(', ')') } else { ('[', ']') };
            out.push(open);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_python(item, tuples, out);
            }
            if tuples && items.len() == 1 {
                out.push(',');
            }
            out.push(close);
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                // Keys come from arb_key and never need escaping
                out.push('\'');
                out.push_str(key);
                out.push_str("': ");
                render_python(val, tuples, out);
            }
            out.push('}');
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn strict_json_parses_identically(value in arb_value()) {
        let json = serde_json::to_string(&value).unwrap();
        let parsed = parse(&json).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn pretty_json_parses_identically(value in arb_value()) {
        let json = serde_json::to_string_pretty(&value).unwrap();
        let parsed = parse(&json).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn python_rendering_parses_back(value in arb_value(), tuples in any::<bool>()) {
        let mut source = String::new();
        render_python(&value, tuples, &mut source);
        let parsed = parse(&source)
            .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"));
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn reserialization_is_idempotent(value in arb_value()) {
        let mut source = String::new();
        render_python(&value, false, &mut source);
        let first = parse(&source).unwrap();
        let json = to_json(&source).unwrap();
        let second = parse(&json).unwrap();
        prop_assert_eq!(first, second);
    }
}
