//! One-call converters from Python literal text to JSON text.
//!
//! These wrap [`crate::parser::parse`] with `serde_json` serialization. With
//! the `preserve_order` feature enabled, dict insertion order survives into
//! the JSON output.

use crate::error::Result;
use crate::parser::parse;

/// Convert Python literal notation to compact (minified) JSON.
///
/// ```rust
/// let json = pyson_core::to_json("{'a': (1, 2), 'b': None}").unwrap();
/// assert_eq!(json, r#"{"a":[1,2],"b":null}"#);
/// ```
pub fn to_json(source: &str) -> Result<String> {
    let value = parse(source)?;
    Ok(serde_json::to_string(&value)?)
}

/// Convert Python literal notation to pretty-printed JSON (two-space indent).
pub fn to_json_pretty(source: &str) -> Result<String> {
    let value = parse(source)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
