//! # pyson-core
//!
//! Parser for **Python literal notation** — dicts, lists, tuples, sets,
//! strings, numbers, booleans and `None` — producing a JSON-compatible
//! `serde_json::Value` tree.
//!
//! The grammar is a superset of strict JSON: anything `serde_json` would
//! accept parses here too, plus single-quoted strings, `#` line comments,
//! trailing commas, tuples, sets, `u`/`b`/`r` string prefixes, and bare
//! `None`/`True`/`False` keywords. Tuples and sets both become JSON arrays;
//! dict keys are stringified so the output is always a valid JSON object.
//!
//! ## Quick start
//!
//! ```rust
//! use pyson_core::to_json;
//!
//! let json = to_json("{'name': 'Alice', 'tags': ('rust', 'json')}").unwrap();
//! assert_eq!(json, r#"{"name":"Alice","tags":["rust","json"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — Python literal text → `serde_json::Value`
//! - [`serialize`] — one-call converters to compact or pretty JSON text
//! - [`error`] — classified syntax errors with byte offsets

pub mod error;
pub mod parser;
pub mod serialize;

pub use error::{CollectionKind, PysonError};
pub use parser::parse;
pub use serialize::{to_json, to_json_pretty};
