//! Python literal parser — converts literal notation into `serde_json::Value`.
//!
//! A single-pass recursive-descent parser over one mutable byte offset. The
//! accepted grammar is a superset of strict JSON:
//!
//! - Single- and double-quoted strings (treated identically), with optional
//!   `u`/`b`/`r` prefixes stripped before parsing
//! - `#` line comments and arbitrary whitespace between tokens
//! - Lists `[...]` and tuples `(...)`, both producing arrays
//! - Dicts `{k: v}` and sets `{a, b}`, disambiguated by lookahead after the
//!   first element; sets also produce arrays
//! - `None`/`True`/`False` keywords, plus bare identifiers as strings
//! - Trailing commas in every collection form
//!
//! # Key design decisions
//!
//! - **Deterministic grammar, fatal errors**: every branch is selected by one
//!   character of lookahead and nothing backtracks. The first error aborts
//!   the parse; there is no partial output.
//! - **Dict keys are stringified**: JSON objects require string keys, so
//!   primitive keys use their literal string form (`1` → `"1"`, `True` →
//!   `"true"`, `None` → `"null"`) and composite keys their compact JSON
//!   serialization (`(1,2)` → `"[1,2]"`). Duplicate stringified keys are
//!   last-write-wins via `Map::insert`.
//! - **One source number type**: integral literals that fit `i64` become JSON
//!   integers (so `2.0` serializes as `2`, matching how the notation's home
//!   language prints numbers); everything else stays `f64`. A consumed
//!   substring that fails conversion falls back to a string value.
//! - **Depth-limited recursion**: nesting is capped at [`MAX_DEPTH`] so
//!   hostile input raises a classified error instead of exhausting the call
//!   stack. Depth is threaded as a parameter, not parser state.
//! - **Lenient tail**: parsing stops after the first complete value; trailing
//!   text (stray tokens, comments) is silently ignored.

use crate::error::{CollectionKind, PysonError, Result};
use serde_json::{Map, Value};

/// Maximum nesting depth for lists, tuples, dicts, and sets.
pub const MAX_DEPTH: usize = 512;

/// Parse one Python literal expression into a JSON-compatible value.
///
/// Leading whitespace and `#` comments are skipped; content after the first
/// complete value is ignored. Returns a classified [`PysonError`] on the
/// first syntax error.
///
/// ```rust
/// use serde_json::json;
///
/// let value = pyson_core::parse("[(1, 2), {'a': None}, {3, 4}]").unwrap();
/// assert_eq!(value, json!([[1, 2], {"a": null}, [3, 4]]));
/// ```
pub fn parse(source: &str) -> Result<Value> {
    Parser::new(source).parse_value(0)
}

/// Lexical cursor plus the parse routines. One instance per parse call; the
/// only mutable state is the byte offset.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser { src, pos: 0 }
    }

    /// The character at the current offset, or `None` at end of input.
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// The character after the current one. Used only for string-prefix
    /// lookahead (`u'...'`).
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Move the offset past the current character. No-op at end of input.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace and `#` line comments. A comment runs to (not past)
    /// the next newline; the newline itself is consumed as whitespace on the
    /// next round.
    fn skip_insignificant(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Dispatch on the next significant character.
    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        self.skip_insignificant();
        let Some(c) = self.peek() else {
            return Err(PysonError::UnexpectedEndOfInput { offset: self.pos });
        };
        match c {
            '"' | '\'' => self.parse_string(),
            '[' => self.parse_sequence(']', depth),
            '(' => self.parse_sequence(')', depth),
            '{' => self.parse_set_or_mapping(depth),
            '-' | '0'..='9' => Ok(self.parse_number()),
            // String prefixes: u'...', b"...", r'...'. The prefix is dropped
            // and escapes are still processed (raw-string semantics are not
            // honored).
            'u' | 'b' | 'r' if matches!(self.peek_next(), Some('"' | '\'')) => {
                self.advance();
                self.parse_string()
            }
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.parse_bareword()),
            c => Err(PysonError::UnexpectedCharacter {
                expected: "a value".to_string(),
                found: c,
                offset: self.pos,
            }),
        }
    }

    /// Parse a quoted string. The cursor sits on the opening quote; either
    /// quote style works and both produce a plain string.
    ///
    /// Recognized escapes are `\n \r \t \b \f \\ \" \' \/`; any other
    /// escaped character is kept literally with the backslash dropped.
    fn parse_string(&mut self) -> Result<Value> {
        let start = self.pos;
        let quote = self.peek().unwrap_or('\'');
        self.advance();

        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.advance();
                let Some(esc) = self.peek() else {
                    break;
                };
                out.push(match esc {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'b' => '\u{0008}',
                    'f' => '\u{000C}',
                    other => other, // covers \\ " ' / and the lossy fallback
                });
                self.advance();
            } else if c == quote {
                self.advance();
                return Ok(Value::String(out));
            } else {
                out.push(c);
                self.advance();
            }
        }
        Err(PysonError::UnterminatedString { offset: start })
    }

    /// Parse a number: optional `-`, digits, optional fraction, optional
    /// exponent. Hex/octal/binary literals and digit separators are not part
    /// of the grammar; such input stops at the first unrecognized character
    /// and the remainder is left for the caller.
    fn parse_number(&mut self) -> Value {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        self.eat_digits();
        if self.peek() == Some('.') {
            self.advance();
            self.eat_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            self.eat_digits();
        }
        number_from_literal(&self.src[start..self.pos])
    }

    fn eat_digits(&mut self) {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
    }

    /// Parse a bare identifier. `None`/`True`/`False` map to their JSON
    /// counterparts; any other word becomes a string value rather than an
    /// error (inherited leniency that callers rely on).
    fn parse_bareword(&mut self) -> Value {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }
        match &self.src[start..self.pos] {
            "None" => Value::Null,
            "True" => Value::Bool(true),
            "False" => Value::Bool(false),
            word => Value::String(word.to_string()),
        }
    }

    /// Parse a list or tuple; `closer` is `]` or `)`. Both forms produce an
    /// array — the distinction is not preserved.
    fn parse_sequence(&mut self, closer: char, depth: usize) -> Result<Value> {
        let open = self.pos;
        self.check_depth(depth)?;
        self.advance();
        self.skip_insignificant();

        let mut items = Vec::new();
        if self.peek() == Some(closer) {
            self.advance();
            return Ok(Value::Array(items));
        }

        loop {
            if self.peek().is_none() {
                return Err(PysonError::UnterminatedCollection {
                    kind: CollectionKind::Sequence,
                    offset: open,
                });
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_insignificant();
            match self.peek() {
                Some(c) if c == closer => {
                    self.advance();
                    return Ok(Value::Array(items));
                }
                Some(',') => {
                    self.advance();
                    self.skip_insignificant();
                    // Trailing comma: `[1, 2,]`
                    if self.peek() == Some(closer) {
                        self.advance();
                        return Ok(Value::Array(items));
                    }
                }
                Some(c) => {
                    return Err(PysonError::UnexpectedCharacter {
                        expected: format!("',' or '{closer}'"),
                        found: c,
                        offset: self.pos,
                    });
                }
                None => {
                    return Err(PysonError::UnterminatedCollection {
                        kind: CollectionKind::Sequence,
                        offset: open,
                    });
                }
            }
        }
    }

    /// Parse a brace literal. `{}` is an empty dict. Otherwise the first
    /// element is parsed, and a following `:` selects the dict branch; any
    /// other continuation means a set.
    fn parse_set_or_mapping(&mut self, depth: usize) -> Result<Value> {
        let open = self.pos;
        self.check_depth(depth)?;
        self.advance();
        self.skip_insignificant();

        if self.peek() == Some('}') {
            self.advance();
            return Ok(Value::Object(Map::new()));
        }

        let first = self.parse_value(depth + 1)?;
        self.skip_insignificant();
        if self.peek() == Some(':') {
            self.parse_mapping_rest(first, open, depth)
        } else {
            self.parse_set_rest(first, open, depth)
        }
    }

    /// Dict branch: the cursor sits on the `:` after the first key.
    fn parse_mapping_rest(&mut self, first_key: Value, open: usize, depth: usize) -> Result<Value> {
        let mut map = Map::new();
        self.advance(); // ':'
        self.skip_insignificant();
        let value = self.parse_value(depth + 1)?;
        map.insert(mapping_key(&first_key)?, value);

        loop {
            self.skip_insignificant();
            match self.peek() {
                Some('}') => {
                    self.advance();
                    return Ok(Value::Object(map));
                }
                Some(',') => {
                    self.advance();
                    self.skip_insignificant();
                    // Trailing comma: `{'a': 1,}`
                    if self.peek() == Some('}') {
                        self.advance();
                        return Ok(Value::Object(map));
                    }
                }
                Some(c) => {
                    return Err(PysonError::UnexpectedCharacter {
                        expected: "',' or '}'".to_string(),
                        found: c,
                        offset: self.pos,
                    });
                }
                None => {
                    return Err(PysonError::UnterminatedCollection {
                        kind: CollectionKind::Mapping,
                        offset: open,
                    });
                }
            }

            if self.peek().is_none() {
                return Err(PysonError::UnterminatedCollection {
                    kind: CollectionKind::Mapping,
                    offset: open,
                });
            }
            let key = self.parse_value(depth + 1)?;
            self.skip_insignificant();
            match self.peek() {
                Some(':') => self.advance(),
                Some(c) => {
                    return Err(PysonError::UnexpectedCharacter {
                        expected: "':'".to_string(),
                        found: c,
                        offset: self.pos,
                    });
                }
                None => {
                    return Err(PysonError::UnterminatedCollection {
                        kind: CollectionKind::Mapping,
                        offset: open,
                    });
                }
            }
            self.skip_insignificant();
            let value = self.parse_value(depth + 1)?;
            map.insert(mapping_key(&key)?, value);
        }
    }

    /// Set branch: the first element is already parsed. Sets become arrays in
    /// encounter order; duplicates are kept as-is.
    fn parse_set_rest(&mut self, first: Value, open: usize, depth: usize) -> Result<Value> {
        let mut items = vec![first];
        loop {
            self.skip_insignificant();
            match self.peek() {
                Some('}') => {
                    self.advance();
                    return Ok(Value::Array(items));
                }
                Some(',') => {
                    self.advance();
                    self.skip_insignificant();
                    // Trailing comma: `{1, 2,}`
                    if self.peek() == Some('}') {
                        self.advance();
                        return Ok(Value::Array(items));
                    }
                }
                Some(c) => {
                    return Err(PysonError::UnexpectedCharacter {
                        expected: "',' or '}'".to_string(),
                        found: c,
                        offset: self.pos,
                    });
                }
                None => {
                    return Err(PysonError::UnterminatedCollection {
                        kind: CollectionKind::Set,
                        offset: open,
                    });
                }
            }
            if self.peek().is_none() {
                return Err(PysonError::UnterminatedCollection {
                    kind: CollectionKind::Set,
                    offset: open,
                });
            }
            items.push(self.parse_value(depth + 1)?);
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= MAX_DEPTH {
            return Err(PysonError::TooDeep {
                limit: MAX_DEPTH,
                offset: self.pos,
            });
        }
        Ok(())
    }
}

/// Convert a consumed numeric substring into a value.
///
/// Integral results in `i64` range become JSON integers; other finite results
/// become floats. Anything unconvertible (a lone `-`, an empty exponent, an
/// overflow to infinity) falls back to the raw substring as a string.
fn number_from_literal(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return Value::Number((f as i64).into());
            }
            if let Some(n) = serde_json::Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }
    Value::String(raw.to_string())
}

/// Stringify a parsed dict key. Primitives use their literal string form;
/// lists/tuples/dicts used as keys are serialized to compact JSON.
fn mapping_key(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => Ok(serde_json::to_string(key)?),
    }
}
