//! Zero-copy JSON parser.
//!
//! `libjot` turns a JSON document held in memory into a tree of [`Value`]s.
//! Strings and object keys are slices of the input buffer, so parsing copies
//! no text and a parsed tree borrows from the buffer it came from.
//!
//! # Parsing Model
//!
//! There is no separate tokenizer. The [`Parser`] skips whitespace, looks at
//! one byte, and dispatches straight to the scan for that kind of value,
//! recursing for array elements and object values. The grammar is lenient in
//! a few fixed ways:
//!
//! - only space and line feed count as whitespace;
//! - string contents are taken verbatim, without escape decoding, so a
//!   backslash before a quote does not protect it;
//! - numbers are the longest run of digits, `e`, `.`, `+` and `-`, checked
//!   by float conversion;
//! - commas inside arrays and objects are skipped wherever they appear;
//! - arrays and objects nest at most [`MAX_DEPTH`] levels deep;
//! - bytes after the first complete value are not examined.

mod error;
mod parser;
mod value;

pub use error::{ParseError, Result};
pub use parser::{Parser, MAX_DEPTH};
pub use value::{Object, Value};

/// Parse a JSON document from a byte buffer.
///
/// # Example
///
/// ```
/// use libjot::{parse, Value};
///
/// let value = parse(b"[true, null, \"foo\"]").unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// assert_eq!(value.as_array().unwrap()[2], Value::String(b"foo"));
/// ```
pub fn parse(input: &[u8]) -> Result<Value<'_>> {
    Parser::new(input).parse()
}

/// Parse a JSON document from a string.
pub fn parse_str(input: &str) -> Result<Value<'_>> {
    parse(input.as_bytes())
}

/// Release a parsed value and every container it owns.
pub fn release(value: Value<'_>) {
    value.release();
}
