//! Recursive-descent JSON parser.
//!
//! Lexing and parsing are fused: each entry into [`Parser::parse`] skips
//! whitespace and dispatches on a single byte of lookahead. Every scan leaves
//! the cursor on the first byte it did not consume, so container loops always
//! resume exactly on the next separator or closing delimiter.

use log::{debug, trace};

use crate::error::{ParseError, Result};
use crate::value::{Object, Value};

/// Deepest nesting of arrays and objects a document may use.
///
/// Opening one more container past this depth is a syntax error, which keeps
/// the descent (and the drop of a partially built tree) within a fixed stack
/// budget.
pub const MAX_DEPTH: usize = 128;

/// Cursor over an input buffer that produces [`Value`]s borrowing from it.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a [u8],
    cursor: usize,
    depth: usize,
}

/// Only space and line feed separate tokens. Tab and carriage return do not.
fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\n'
}

/// Bytes that may appear in a numeric run. The run is validated by float
/// conversion, not by this class.
fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'e' | b'.' | b'+' | b'-')
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            depth: 0,
        }
    }

    /// Byte offset of the next unconsumed byte.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Parse one value starting at the cursor.
    ///
    /// Bytes after the value are left unread; calling `parse` again continues
    /// from there.
    pub fn parse(&mut self) -> Result<Value<'a>> {
        self.parse_value().inspect_err(|err| {
            debug!("parse failed near offset {}: {}", self.cursor, err);
        })
    }

    fn parse_value(&mut self) -> Result<Value<'a>> {
        match self.next_significant()? {
            b'n' => self.expect_literal(b"null").map(|()| Value::Null),
            b't' => self.expect_literal(b"true").map(|()| Value::Boolean(true)),
            b'f' => self.expect_literal(b"false").map(|()| Value::Boolean(false)),
            b'"' => self.scan_string().map(Value::String),
            b'[' => self.nested(Self::scan_array),
            b'{' => self.nested(Self::scan_object),
            b'0'..=b'9' | b'+' | b'-' => self.scan_number(),
            _ => Err(ParseError::Syntax),
        }
    }

    /// Run a container scan one level deeper, refusing to pass [`MAX_DEPTH`].
    fn nested(&mut self, scan: fn(&mut Self) -> Result<Value<'a>>) -> Result<Value<'a>> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::Syntax);
        }
        self.depth += 1;
        let result = scan(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Skip whitespace and return the byte under the cursor without
    /// consuming it. Running out of input here is a syntax error.
    fn next_significant(&mut self) -> Result<u8> {
        self.skip_whitespace();
        self.peek().ok_or(ParseError::Syntax)
    }

    fn expect_literal(&mut self, literal: &[u8]) -> Result<()> {
        let end = self.cursor + literal.len();
        match self.input.get(self.cursor..end) {
            Some(window) if window == literal => {
                self.cursor = end;
                Ok(())
            }
            _ => Err(ParseError::Syntax),
        }
    }

    /// Scan a quoted string and return the bytes between the quotes.
    ///
    /// Backslash has no special meaning, so `\"` ends the string.
    fn scan_string(&mut self) -> Result<&'a [u8]> {
        if self.peek() != Some(b'"') {
            return Err(ParseError::Syntax);
        }
        let input = self.input;
        let start = self.cursor + 1;
        let len = input[start..]
            .iter()
            .position(|&b| b == b'"')
            .ok_or(ParseError::Syntax)?;
        let end = start + len;
        self.cursor = end + 1;
        Ok(&input[start..end])
    }

    fn scan_number(&mut self) -> Result<Value<'a>> {
        let input = self.input;
        let start = self.cursor;
        let len = input[start..]
            .iter()
            .take_while(|&&b| is_number_byte(b))
            .count();
        // The delimiter that stopped the run stays unconsumed.
        self.cursor = start + len;
        let text =
            std::str::from_utf8(&input[start..self.cursor]).map_err(|_| ParseError::NumberFormat)?;
        Ok(Value::Number(text.parse::<f64>()?))
    }

    fn scan_array(&mut self) -> Result<Value<'a>> {
        trace!("array at offset {}", self.cursor);
        self.cursor += 1;
        let mut elements = Vec::new();

        loop {
            match self.next_significant()? {
                b',' => self.cursor += 1,
                b']' => {
                    self.cursor += 1;
                    return Ok(Value::Array(elements));
                }
                _ => {
                    let element = self.parse_value()?;
                    elements.try_reserve(1)?;
                    elements.push(element);
                }
            }
        }
    }

    fn scan_object(&mut self) -> Result<Value<'a>> {
        trace!("object at offset {}", self.cursor);
        self.cursor += 1;
        let mut entries = Object::new();

        loop {
            match self.next_significant()? {
                b',' => self.cursor += 1,
                b'}' => {
                    self.cursor += 1;
                    return Ok(Value::Object(entries));
                }
                _ => {
                    let key = self.scan_string()?;
                    if self.next_significant()? != b':' {
                        return Err(ParseError::Syntax);
                    }
                    self.cursor += 1;
                    let value = self.parse_value()?;
                    entries.try_reserve(1)?;
                    // Repeated keys overwrite in place.
                    entries.insert(key, value);
                }
            }
        }
    }
}
