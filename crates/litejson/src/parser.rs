//! Recursive-descent JSON parser.
//!
//! Single pass, one-token lookahead, no backtracking past the current
//! token. The cursor is an explicit byte offset checked against the input
//! length on every advance. Parsing stops at the first syntax error and
//! reports the 1-based line, computed by counting newlines up to the
//! failure position only when the error is built.
//!
//! With comments enabled the accepted language is a superset of RFC 8259:
//! `//` line comments and `/* */` block comments are skipped wherever
//! whitespace may appear.

use crate::error::{JsonError, Result};
use crate::utf8;
use crate::value::{Number, Value};

/// Maximum container nesting before parsing fails. Bounds the recursion
/// depth against adversarial input like `[[[[...`.
const MAX_DEPTH: usize = 128;

/// Parse a JSON document into a [`Value`].
///
/// On failure no value is produced; a partially-built tree is never
/// observable. Trailing non-whitespace content after the top-level value is
/// an error.
///
/// ```rust
/// use litejson::parse;
///
/// let doc = parse(r#"{"a":1,"b":[true,false,null]}"#, false).unwrap();
/// assert_eq!(doc["b"][0].as_bool(), Some(true));
///
/// let extended = parse("/* config */ {\"retries\": 3}", true).unwrap();
/// assert_eq!(extended["retries"].as_u64(), Some(3));
/// ```
pub fn parse(input: &str, allow_comments: bool) -> Result<Value> {
    let mut parser = Parser {
        text: input,
        bytes: input.as_bytes(),
        pos: 0,
        depth: 0,
        allow_comments,
    };
    parser.parse_document()
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    allow_comments: bool,
}

impl Parser<'_> {
    fn parse_document(&mut self) -> Result<Value> {
        // A UTF-8 byte-order mark may precede the document.
        if self.bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            self.pos = 3;
        }
        self.skip_whitespace()?;
        if self.pos >= self.bytes.len() {
            return Err(self.fail("unexpected ending character"));
        }
        let value = self.parse_value()?;
        self.skip_whitespace()?;
        if self.pos < self.bytes.len() {
            return Err(self.fail("extra characters"));
        }
        Ok(value)
    }

    fn fail(&self, message: &str) -> JsonError {
        let upto = self.pos.min(self.bytes.len());
        let line = 1 + self.bytes[..upto].iter().filter(|&&b| b == b'\n').count();
        JsonError::Syntax {
            line,
            message: message.to_owned(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Result<u8> {
        match self.bytes.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(b)
            }
            None => Err(self.fail("unexpected ending character")),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(_) => self.parse_number(),
            None => Err(self.fail("unexpected ending character")),
        }
    }

    fn parse_literal(&mut self, spelling: &'static str, value: Value) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(spelling.as_bytes()) {
            self.pos += spelling.len();
            Ok(value)
        } else {
            Err(self.fail(&format!("missing '{spelling}'")))
        }
    }

    /// Cursor is on the opening quote. Decodes escapes as it goes; the
    /// in-memory representation is always UTF-8.
    fn parse_string(&mut self) -> Result<String> {
        self.pos += 1;
        let mut buf: Vec<u8> = Vec::new();
        let mut run = self.pos; // start of the current escape-free run
        loop {
            let b = match self.bytes.get(self.pos) {
                Some(&b) => b,
                None => return Err(self.fail("missing '\"'")),
            };
            match b {
                b'"' => {
                    buf.extend_from_slice(&self.bytes[run..self.pos]);
                    self.pos += 1;
                    return String::from_utf8(buf)
                        .map_err(|_| self.fail("invalid utf-8 in string"));
                }
                b'\\' => {
                    buf.extend_from_slice(&self.bytes[run..self.pos]);
                    self.pos += 1;
                    self.parse_escape(&mut buf)?;
                    run = self.pos;
                }
                b if b < 0x20 => return Err(self.fail("control character in string")),
                _ => self.pos += 1,
            }
        }
    }

    /// Cursor is just past the backslash.
    fn parse_escape(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        match self.advance()? {
            b'"' => buf.push(b'"'),
            b'\\' => buf.push(b'\\'),
            b'/' => buf.push(b'/'),
            b'b' => buf.push(0x08),
            b'f' => buf.push(0x0C),
            b'n' => buf.push(b'\n'),
            b'r' => buf.push(b'\r'),
            b't' => buf.push(b'\t'),
            b'u' => {
                let mut cp = self.parse_hex4()?;
                if (0xD800..=0xDBFF).contains(&cp) {
                    // A high surrogate must be completed by an immediately
                    // following \uXXXX low surrogate.
                    if self.bytes[self.pos..].starts_with(b"\\u") {
                        self.pos += 2;
                        let low = self.parse_hex4()?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(self.fail("invalid surrogate pair"));
                        }
                        cp = 0x10000 + ((cp & 0x3FF) << 10) + (low & 0x3FF);
                    } else {
                        return Err(self.fail("missing surrogate pair"));
                    }
                } else if (0xDC00..=0xDFFF).contains(&cp) {
                    return Err(self.fail("invalid surrogate pair"));
                }
                utf8::encode(cp, buf);
            }
            _ => return Err(self.fail("invalid escape")),
        }
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let mut u = 0u32;
        for _ in 0..4 {
            let digit = match self.advance()? {
                b @ b'0'..=b'9' => u32::from(b - b'0'),
                b @ b'a'..=b'f' => u32::from(b - b'a') + 10,
                b @ b'A'..=b'F' => u32::from(b - b'A') + 10,
                _ => return Err(self.fail("invalid hex digit")),
            };
            u = (u << 4) | digit;
        }
        Ok(u)
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.pos += 1;
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.fail("nesting depth limit exceeded"));
        }
        let mut items = Vec::new();
        self.skip_whitespace()?;
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }
        loop {
            self.skip_whitespace()?;
            if self.peek() == Some(b']') {
                // A value was promised by the preceding '[' or ','.
                return Err(self.fail("missing value before ']'"));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace()?;
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    self.depth -= 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.fail("missing ',' or ']'")),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.pos += 1;
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.fail("nesting depth limit exceeded"));
        }
        let mut entries: Vec<(String, Value)> = Vec::new();
        self.skip_whitespace()?;
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(entries));
        }
        loop {
            self.skip_whitespace()?;
            if self.peek() != Some(b'"') {
                return Err(self.fail("missing '\"'"));
            }
            let key = self.parse_string()?;
            self.skip_whitespace()?;
            if self.peek() != Some(b':') {
                return Err(self.fail("missing ':'"));
            }
            self.pos += 1;
            self.skip_whitespace()?;
            if self.pos >= self.bytes.len() {
                return Err(self.fail("unexpected ending character"));
            }
            let value = self.parse_value()?;
            // Duplicate keys: last write wins, keeping the first position.
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
            self.skip_whitespace()?;
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    self.depth -= 1;
                    return Ok(Value::Object(entries));
                }
                _ => return Err(self.fail("missing ',' or '}'")),
            }
        }
    }

    /// Grammar: `-? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?`
    ///
    /// The matched span converts to `Int` (leading `-`), `UInt`, or `Float`
    /// when a fraction or exponent is present; integer overflow falls back
    /// to `Float`.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut end = self.pos;
        let mut is_float = false;

        if self.bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        match self.bytes.get(end) {
            Some(b'0') => {
                end += 1;
                if matches!(self.bytes.get(end), Some(b'0'..=b'9')) {
                    self.pos = end;
                    return Err(self.fail("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => {
                while matches!(self.bytes.get(end), Some(b'0'..=b'9')) {
                    end += 1;
                }
            }
            _ => {
                self.pos = end;
                return Err(if end == start {
                    self.fail("missing value")
                } else {
                    self.fail("invalid number")
                });
            }
        }
        if self.bytes.get(end) == Some(&b'.') {
            is_float = true;
            end += 1;
            if !matches!(self.bytes.get(end), Some(b'0'..=b'9')) {
                self.pos = end;
                return Err(self.fail("invalid number"));
            }
            while matches!(self.bytes.get(end), Some(b'0'..=b'9')) {
                end += 1;
            }
        }
        if matches!(self.bytes.get(end), Some(b'e' | b'E')) {
            is_float = true;
            end += 1;
            if matches!(self.bytes.get(end), Some(b'+' | b'-')) {
                end += 1;
            }
            if !matches!(self.bytes.get(end), Some(b'0'..=b'9')) {
                self.pos = end;
                return Err(self.fail("invalid number"));
            }
            while matches!(self.bytes.get(end), Some(b'0'..=b'9')) {
                end += 1;
            }
        }

        let span = &self.text[start..end];
        self.pos = end;
        let number = if is_float {
            match span.parse::<f64>() {
                Ok(f) => Number::Float(f),
                Err(_) => return Err(self.fail("invalid number")),
            }
        } else if span.starts_with('-') {
            match span.parse::<i64>() {
                Ok(i) => Number::Int(i),
                Err(_) => match span.parse::<f64>() {
                    Ok(f) => Number::Float(f),
                    Err(_) => return Err(self.fail("invalid number")),
                },
            }
        } else {
            match span.parse::<u64>() {
                Ok(u) => Number::UInt(u),
                Err(_) => match span.parse::<f64>() {
                    Ok(f) => Number::Float(f),
                    Err(_) => return Err(self.fail("invalid number")),
                },
            }
        };
        Ok(Value::Number(number))
    }

    /// Skips space, tab, CR, LF, and (when enabled) comments. Stops quietly
    /// at end of input; only unterminated or disallowed comments are errors.
    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                b'/' => self.skip_comment()?,
                _ => break,
            }
        }
        Ok(())
    }

    fn skip_comment(&mut self) -> Result<()> {
        if !self.allow_comments {
            return Err(self.fail("comments are not allowed here"));
        }
        self.pos += 1;
        match self.peek() {
            Some(b'/') => {
                self.pos += 1;
                while let Some(b) = self.peek() {
                    self.pos += 1;
                    if b == b'\n' {
                        return Ok(());
                    }
                }
                Err(self.fail("unterminated comment"))
            }
            Some(b'*') => {
                self.pos += 1;
                while self.pos + 1 < self.bytes.len() {
                    if self.bytes[self.pos] == b'*' && self.bytes[self.pos + 1] == b'/' {
                        self.pos += 2;
                        return Ok(());
                    }
                    self.pos += 1;
                }
                self.pos = self.bytes.len();
                Err(self.fail("unterminated comment"))
            }
            _ => Err(self.fail("invalid comment style")),
        }
    }
}
