//! Serialization of a [`Value`] tree back to JSON text.
//!
//! Two layouts, selected by the indent width: compact (`0`, no inter-token
//! whitespace) and pretty (`> 0`, one child per line, indented by
//! `depth * indent` spaces). Two Unicode output modes: raw UTF-8
//! passthrough, or ASCII-safe output where every non-ASCII scalar becomes a
//! `\uXXXX` escape (a surrogate pair of two escapes above U+FFFF).

use crate::utf8;
use crate::value::{Number, Value};

/// Render `value` as JSON text. See [`Value::dump`].
pub fn write(value: &Value, indent: usize, raw_utf8: bool) -> String {
    let mut w = Writer {
        out: String::new(),
        indent,
        depth: 0,
        raw_utf8,
    };
    if indent > 0 {
        w.write_pretty(value);
    } else {
        w.write_compact(value);
    }
    w.out
}

struct Writer {
    out: String,
    indent: usize,
    depth: usize,
    raw_utf8: bool,
}

impl Writer {
    fn write_compact(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(s),
            Value::Array(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.write_compact(item);
                }
                self.out.push(']');
            }
            Value::Object(entries) => {
                self.out.push('{');
                for (i, (key, val)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.write_string(key);
                    self.out.push(':');
                    self.write_compact(val);
                }
                self.out.push('}');
            }
        }
    }

    fn write_pretty(&mut self, value: &Value) {
        match value {
            Value::Array(items) if !items.is_empty() => {
                self.out.push_str("[\n");
                self.depth += 1;
                for item in items {
                    self.write_indent();
                    self.write_pretty(item);
                    self.out.push_str(",\n");
                }
                self.depth -= 1;
                self.trim_separator();
                self.write_indent();
                self.out.push(']');
            }
            Value::Object(entries) if !entries.is_empty() => {
                self.out.push_str("{\n");
                self.depth += 1;
                for (key, val) in entries {
                    self.write_indent();
                    self.write_string(key);
                    self.out.push_str(": ");
                    self.write_pretty(val);
                    self.out.push_str(",\n");
                }
                self.depth -= 1;
                self.trim_separator();
                self.write_indent();
                self.out.push('}');
            }
            Value::Array(_) => self.out.push_str("[]"),
            Value::Object(_) => self.out.push_str("{}"),
            scalar => self.write_compact(scalar),
        }
    }

    // Replace the ",\n" after the last child with a bare newline.
    fn trim_separator(&mut self) {
        self.out.truncate(self.out.len() - 2);
        self.out.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth * self.indent {
            self.out.push(' ');
        }
    }

    fn write_number(&mut self, n: Number) {
        match n {
            Number::Int(i) => self.out.push_str(&i.to_string()),
            Number::UInt(u) => self.out.push_str(&u.to_string()),
            // Negative zero gets an explicit fraction: bare "-0" would
            // re-parse as an integer and lose the sign on the next dump.
            Number::Float(f) if f == 0.0 && f.is_sign_negative() => {
                self.out.push_str("-0.0");
            }
            // Rust's Display for f64 is the shortest round-trippable
            // decimal form. NaN and infinities have no JSON spelling.
            Number::Float(f) if f.is_finite() => self.out.push_str(&f.to_string()),
            Number::Float(_) => self.out.push_str("null"),
        }
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        if self.raw_utf8 {
            for c in s.chars() {
                match c {
                    '"' => self.out.push_str("\\\""),
                    '\\' => self.out.push_str("\\\\"),
                    '\u{8}' => self.out.push_str("\\b"),
                    '\u{c}' => self.out.push_str("\\f"),
                    '\n' => self.out.push_str("\\n"),
                    '\r' => self.out.push_str("\\r"),
                    '\t' => self.out.push_str("\\t"),
                    c if (c as u32) < 0x20 => self.write_escape(c as u32),
                    c => self.out.push(c),
                }
            }
        } else {
            let bytes = s.as_bytes();
            let mut pos = 0;
            while pos < bytes.len() {
                match bytes[pos] {
                    b'"' => {
                        self.out.push_str("\\\"");
                        pos += 1;
                    }
                    b'\\' => {
                        self.out.push_str("\\\\");
                        pos += 1;
                    }
                    0x08 => {
                        self.out.push_str("\\b");
                        pos += 1;
                    }
                    0x0C => {
                        self.out.push_str("\\f");
                        pos += 1;
                    }
                    b'\n' => {
                        self.out.push_str("\\n");
                        pos += 1;
                    }
                    b'\r' => {
                        self.out.push_str("\\r");
                        pos += 1;
                    }
                    b'\t' => {
                        self.out.push_str("\\t");
                        pos += 1;
                    }
                    _ => {
                        let (cp, consumed) = utf8::decode(bytes, pos);
                        pos += consumed;
                        if cp < 0x20 {
                            self.write_escape(cp);
                        } else if cp < 0x80 {
                            self.out.push(cp as u8 as char);
                        } else if cp < 0x10000 {
                            self.write_escape(cp);
                        } else {
                            // Split into a UTF-16 surrogate pair.
                            let cp = cp - 0x10000;
                            self.write_escape(0xD800 + ((cp >> 10) & 0x3FF));
                            self.write_escape(0xDC00 + (cp & 0x3FF));
                        }
                    }
                }
            }
        }
        self.out.push('"');
    }

    fn write_escape(&mut self, u: u32) {
        self.out.push_str(&format!("\\u{:04x}", u & 0xFFFF));
    }
}
