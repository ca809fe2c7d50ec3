//! Minimal UTF-8 codec.
//!
//! The parser uses [`encode`] to append decoded `\uXXXX` escapes (and
//! combined surrogate pairs) to the string it is building. The writer's
//! ASCII-escaped output mode uses [`decode`] to walk a string's bytes one
//! scalar at a time. Decoding never fails: malformed input degrades to
//! [`REPLACEMENT`].

/// The Unicode replacement character, U+FFFD.
pub const REPLACEMENT: u32 = 0xFFFD;

/// Append the UTF-8 encoding of a Unicode scalar value to `out`.
pub fn encode(cp: u32, out: &mut Vec<u8>) {
    if cp <= 0x7F {
        out.push(cp as u8);
    } else if cp <= 0x7FF {
        out.push(0xC0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else if cp <= 0xFFFF {
        out.push(0xE0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else {
        out.push(0xF0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    }
}

/// Decode one UTF-8 sequence starting at `pos`, returning the scalar value
/// and the number of bytes consumed (at least 1).
///
/// Truncated sequences, invalid lead bytes, over-long encodings, and
/// encoded surrogates all yield [`REPLACEMENT`]. Over-long and surrogate
/// sequences still consume their full length; truncated and invalid leads
/// consume a single byte.
pub fn decode(bytes: &[u8], pos: usize) -> (u32, usize) {
    let first = match bytes.get(pos) {
        Some(&b) => u32::from(b),
        None => return (REPLACEMENT, 1),
    };
    if first < 0x80 {
        return (first, 1);
    }
    // 0x80..0xC0 are continuation bytes; a sequence cannot start there.
    if first < 0xC0 {
        return (REPLACEMENT, 1);
    }
    if first < 0xE0 {
        if bytes.len() - pos < 2 {
            return (REPLACEMENT, 1);
        }
        let cp = ((first & 0x1F) << 6) | (u32::from(bytes[pos + 1]) & 0x3F);
        if cp < 0x80 {
            return (REPLACEMENT, 2); // over-long
        }
        return (cp, 2);
    }
    if first < 0xF0 {
        if bytes.len() - pos < 3 {
            return (REPLACEMENT, 1);
        }
        let cp = ((first & 0x0F) << 12)
            | ((u32::from(bytes[pos + 1]) & 0x3F) << 6)
            | (u32::from(bytes[pos + 2]) & 0x3F);
        if cp < 0x800 {
            return (REPLACEMENT, 3); // over-long
        }
        if (0xD800..=0xDFFF).contains(&cp) {
            return (REPLACEMENT, 3); // surrogates are not scalar values
        }
        return (cp, 3);
    }
    if first < 0xF8 {
        if bytes.len() - pos < 4 {
            return (REPLACEMENT, 1);
        }
        let cp = ((first & 0x07) << 18)
            | ((u32::from(bytes[pos + 1]) & 0x3F) << 12)
            | ((u32::from(bytes[pos + 2]) & 0x3F) << 6)
            | (u32::from(bytes[pos + 3]) & 0x3F);
        if cp < 0x10000 {
            return (REPLACEMENT, 4); // over-long
        }
        return (cp, 4);
    }
    (REPLACEMENT, 1)
}
