//! Owned string storage with an explicit length and an encoding tag.
//!
//! `StrBuf` is the backing buffer for every guest String value. Length is
//! the buffer's own length (no terminator scanning), and every positional
//! operation that speaks "characters" derives boundaries from the leading
//! byte under the active encoding: 1 byte per character under ASCII-8BIT,
//! the UTF-8 leading-byte widths otherwise.

use std::borrow::Cow;
use std::fmt;

use super::encoding::Encoding;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StrBuf {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl StrBuf {
    pub fn new() -> Self {
        Self { bytes: Vec::new(), encoding: Encoding::Utf8 }
    }

    pub fn from_str(s: &str) -> Self {
        Self { bytes: s.as_bytes().to_vec(), encoding: Encoding::Utf8 }
    }

    pub fn from_bytes(bytes: Vec<u8>, encoding: Encoding) -> Self {
        Self { bytes, encoding }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lossy view for host-side formatting. Guest semantics always go
    /// through `as_bytes`.
    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Byte length, not character count.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Reinterprets the existing bytes under a new tag. No transformation.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    /// Full byte-level copy. A dup never aliases the source buffer.
    pub fn dup(&self) -> Self {
        Self { bytes: self.bytes.clone(), encoding: self.encoding }
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    pub fn push_buf(&mut self, other: &StrBuf) {
        self.bytes.extend_from_slice(&other.bytes);
    }

    pub fn push_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.bytes.extend_from_slice(buf.format(i).as_bytes());
    }

    /// Width in bytes of the character starting with `lead`.
    fn char_width(&self, lead: u8) -> usize {
        match self.encoding {
            Encoding::Ascii8Bit => 1,
            Encoding::Utf8 => {
                if lead & 0x80 == 0x00 {
                    1
                } else if lead & 0xE0 == 0xC0 {
                    2
                } else if lead & 0xF0 == 0xE0 {
                    3
                } else if lead & 0xF8 == 0xF0 {
                    4
                } else {
                    // Stray continuation or invalid lead; advance one byte
                    // so scanning always terminates.
                    1
                }
            }
        }
    }

    /// Byte ranges of each character, scanned left to right. A truncated
    /// trailing sequence is clamped to the end of the buffer.
    pub fn char_ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut pos = 0usize;
        std::iter::from_fn(move || {
            if pos >= self.bytes.len() {
                return None;
            }
            let width = self.char_width(self.bytes[pos]);
            let end = (pos + width).min(self.bytes.len());
            let range = (pos, end);
            pos = end;
            Some(range)
        })
    }

    pub fn char_count(&self) -> usize {
        match self.encoding {
            Encoding::Ascii8Bit => self.bytes.len(),
            Encoding::Utf8 => self.char_ranges().count(),
        }
    }

    /// Byte range of the character at `index` (non-negative, unwrapped).
    pub fn char_range_at(&self, index: usize) -> Option<(usize, usize)> {
        self.char_ranges().nth(index)
    }

    /// Contiguous byte span covering characters `[begin, end)`. `end` is
    /// clamped to the character count by the caller; an empty span yields
    /// `(len, len)` positions at the tail.
    pub fn byte_span_of_chars(&self, begin: usize, end: usize) -> (usize, usize) {
        if begin >= end {
            let pos = self
                .char_range_at(begin)
                .map(|(lo, _)| lo)
                .unwrap_or(self.bytes.len());
            return (pos, pos);
        }
        let mut start_byte = self.bytes.len();
        let mut end_byte = self.bytes.len();
        for (i, (lo, hi)) in self.char_ranges().enumerate() {
            if i == begin {
                start_byte = lo;
            }
            if i < end {
                end_byte = hi;
            } else {
                break;
            }
        }
        (start_byte, end_byte)
    }

    /// First occurrence of `needle` at or after byte offset `from`.
    pub fn index_of(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() {
            return if from <= self.bytes.len() { Some(from) } else { None };
        }
        if from >= self.bytes.len() || self.bytes.len() - from < needle.len() {
            return None;
        }
        self.bytes[from..]
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|i| i + from)
    }

    /// Drops characters past the first `char_len` ones.
    pub fn truncate_chars(&mut self, char_len: usize) {
        let (_, end) = self.byte_span_of_chars(0, char_len);
        if char_len == 0 {
            self.bytes.clear();
        } else if end < self.bytes.len() {
            self.bytes.truncate(end);
        }
    }

    /// Reconstructs the code point from one character's bytes using the
    /// UTF-8 lead/continuation masks.
    pub fn code_point(char_bytes: &[u8]) -> u32 {
        match char_bytes.len() {
            1 => char_bytes[0] as u32,
            2 => {
                (((char_bytes[0] ^ 0xC0) as u32) << 6)
                    | ((char_bytes[1] ^ 0x80) as u32)
            }
            3 => {
                (((char_bytes[0] ^ 0xE0) as u32) << 12)
                    | (((char_bytes[1] ^ 0x80) as u32) << 6)
                    | ((char_bytes[2] ^ 0x80) as u32)
            }
            _ => {
                (((char_bytes[0] ^ 0xF0) as u32) << 18)
                    | (((char_bytes[1] ^ 0x80) as u32) << 12)
                    | (((char_bytes[2] ^ 0x80) as u32) << 6)
                    | ((char_bytes[3] ^ 0x80) as u32)
            }
        }
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str_lossy())
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str_lossy())
    }
}

impl From<&str> for StrBuf {
    fn from(value: &str) -> Self {
        StrBuf::from_str(value)
    }
}

impl From<String> for StrBuf {
    fn from(value: String) -> Self {
        StrBuf { bytes: value.into_bytes(), encoding: Encoding::Utf8 }
    }
}
