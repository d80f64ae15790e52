//! Character sources the parser reads from.
//!
//! The parser asks for one character at a time and treats `None` as end of
//! input. Anything that iterates over `char`s already qualifies, so
//! `str::chars()` can be handed to the parser directly. [`Utf8Bytes`] covers
//! raw byte input.
use core::{fmt, iter::FusedIterator};

/// Supplies characters one at a time.
///
/// Once `read` returns `None` the parser never calls it again.
pub trait CharSource {
    /// Returns the next character, or `None` at end of input.
    fn read(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn read(&mut self) -> Option<char> {
        self.next()
    }
}

/// Decodes UTF-8 bytes into characters.
///
/// Invalid sequences are not an error: each maximal invalid subsequence
/// becomes U+FFFD, the same policy as [`String::from_utf8_lossy`].
///
/// [`String::from_utf8_lossy`]: alloc::string::String::from_utf8_lossy
///
/// # Examples
///
/// ```
/// use jsontree::Utf8Bytes;
///
/// let chars: String = Utf8Bytes::new(b"a\xFFb").collect();
/// assert_eq!(chars, "a\u{FFFD}b");
/// ```
#[derive(Clone)]
pub struct Utf8Bytes<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8Bytes<'a> {
    /// Wraps a byte slice.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for Utf8Bytes<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.bytes.is_empty() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(self.bytes);
        self.bytes = &self.bytes[len..];
        Some(ch.unwrap_or('\u{FFFD}'))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bytes.len().div_ceil(4), Some(self.bytes.len()))
    }
}

impl FusedIterator for Utf8Bytes<'_> {}

impl fmt::Debug for Utf8Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use bstr::ByteSlice;
        f.debug_tuple("Utf8Bytes")
            .field(&self.bytes.as_bstr())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::{CharSource, Utf8Bytes};

    #[test]
    fn chars_are_a_source() {
        let mut source = "ab".chars();
        assert_eq!(source.read(), Some('a'));
        assert_eq!(source.read(), Some('b'));
        assert_eq!(source.read(), None);
    }

    #[test]
    fn decodes_multibyte() {
        let text = "é€😀";
        let decoded: String = Utf8Bytes::new(text.as_bytes()).collect();
        assert_eq!(decoded, text);
    }

    #[test]
    fn invalid_sequences_become_replacement() {
        let decoded: Vec<char> = Utf8Bytes::new(b"\xE2\x82x\xC0").collect();
        assert_eq!(decoded, ['\u{FFFD}', 'x', '\u{FFFD}']);
    }
}
