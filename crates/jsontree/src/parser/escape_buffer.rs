//! Accumulates the four hex digits of a `\uXXXX` escape.
//!
//! The result is a UTF-16 code unit, not a `char`: surrogate halves are
//! legal here and are paired up by the string production.

use crate::error::EscapeError;

/// Accumulates up to four hexadecimal digits into a UTF-16 code unit.
#[derive(Debug)]
pub(super) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    /// Creates a new, empty `UnicodeEscapeBuffer`.
    pub(super) fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Feeds a single ASCII hexadecimal digit (`0-9`, `A-F`, `a-f`).
    ///
    /// - Returns `Ok(None)` while fewer than four digits have been seen.
    /// - Returns `Ok(Some(unit))` on the fourth digit and resets the buffer.
    /// - Returns `Err` if `c` is not a hex digit.
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn feed(&mut self, c: char) -> Result<Option<u16>, EscapeError> {
        let digit = c.to_digit(16).ok_or(EscapeError::InvalidHexDigit(c))?;

        // Four digits always fit: the buffer resets on the fourth.
        self.acc = (self.acc << 4) | digit as u16;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.acc = 0;
        self.len = 0;
        Ok(Some(unit))
    }
}
