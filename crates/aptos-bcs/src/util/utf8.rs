//! Permissive UTF-8 to ASCII reduction for on-device display.
//!
//! ASCII bytes are copied through unchanged. Each well-formed multi-byte
//! character is replaced by [`TEXT_PLACEHOLDER`]. Anything that is not
//! shortest-form UTF-8 (overlong encodings, surrogates, stray continuation
//! bytes, truncated sequences, code points above U+10FFFF, U+FFFE/U+FFFF)
//! is rejected outright.

use thiserror::Error;

use crate::limits::TEXT_PLACEHOLDER;

/// Error while reducing UTF-8 text to ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Utf8Error {
    #[error("malformed UTF-8 sequence at byte {offset}")]
    Malformed { offset: usize },

    #[error("output capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

/// Result of a successful reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiText {
    /// Number of bytes written to the output buffer.
    pub len: usize,
    /// Whether at least one multi-byte character was replaced.
    pub contains_multibyte: bool,
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Returns the encoded length of the character starting at `input[i]`.
fn char_len(input: &[u8], i: usize) -> Result<usize, Utf8Error> {
    let malformed = Utf8Error::Malformed { offset: i };
    let lead = input[i];
    let at = |k: usize| input.get(i + k).copied();

    if lead < 0x80 {
        return Ok(1);
    }

    if lead & 0xE0 == 0xC0 {
        // 110XXXXx 10xxxxxx; C0/C1 would be overlong
        let b1 = at(1).ok_or(malformed)?;
        if !is_continuation(b1) || lead & 0xFE == 0xC0 {
            return Err(malformed);
        }
        return Ok(2);
    }

    if lead & 0xF0 == 0xE0 {
        // 1110XXXX 10Xxxxxx 10xxxxxx
        let (b1, b2) = match (at(1), at(2)) {
            (Some(b1), Some(b2)) => (b1, b2),
            _ => return Err(malformed),
        };
        if !is_continuation(b1) || !is_continuation(b2) {
            return Err(malformed);
        }
        let overlong = lead == 0xE0 && b1 & 0xE0 == 0x80;
        let surrogate = lead == 0xED && b1 & 0xE0 == 0xA0;
        let non_character = lead == 0xEF && b1 == 0xBF && b2 & 0xFE == 0xBE;
        if overlong || surrogate || non_character {
            return Err(malformed);
        }
        return Ok(3);
    }

    if lead & 0xF8 == 0xF0 {
        // 11110XXX 10XXxxxx 10xxxxxx 10xxxxxx
        let (b1, b2, b3) = match (at(1), at(2), at(3)) {
            (Some(b1), Some(b2), Some(b3)) => (b1, b2, b3),
            _ => return Err(malformed),
        };
        if !is_continuation(b1) || !is_continuation(b2) || !is_continuation(b3) {
            return Err(malformed);
        }
        let overlong = lead == 0xF0 && b1 & 0xF0 == 0x80;
        let out_of_range = (lead == 0xF4 && b1 > 0x8F) || lead > 0xF4;
        if overlong || out_of_range {
            return Err(malformed);
        }
        return Ok(4);
    }

    Err(malformed)
}

/// Reduces `input` to ASCII into `out`.
///
/// Fails if the input is malformed or the reduced text does not fit `out`.
/// On failure the contents of `out` are unspecified.
pub fn utf8_to_ascii(input: &[u8], out: &mut [u8]) -> Result<AsciiText, Utf8Error> {
    let capacity = out.len();
    let mut len = 0;
    let mut contains_multibyte = false;
    let mut i = 0;

    while i < input.len() {
        let width = char_len(input, i)?;
        let ch = if width == 1 {
            input[i]
        } else {
            contains_multibyte = true;
            TEXT_PLACEHOLDER
        };
        let slot = out
            .get_mut(len)
            .ok_or(Utf8Error::CapacityExceeded { capacity })?;
        *slot = ch;
        len += 1;
        i += width;
    }

    Ok(AsciiText {
        len,
        contains_multibyte,
    })
}

/// Checks that `input` is well-formed under the same rules as
/// [`utf8_to_ascii`] without producing output.
///
/// Returns whether any multi-byte character was seen.
pub fn scan_utf8(input: &[u8]) -> Result<bool, Utf8Error> {
    let mut contains_multibyte = false;
    let mut i = 0;
    while i < input.len() {
        let width = char_len(input, i)?;
        contains_multibyte |= width > 1;
        i += width;
    }
    Ok(contains_multibyte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(input: &[u8]) -> Result<String, Utf8Error> {
        let mut out = [0u8; 64];
        let text = utf8_to_ascii(input, &mut out)?;
        Ok(String::from_utf8_lossy(&out[..text.len]).into_owned())
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(reduce(b"0x1::coin::transfer").unwrap(), "0x1::coin::transfer");
        assert_eq!(reduce(b"").unwrap(), "");
    }

    #[test]
    fn test_multibyte_replaced() {
        assert_eq!(reduce("caf\u{e9}".as_bytes()).unwrap(), "caf?");
        assert_eq!(reduce("\u{20ac}1".as_bytes()).unwrap(), "?1");
        assert_eq!(reduce("\u{1F600}!".as_bytes()).unwrap(), "?!");

        let mut out = [0u8; 8];
        let text = utf8_to_ascii("a\u{e9}".as_bytes(), &mut out).unwrap();
        assert!(text.contains_multibyte);
        let text = utf8_to_ascii(b"ab", &mut out).unwrap();
        assert!(!text.contains_multibyte);
    }

    #[test]
    fn test_rejects_malformed() {
        // Stray continuation byte
        assert_eq!(reduce(&[0x80]), Err(Utf8Error::Malformed { offset: 0 }));
        // Overlong two-byte encoding of '/'
        assert!(reduce(&[0xC0, 0xAF]).is_err());
        // Overlong three-byte encoding
        assert!(reduce(&[0xE0, 0x80, 0xAF]).is_err());
        // Surrogate U+D800
        assert!(reduce(&[0xED, 0xA0, 0x80]).is_err());
        // U+FFFE and U+FFFF
        assert!(reduce(&[0xEF, 0xBF, 0xBE]).is_err());
        assert!(reduce(&[0xEF, 0xBF, 0xBF]).is_err());
        // Overlong four-byte encoding
        assert!(reduce(&[0xF0, 0x80, 0x80, 0xAF]).is_err());
        // Above U+10FFFF
        assert!(reduce(&[0xF4, 0x90, 0x80, 0x80]).is_err());
        assert!(reduce(&[0xF5, 0x80, 0x80, 0x80]).is_err());
        // Truncated sequence
        assert_eq!(reduce(&[b'a', 0xE2, 0x82]), Err(Utf8Error::Malformed { offset: 1 }));
    }

    #[test]
    fn test_capacity() {
        let mut out = [0u8; 3];
        assert_eq!(
            utf8_to_ascii(b"abcd", &mut out),
            Err(Utf8Error::CapacityExceeded { capacity: 3 })
        );
        // Multi-byte characters count as one output byte
        let text = utf8_to_ascii("\u{e9}\u{e9}\u{e9}".as_bytes(), &mut out).unwrap();
        assert_eq!(text.len, 3);
    }

    #[test]
    fn test_scan() {
        assert_eq!(scan_utf8(b"Hello Ledger!"), Ok(false));
        assert_eq!(scan_utf8("h\u{e9}".as_bytes()), Ok(true));
        assert!(scan_utf8(&[0xFF]).is_err());
    }
}
