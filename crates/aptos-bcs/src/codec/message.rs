//! Classification of inputs that are not transactions.

use crate::model::TxVariant;
use crate::util::utf8::scan_utf8;

/// Classifies a whole buffer as a plain-text or raw-bytes message.
///
/// Plain text is well-formed UTF-8 containing no ASCII control characters
/// other than tab, line feed, carriage return and NUL.
pub fn classify_message(bytes: &[u8]) -> TxVariant {
    if scan_utf8(bytes).is_ok() && bytes.iter().all(|b| is_printable(*b)) {
        TxVariant::PlainMessage
    } else {
        TxVariant::RawBytesMessage
    }
}

#[inline]
fn is_printable(byte: u8) -> bool {
    !byte.is_ascii_control() || matches!(byte, b'\t' | b'\n' | b'\r' | 0)
}

/// Returns true if text continues after a NUL byte.
///
/// Such a message would be cut short on screen while the full bytes get
/// signed.
pub fn is_interrupted(bytes: &[u8]) -> bool {
    match bytes.iter().position(|b| *b == 0) {
        Some(nul) => bytes[nul..].iter().any(|b| *b != 0),
        None => false,
    }
}
