//! Utility modules for transaction decoding.

pub mod utf8;

pub use utf8::{scan_utf8, utf8_to_ascii, AsciiText, Utf8Error};
