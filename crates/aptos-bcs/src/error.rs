//! Error types for transaction decoding and signing policy checks.

use thiserror::Error;

use crate::model::{KnownFunction, TypeTagKind};

/// Error categories reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Input, sequence or destination length out of bounds
    Length,
    /// E002: Truncated input, malformed varint or unrecognized tag
    Structural,
    /// E003: A recognized function whose arguments do not have the exact expected shape
    ShapeMismatch,
    /// E004: Invalid UTF-8 in a text field
    Encoding,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Length => "E001",
            ErrorCode::Structural => "E002",
            ErrorCode::ShapeMismatch => "E003",
            ErrorCode::Encoding => "E004",
        }
    }
}

/// Error during binary decoding.
///
/// Any error means no field of the partially decoded transaction may be
/// displayed or signed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === E001: Length / capacity ===
    #[error("[E001] input length {len} exceeds maximum {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("[E001] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E001] {field} does not fit destination capacity {capacity}")]
    CapacityExceeded { field: &'static str, capacity: usize },

    #[error("[E001] input of maximum length {len} is not NUL-terminated")]
    UnterminatedInput { len: usize },

    #[error("[E001] footer at offset {footer_start} overlaps data ending at {position}")]
    FooterOverlap { footer_start: usize, position: usize },

    // === E002: Structural ===
    #[error("[E002] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("[E002] varint for {context} does not terminate within 32 bits")]
    VarintTooLong { context: &'static str },

    #[error("[E002] varint for {context} overflows u32")]
    VarintOverflow { context: &'static str },

    #[error("[E002] varint for {context} is not canonically encoded")]
    NonCanonicalVarint { context: &'static str },

    #[error("[E002] invalid bool value: {value} (expected 0x00 or 0x01)")]
    InvalidBool { value: u8 },

    #[error("[E002] invalid payload variant: {variant}")]
    InvalidPayloadVariant { variant: u32 },

    #[error("[E002] invalid type tag: {tag}")]
    InvalidTypeTag { tag: u32 },

    #[error("[E002] type tag {kind:?} cannot be decoded")]
    UnsupportedTypeTag { kind: TypeTagKind },

    // === E003: Shape mismatch ===
    #[error("[E003] {function:?} expects a {expected:?} type argument, found {found:?}")]
    UnexpectedTypeTag {
        function: KnownFunction,
        expected: TypeTagKind,
        found: TypeTagKind,
    },

    #[error("[E003] {function:?} expects {expected} type arguments, found {found}")]
    TypeArgCountMismatch {
        function: KnownFunction,
        expected: u32,
        found: u32,
    },

    #[error("[E003] {function:?} coin type expects no type arguments, found {found}")]
    StructTypeArgCountMismatch { function: KnownFunction, found: u32 },

    #[error("[E003] {function:?} expects {expected} arguments, found {found}")]
    ArgCountMismatch {
        function: KnownFunction,
        expected: u32,
        found: u32,
    },

    #[error("[E003] {function:?} argument {arg} must be {expected} bytes, found {found}")]
    ArgLengthMismatch {
        function: KnownFunction,
        arg: &'static str,
        expected: u32,
        found: u32,
    },

    #[error("[E003] payload ends at {position}, footer starts at {footer_start}")]
    PayloadLengthMismatch { footer_start: usize, position: usize },

    // === E004: Encoding ===
    #[error("[E004] invalid UTF-8 in {field} at byte {offset}")]
    InvalidUtf8 { field: &'static str, offset: usize },
}

impl DecodeError {
    /// Returns the error category for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InputTooLong { .. }
            | DecodeError::LengthExceedsLimit { .. }
            | DecodeError::CapacityExceeded { .. }
            | DecodeError::UnterminatedInput { .. }
            | DecodeError::FooterOverlap { .. } => ErrorCode::Length,
            DecodeError::UnexpectedTypeTag { .. }
            | DecodeError::TypeArgCountMismatch { .. }
            | DecodeError::StructTypeArgCountMismatch { .. }
            | DecodeError::ArgCountMismatch { .. }
            | DecodeError::ArgLengthMismatch { .. }
            | DecodeError::PayloadLengthMismatch { .. } => ErrorCode::ShapeMismatch,
            DecodeError::InvalidUtf8 { .. } => ErrorCode::Encoding,
            _ => ErrorCode::Structural,
        }
    }

    /// Returns the status reported to the host for this error.
    pub fn status(&self) -> ParseStatus {
        match self {
            DecodeError::InputTooLong { .. }
            | DecodeError::UnterminatedInput { .. }
            | DecodeError::FooterOverlap { .. }
            | DecodeError::PayloadLengthMismatch { .. } => ParseStatus::WrongLength,
            DecodeError::LengthExceedsLimit { .. } => ParseStatus::SequenceTooLong,
            DecodeError::CapacityExceeded { .. } => ParseStatus::CapacityExceeded,
            DecodeError::UnexpectedEof { .. } => ParseStatus::UnexpectedEof,
            DecodeError::VarintTooLong { .. }
            | DecodeError::VarintOverflow { .. }
            | DecodeError::NonCanonicalVarint { .. } => ParseStatus::MalformedVarint,
            DecodeError::InvalidBool { .. } => ParseStatus::InvalidBool,
            DecodeError::InvalidPayloadVariant { .. } => ParseStatus::UnknownPayloadVariant,
            DecodeError::InvalidTypeTag { .. } => ParseStatus::UnknownTypeTag,
            DecodeError::UnsupportedTypeTag { .. } => ParseStatus::UnsupportedTypeTag,
            DecodeError::UnexpectedTypeTag { .. } => ParseStatus::UnexpectedTypeTag,
            DecodeError::TypeArgCountMismatch { .. }
            | DecodeError::StructTypeArgCountMismatch { .. } => ParseStatus::TypeArgCountMismatch,
            DecodeError::ArgCountMismatch { .. } => ParseStatus::ArgCountMismatch,
            DecodeError::ArgLengthMismatch { .. } => ParseStatus::ArgLengthMismatch,
            DecodeError::InvalidUtf8 { .. } => ParseStatus::InvalidUtf8,
        }
    }
}

/// Parse outcome as reported to the host.
///
/// The numeric values are part of the device protocol and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum ParseStatus {
    Ok = 1,
    WrongLength = -2000,
    SequenceTooLong = -2001,
    CapacityExceeded = -2002,
    UnexpectedEof = -2003,
    MalformedVarint = -2004,
    InvalidBool = -2005,
    UnknownPayloadVariant = -2006,
    UnknownTypeTag = -2007,
    UnsupportedTypeTag = -2008,
    UnexpectedTypeTag = -2009,
    TypeArgCountMismatch = -2010,
    ArgCountMismatch = -2011,
    ArgLengthMismatch = -2012,
    InvalidUtf8 = -2013,
}

impl ParseStatus {
    /// Returns the wire value of this status.
    pub fn code(self) -> i16 {
        self as i16
    }

    /// Returns true for [`ParseStatus::Ok`].
    pub fn is_ok(self) -> bool {
        self == ParseStatus::Ok
    }
}

impl<T> From<&Result<T, DecodeError>> for ParseStatus {
    fn from(result: &Result<T, DecodeError>) -> Self {
        match result {
            Ok(_) => ParseStatus::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Error raised when a parsed transaction may not be signed under the current policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("blind signing must be enabled to sign {reason}")]
    BlindSigningDisabled { reason: &'static str },
}
