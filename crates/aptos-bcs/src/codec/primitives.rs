//! Primitive encoding/decoding for the BCS binary format.
//!
//! Implements fixed-width little-endian scalars, ULEB128 varints and
//! length-prefixed byte sequences.

use crate::error::DecodeError;
use crate::limits::{ADDRESS_LEN, MAX_SEQUENCE_LENGTH, MAX_UVARINT_U32_BYTES};
use crate::model::AccountAddress;
use crate::util::utf8::{utf8_to_ascii, Utf8Error};

// =============================================================================
// DECODING
// =============================================================================

/// Bounded cursor over untrusted input.
///
/// Wraps a byte slice and provides methods for reading primitives with
/// bounds checking. Every read either succeeds completely or fails and
/// leaves the position exactly where it was.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a reader over `data` starting at `pos`.
    pub fn at(data: &'a [u8], pos: usize, context: &'static str) -> Result<Self, DecodeError> {
        if pos > data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        Ok(Self { data, pos })
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the underlying data.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the total length of the underlying data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Moves the position back to the start of the data.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Runs `f`, restoring the position if it fails.
    pub(crate) fn atomically<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        let start = self.pos;
        let result = f(self);
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEof { context })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes without copying.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or(DecodeError::UnexpectedEof { context })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Reads exactly N bytes into an owned array.
    #[inline]
    pub fn read_array<const N: usize>(
        &mut self,
        context: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads exactly `out.len()` bytes into `out`.
    pub fn read_fixed_bytes(
        &mut self,
        out: &mut [u8],
        context: &'static str,
    ) -> Result<(), DecodeError> {
        out.copy_from_slice(self.read_bytes(out.len(), context)?);
        Ok(())
    }

    #[inline]
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        self.read_byte(context)
    }

    #[inline]
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_u128(&mut self, context: &'static str) -> Result<u128, DecodeError> {
        Ok(u128::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, DecodeError> {
        Ok(i8::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_i128(&mut self, context: &'static str) -> Result<i128, DecodeError> {
        Ok(i128::from_le_bytes(self.read_array(context)?))
    }

    /// Reads a bool encoded as exactly 0x00 or 0x01.
    pub fn read_bool(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        self.atomically(|r| match r.read_byte(context)? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            value => Err(DecodeError::InvalidBool { value }),
        })
    }

    /// Reads the tag of an `Option`: `true` if a value follows.
    ///
    /// The tag has the same encoding as a bool.
    #[inline]
    pub fn read_option_tag(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        self.read_bool(context)
    }

    /// Reads a 32-byte account address.
    #[inline]
    pub fn read_address(&mut self, context: &'static str) -> Result<AccountAddress, DecodeError> {
        Ok(AccountAddress(self.read_array::<ADDRESS_LEN>(context)?))
    }

    /// Reads an unsigned ULEB128 varint that must fit in a u32.
    ///
    /// Rejects encodings longer than five bytes, values above `u32::MAX`,
    /// and multi-byte encodings whose last byte is zero.
    pub fn read_uleb128_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        self.atomically(|r| {
            let mut value: u64 = 0;
            for i in 0..MAX_UVARINT_U32_BYTES {
                let byte = r.read_byte(context)?;
                let digit = (byte & 0x7F) as u64;
                let shift = 7 * i;
                value |= digit << shift;
                if value > u32::MAX as u64 {
                    return Err(DecodeError::VarintOverflow { context });
                }
                if byte & 0x80 == 0 {
                    if shift > 0 && digit == 0 {
                        return Err(DecodeError::NonCanonicalVarint { context });
                    }
                    return Ok(value as u32);
                }
            }
            Err(DecodeError::VarintTooLong { context })
        })
    }

    /// Reads an enum variant index.
    #[inline]
    pub fn read_variant_index(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        self.read_uleb128_u32(context)
    }

    /// Reads a sequence length bounded by [`MAX_SEQUENCE_LENGTH`].
    pub fn read_length(&mut self, field: &'static str) -> Result<usize, DecodeError> {
        self.atomically(|r| {
            let len = r.read_uleb128_u32(field)?;
            if len > MAX_SEQUENCE_LENGTH {
                return Err(DecodeError::LengthExceedsLimit {
                    field,
                    len: len as usize,
                    max: MAX_SEQUENCE_LENGTH as usize,
                });
            }
            Ok(len as usize)
        })
    }

    /// Reads a length-prefixed byte sequence without copying.
    pub fn read_bytes_prefixed(&mut self, field: &'static str) -> Result<&'a [u8], DecodeError> {
        self.atomically(|r| {
            let len = r.read_length(field)?;
            r.read_bytes(len, field)
        })
    }

    /// Reads a length-prefixed byte sequence into `out`, returning the number
    /// of bytes copied.
    pub fn read_bytes_prefixed_into(
        &mut self,
        out: &mut [u8],
        field: &'static str,
    ) -> Result<usize, DecodeError> {
        self.atomically(|r| {
            let len = r.read_length(field)?;
            if len > out.len() {
                return Err(DecodeError::CapacityExceeded {
                    field,
                    capacity: out.len(),
                });
            }
            out[..len].copy_from_slice(r.read_bytes(len, field)?);
            Ok(len)
        })
    }

    /// Reads a length-prefixed string and reduces it to ASCII in `out`.
    ///
    /// Multi-byte characters become a placeholder. The position only advances
    /// once the whole string has been validated and fits `out`.
    pub fn read_text<'o>(
        &mut self,
        out: &'o mut [u8],
        field: &'static str,
    ) -> Result<&'o str, DecodeError> {
        let start = self.pos;
        let bytes = self.read_bytes_prefixed(field)?;
        let text = match utf8_to_ascii(bytes, out) {
            Ok(text) => text,
            Err(e) => {
                self.pos = start;
                return Err(match e {
                    Utf8Error::Malformed { offset } => DecodeError::InvalidUtf8 { field, offset },
                    Utf8Error::CapacityExceeded { capacity } => {
                        DecodeError::CapacityExceeded { field, capacity }
                    }
                });
            }
        };
        std::str::from_utf8(&out[..text.len]).map_err(|e| {
            self.pos = start;
            DecodeError::InvalidUtf8 {
                field,
                offset: e.valid_up_to(),
            }
        })
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u128(&mut self, value: u128) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_address(&mut self, address: &AccountAddress) {
        self.buf.extend_from_slice(address.as_bytes());
    }

    /// Writes an unsigned varint (canonical ULEB128).
    #[inline]
    pub fn write_uleb128(&mut self, mut value: u32) {
        let mut buf = [0u8; MAX_UVARINT_U32_BYTES];
        let mut len = 0;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.buf.extend_from_slice(&buf[..len]);
    }

    /// Writes a length-prefixed byte sequence.
    ///
    /// `bytes` must not be longer than [`MAX_SEQUENCE_LENGTH`].
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.len() <= MAX_SEQUENCE_LENGTH as usize);
        self.write_uleb128(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a length-prefixed string.
    pub fn write_str(&mut self, s: &str) {
        self.write_bytes_prefixed(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_read_u8() {
        let mut reader = Reader::new(&[0xff]);
        assert_eq!(reader.read_u8("test").unwrap(), 255);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_scalar_boundaries() {
        let mut writer = Writer::new();
        writer.write_u16(u16::MAX);
        writer.write_u32(0);
        writer.write_u64(u64::MAX);
        writer.write_u128(u128::MAX);
        writer.write_u128(0);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_u16("test").unwrap(), u16::MAX);
        assert_eq!(reader.read_u32("test").unwrap(), 0);
        assert_eq!(reader.read_u64("test").unwrap(), u64::MAX);
        assert_eq!(reader.read_u128("test").unwrap(), u128::MAX);
        assert_eq!(reader.read_u128("test").unwrap(), 0);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_little_endian() {
        let mut reader = Reader::new(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(reader.read_u32("test").unwrap(), 0x0403_0201);
    }

    #[test]
    fn test_read_bool() {
        let mut reader = Reader::new(&[0x00, 0x01, 0x02]);
        assert!(!reader.read_bool("test").unwrap());
        assert!(reader.read_bool("test").unwrap());
        assert_eq!(
            reader.read_bool("test"),
            Err(DecodeError::InvalidBool { value: 2 })
        );
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_uleb128_known_value() {
        let mut reader = Reader::new(&[0xcd, 0xea, 0xec, 0x31]);
        assert_eq!(reader.read_uleb128_u32("test").unwrap(), 104_543_565);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_uleb128_max() {
        let mut reader = Reader::new(&[0xff, 0xff, 0xff, 0xff, 0x0f]);
        assert_eq!(reader.read_uleb128_u32("test").unwrap(), u32::MAX);
    }

    #[test]
    fn test_uleb128_overflow() {
        let mut reader = Reader::new(&[0xff, 0xff, 0xff, 0xff, 0x1f]);
        assert_eq!(
            reader.read_uleb128_u32("test"),
            Err(DecodeError::VarintOverflow { context: "test" })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_uleb128_too_long() {
        let mut reader = Reader::new(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]);
        assert_eq!(
            reader.read_uleb128_u32("test"),
            Err(DecodeError::VarintTooLong { context: "test" })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_uleb128_non_canonical() {
        let mut reader = Reader::new(&[0x80, 0x00]);
        assert_eq!(
            reader.read_uleb128_u32("test"),
            Err(DecodeError::NonCanonicalVarint { context: "test" })
        );
        assert_eq!(reader.position(), 0);

        let mut reader = Reader::new(&[0x81, 0x80, 0x00]);
        assert!(matches!(
            reader.read_uleb128_u32("test"),
            Err(DecodeError::NonCanonicalVarint { .. })
        ));

        // A single zero byte is the canonical encoding of 0
        let mut reader = Reader::new(&[0x00]);
        assert_eq!(reader.read_uleb128_u32("test").unwrap(), 0);
    }

    #[test]
    fn test_uleb128_truncated() {
        let mut reader = Reader::new(&[0x80, 0x80]);
        assert_eq!(
            reader.read_uleb128_u32("test"),
            Err(DecodeError::UnexpectedEof { context: "test" })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_length_limit() {
        // 2^31 does not fit the sequence bound but is a valid u32
        let mut writer = Writer::new();
        writer.write_uleb128(1 << 31);
        let mut reader = Reader::new(writer.as_bytes());
        assert!(matches!(
            reader.read_length("name"),
            Err(DecodeError::LengthExceedsLimit { field: "name", .. })
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_bytes_prefixed_view() {
        let data = [3, b'a', b'b', b'c', 0xff];
        let mut reader = Reader::new(&data);
        let view = reader.read_bytes_prefixed("test").unwrap();
        assert_eq!(view, b"abc");
        assert!(std::ptr::eq(view.as_ptr(), data[1..].as_ptr()));
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_bytes_prefixed_truncated_keeps_position() {
        let data = [5, b'a', b'b'];
        let mut reader = Reader::new(&data);
        assert!(matches!(
            reader.read_bytes_prefixed("test"),
            Err(DecodeError::UnexpectedEof { .. })
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_bytes_prefixed_into() {
        let raw = [6, 0x41, 0x70, 0x74, 0x6f, 0x73, 0x41, 0x70, 0x74, 0x6f, 0x73];
        let mut reader = Reader::new(&raw);
        let mut out = [0u8; 10];
        let len = reader.read_bytes_prefixed_into(&mut out, "test").unwrap();
        assert_eq!(&out[..len], &[0x41, 0x70, 0x74, 0x6f, 0x73, 0x41]);

        let mut reader = Reader::new(&raw);
        let mut small = [0u8; 4];
        assert_eq!(
            reader.read_bytes_prefixed_into(&mut small, "test"),
            Err(DecodeError::CapacityExceeded {
                field: "test",
                capacity: 4
            })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_text() {
        let raw = b"\x130x1::coin::transfer";
        let mut reader = Reader::new(raw);
        let mut out = [0u8; 32];
        assert_eq!(reader.read_text(&mut out, "test").unwrap(), "0x1::coin::transfer");
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_text_placeholder() {
        let mut writer = Writer::new();
        writer.write_str("pr\u{e9}t");
        let mut reader = Reader::new(writer.as_bytes());
        let mut out = [0u8; 8];
        assert_eq!(reader.read_text(&mut out, "test").unwrap(), "pr?t");
    }

    #[test]
    fn test_read_text_failures_keep_position() {
        let raw = [2, 0xC0, 0xAF];
        let mut reader = Reader::new(&raw);
        let mut out = [0u8; 8];
        assert_eq!(
            reader.read_text(&mut out, "test"),
            Err(DecodeError::InvalidUtf8 {
                field: "test",
                offset: 0
            })
        );
        assert_eq!(reader.position(), 0);

        let raw = b"\x05hello";
        let mut reader = Reader::new(raw);
        let mut small = [0u8; 4];
        assert!(matches!(
            reader.read_text(&mut small, "test"),
            Err(DecodeError::CapacityExceeded { .. })
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let result = reader.read_bytes(10, "test");
        assert!(matches!(result, Err(DecodeError::UnexpectedEof { .. })));
        assert_eq!(reader.position(), 0);
        assert!(reader.read_u64("test").is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_fixed_bytes() {
        let data = [0xaa, 0xbb, 0xcc];
        let mut reader = Reader::new(&data);
        let mut out = [0u8; 2];
        reader.read_fixed_bytes(&mut out, "test").unwrap();
        assert_eq!(out, [0xaa, 0xbb]);
        assert_eq!(reader.position(), 2);

        let mut too_long = [0u8; 2];
        assert_eq!(
            reader.read_fixed_bytes(&mut too_long, "test"),
            Err(DecodeError::UnexpectedEof { context: "test" })
        );
        assert_eq!(reader.position(), 2);
        assert_eq!(too_long, [0, 0]);
    }

    #[test]
    fn test_signed_scalars() {
        let mut reader = Reader::new(&[0xff, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!(reader.read_i8("test").unwrap(), -1);
        assert_eq!(reader.read_i16("test").unwrap(), -2);
        assert_eq!(reader.read_i32("test").unwrap(), i32::MIN);
        assert!(reader.is_empty());

        let mut reader = Reader::new(&[0xff; 7]);
        assert!(reader.read_i64("test").is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_option_tag() {
        let mut reader = Reader::new(&[0x00, 0x01, 0x02]);
        assert!(!reader.read_option_tag("test").unwrap());
        assert!(reader.read_option_tag("test").unwrap());
        assert_eq!(
            reader.read_option_tag("test"),
            Err(DecodeError::InvalidBool { value: 2 })
        );
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_rewind() {
        let data = [1, 2, 3];
        let mut reader = Reader::at(&data, 2, "test").unwrap();
        reader.rewind();
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.remaining(), &data);
    }

    #[test]
    fn test_reader_at() {
        let data = [1, 2, 3];
        let mut reader = Reader::at(&data, 2, "test").unwrap();
        assert_eq!(reader.read_u8("test").unwrap(), 3);
        assert!(Reader::at(&data, 3, "test").is_ok());
        assert!(Reader::at(&data, 4, "test").is_err());
    }

    proptest! {
        #[test]
        fn prop_u64_roundtrip(v in any::<u64>()) {
            let mut writer = Writer::new();
            writer.write_u64(v);
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_u64("test").unwrap(), v);
        }

        #[test]
        fn prop_u128_roundtrip(v in any::<u128>()) {
            let mut writer = Writer::new();
            writer.write_u128(v);
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_u128("test").unwrap(), v);
        }

        #[test]
        fn prop_signed_roundtrip(
            a in any::<i8>(),
            b in any::<i16>(),
            c in any::<i32>(),
            d in any::<i64>(),
            e in any::<i128>(),
        ) {
            let mut writer = Writer::new();
            writer.write_bytes(&a.to_le_bytes());
            writer.write_bytes(&b.to_le_bytes());
            writer.write_bytes(&c.to_le_bytes());
            writer.write_bytes(&d.to_le_bytes());
            writer.write_bytes(&e.to_le_bytes());
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_i8("test").unwrap(), a);
            prop_assert_eq!(reader.read_i16("test").unwrap(), b);
            prop_assert_eq!(reader.read_i32("test").unwrap(), c);
            prop_assert_eq!(reader.read_i64("test").unwrap(), d);
            prop_assert_eq!(reader.read_i128("test").unwrap(), e);
            prop_assert!(reader.is_empty());
        }

        #[test]
        fn prop_signed_matches_unsigned_bits(v in any::<u64>()) {
            let bytes = v.to_le_bytes();
            let mut reader = Reader::new(&bytes);
            prop_assert_eq!(reader.read_i64("test").unwrap() as u64, v);
        }

        #[test]
        fn prop_option_tag_roundtrip(present in any::<bool>()) {
            let mut writer = Writer::new();
            writer.write_bool(present);
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_option_tag("test").unwrap(), present);
        }

        #[test]
        fn prop_uleb128_roundtrip(v in any::<u32>()) {
            let mut writer = Writer::new();
            writer.write_uleb128(v);
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_uleb128_u32("test").unwrap(), v);
            prop_assert!(reader.is_empty());
        }

        #[test]
        fn prop_uleb128_truncated_fails(v in 128u32..) {
            let mut writer = Writer::new();
            writer.write_uleb128(v);
            let bytes = writer.as_bytes();
            let mut reader = Reader::new(&bytes[..bytes.len() - 1]);
            prop_assert!(reader.read_uleb128_u32("test").is_err());
            prop_assert_eq!(reader.position(), 0);
        }

        #[test]
        fn prop_failed_read_never_moves(data in proptest::collection::vec(any::<u8>(), 0..16)) {
            let mut reader = Reader::new(&data);
            let before = reader.position();
            if reader.read_bytes_prefixed("test").is_err() {
                prop_assert_eq!(reader.position(), before);
            }
        }
    }
}
