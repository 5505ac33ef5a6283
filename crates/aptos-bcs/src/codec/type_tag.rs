//! Type tag decoding.
//!
//! Only fixed-width kinds carry a decodable value. A `vector` or `struct`
//! kind is read as a tag and then refused, so nested type arguments are never
//! misread as something else.

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::model::{KnownFunction, StructTag, TypeTagKind, TypeTagValue};

/// Reads a type tag kind.
pub fn read_type_tag_kind(reader: &mut Reader<'_>) -> Result<TypeTagKind, DecodeError> {
    reader.atomically(|r| {
        let tag = r.read_variant_index("type tag")?;
        TypeTagKind::from_u32(tag).ok_or(DecodeError::InvalidTypeTag { tag })
    })
}

/// Decodes one value of a previously read kind.
///
/// The value's bytes are taken as one fixed-width slice, so a short input
/// fails before any field is interpreted.
pub fn decode_type_tag_value(
    reader: &mut Reader<'_>,
    kind: TypeTagKind,
) -> Result<TypeTagValue, DecodeError> {
    let width = kind
        .fixed_width()
        .ok_or(DecodeError::UnsupportedTypeTag { kind })?;
    reader.atomically(|r| {
        let mut value = Reader::new(r.read_bytes(width, "type tag value")?);
        match kind {
            TypeTagKind::Bool => Ok(TypeTagValue::Bool(value.read_bool("bool value")?)),
            TypeTagKind::U8 => Ok(TypeTagValue::U8(value.read_u8("u8 value")?)),
            TypeTagKind::U64 => Ok(TypeTagValue::U64(value.read_u64("u64 value")?)),
            TypeTagKind::U128 => Ok(TypeTagValue::U128(value.read_u128("u128 value")?)),
            TypeTagKind::Address => {
                Ok(TypeTagValue::Address(value.read_address("address value")?))
            }
            TypeTagKind::Signer => Ok(TypeTagValue::Signer(value.read_address("signer value")?)),
            TypeTagKind::Vector | TypeTagKind::Struct => {
                Err(DecodeError::UnsupportedTypeTag { kind })
            }
        }
    })
}

/// Reads a tag kind followed by its value.
pub fn decode_type_tag(reader: &mut Reader<'_>) -> Result<TypeTagValue, DecodeError> {
    reader.atomically(|r| {
        let kind = read_type_tag_kind(r)?;
        decode_type_tag_value(r, kind)
    })
}

/// Decodes the body of a struct tag whose kind byte was already consumed.
///
/// The struct must be non-generic; any type arguments are a shape mismatch
/// for `function`.
pub fn decode_struct_tag<'a>(
    reader: &mut Reader<'a>,
    function: KnownFunction,
) -> Result<StructTag<'a>, DecodeError> {
    let address = reader.read_address("struct address")?;
    let module = reader.read_bytes_prefixed("struct module name")?;
    let name = reader.read_bytes_prefixed("struct name")?;
    let found = reader.read_uleb128_u32("struct type argument count")?;
    if found != 0 {
        return Err(DecodeError::StructTypeArgCountMismatch { function, found });
    }
    Ok(StructTag {
        address,
        module,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::primitives::Writer;
    use crate::model::AccountAddress;

    #[test]
    fn test_fixed_width_values() {
        let mut writer = Writer::new();
        writer.write_uleb128(TypeTagKind::Bool as u32);
        writer.write_bool(true);
        writer.write_uleb128(TypeTagKind::U64 as u32);
        writer.write_u64(42);
        writer.write_uleb128(TypeTagKind::U128 as u32);
        writer.write_u128(u128::MAX);
        writer.write_uleb128(TypeTagKind::Signer as u32);
        writer.write_address(&AccountAddress::ONE);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(decode_type_tag(&mut reader).unwrap(), TypeTagValue::Bool(true));
        assert_eq!(decode_type_tag(&mut reader).unwrap(), TypeTagValue::U64(42));
        assert_eq!(decode_type_tag(&mut reader).unwrap(), TypeTagValue::U128(u128::MAX));
        assert_eq!(
            decode_type_tag(&mut reader).unwrap(),
            TypeTagValue::Signer(AccountAddress::ONE)
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn test_value_width_and_kind() {
        let data = [0x01u8; 40];
        for tag in 0..6 {
            let kind = TypeTagKind::from_u32(tag).unwrap();
            let mut reader = Reader::new(&data);
            let value = decode_type_tag_value(&mut reader, kind).unwrap();
            assert_eq!(value.kind(), kind);
            assert_eq!(Some(reader.position()), kind.fixed_width());
        }
    }

    #[test]
    fn test_short_value_keeps_position() {
        let data = [0u8; 15];
        let mut reader = Reader::new(&data);
        assert_eq!(
            decode_type_tag_value(&mut reader, TypeTagKind::U128),
            Err(DecodeError::UnexpectedEof { context: "type tag value" })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_recursive_kinds_refused() {
        for kind in [TypeTagKind::Vector, TypeTagKind::Struct] {
            let data = [kind as u8, 0x01, 0x02];
            let mut reader = Reader::new(&data);
            assert_eq!(
                decode_type_tag(&mut reader),
                Err(DecodeError::UnsupportedTypeTag { kind })
            );
            assert_eq!(reader.position(), 0);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let mut reader = Reader::new(&[0x08]);
        assert_eq!(
            read_type_tag_kind(&mut reader),
            Err(DecodeError::InvalidTypeTag { tag: 8 })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_invalid_bool_value() {
        let mut reader = Reader::new(&[0x00, 0x02]);
        assert_eq!(
            decode_type_tag(&mut reader),
            Err(DecodeError::InvalidBool { value: 2 })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_struct_tag() {
        let mut writer = Writer::new();
        writer.write_address(&AccountAddress::ONE);
        writer.write_str("aptos_coin");
        writer.write_str("AptosCoin");
        writer.write_uleb128(0);

        let mut reader = Reader::new(writer.as_bytes());
        let tag = decode_struct_tag(&mut reader, KnownFunction::CoinTransfer).unwrap();
        assert!(tag.is_aptos_coin());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_generic_struct_tag_rejected() {
        let mut writer = Writer::new();
        writer.write_address(&AccountAddress::ONE);
        writer.write_str("coin");
        writer.write_str("Coin");
        writer.write_uleb128(1);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(
            decode_struct_tag(&mut reader, KnownFunction::CoinTransfer),
            Err(DecodeError::StructTypeArgCountMismatch {
                function: KnownFunction::CoinTransfer,
                found: 1
            })
        );
    }
}
