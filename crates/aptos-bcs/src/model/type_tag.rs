//! Move type tags.
//!
//! Only the fixed-width kinds carry a decodable value. `vector` and `struct`
//! tags are recognized by kind; nested generic type arguments are not
//! supported.

use std::fmt;

use crate::model::AccountAddress;

/// Type tag kinds (wire values are ULEB128 variant indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TypeTagKind {
    Bool = 0,
    U8 = 1,
    U64 = 2,
    U128 = 3,
    Address = 4,
    Signer = 5,
    Vector = 6,
    Struct = 7,
}

impl TypeTagKind {
    /// Creates a TypeTagKind from its wire representation.
    pub fn from_u32(v: u32) -> Option<TypeTagKind> {
        match v {
            0 => Some(TypeTagKind::Bool),
            1 => Some(TypeTagKind::U8),
            2 => Some(TypeTagKind::U64),
            3 => Some(TypeTagKind::U128),
            4 => Some(TypeTagKind::Address),
            5 => Some(TypeTagKind::Signer),
            6 => Some(TypeTagKind::Vector),
            7 => Some(TypeTagKind::Struct),
            _ => None,
        }
    }

    /// Returns the encoded width of a value of this kind, or `None` for
    /// recursive kinds.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            TypeTagKind::Bool | TypeTagKind::U8 => Some(1),
            TypeTagKind::U64 => Some(8),
            TypeTagKind::U128 => Some(16),
            TypeTagKind::Address | TypeTagKind::Signer => Some(32),
            TypeTagKind::Vector | TypeTagKind::Struct => None,
        }
    }
}

/// A decoded fixed-width type tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTagValue {
    Bool(bool),
    U8(u8),
    U64(u64),
    U128(u128),
    Address(AccountAddress),
    Signer(AccountAddress),
}

impl TypeTagValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> TypeTagKind {
        match self {
            TypeTagValue::Bool(_) => TypeTagKind::Bool,
            TypeTagValue::U8(_) => TypeTagKind::U8,
            TypeTagValue::U64(_) => TypeTagKind::U64,
            TypeTagValue::U128(_) => TypeTagKind::U128,
            TypeTagValue::Address(_) => TypeTagKind::Address,
            TypeTagValue::Signer(_) => TypeTagKind::Signer,
        }
    }
}

/// A non-generic struct type tag, e.g. `0x1::aptos_coin::AptosCoin`.
///
/// Module and struct names borrow from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructTag<'a> {
    pub address: AccountAddress,
    pub module: &'a [u8],
    pub name: &'a [u8],
}

impl StructTag<'_> {
    /// Returns true for the native coin type `0x1::aptos_coin::AptosCoin`.
    pub fn is_aptos_coin(&self) -> bool {
        self.address == AccountAddress::ONE
            && self.module == b"aptos_coin"
            && self.name == b"AptosCoin"
    }
}

impl fmt::Display for StructTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.address.to_short_string(),
            self.module.escape_ascii(),
            self.name.escape_ascii()
        )
    }
}
