//! Decoded signing requests.
//!
//! A [`Transaction`] only exists after a successful decode. Variable-length
//! fields borrow from the input buffer and cannot outlive it.

use crate::model::{AccountAddress, EntryFunction};

/// Outer kind of a signing request, selected by its 32-byte prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxVariant {
    RawTransaction,
    RawTransactionWithData,
    /// Not a transaction; text that can be shown to the user.
    PlainMessage,
    /// Not a transaction; arbitrary bytes.
    RawBytesMessage,
}

/// Transaction payload kinds (wire values are ULEB128 variant indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PayloadVariant {
    Script = 0,
    EntryFunction = 2,
    Multisig = 3,
}

impl PayloadVariant {
    /// Creates a PayloadVariant from its wire representation.
    pub fn from_u32(v: u32) -> Option<PayloadVariant> {
        match v {
            0 => Some(PayloadVariant::Script),
            2 => Some(PayloadVariant::EntryFunction),
            3 => Some(PayloadVariant::Multisig),
            _ => None,
        }
    }
}

/// Transaction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload<'a> {
    /// Script payload; `body` is everything between the tag and the footer, unparsed.
    Script { body: &'a [u8] },
    EntryFunction(EntryFunction<'a>),
    /// Multisig payload; `body` is everything between the tag and the footer, unparsed.
    Multisig { body: &'a [u8] },
}

impl Payload<'_> {
    pub fn variant(&self) -> PayloadVariant {
        match self {
            Payload::Script { .. } => PayloadVariant::Script,
            Payload::EntryFunction(_) => PayloadVariant::EntryFunction,
            Payload::Multisig { .. } => PayloadVariant::Multisig,
        }
    }
}

/// Fixed-width fields stored at the end of a RawTransaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Footer {
    pub max_gas_amount: u64,
    pub gas_unit_price: u64,
    pub expiration_timestamp_secs: u64,
    pub chain_id: u8,
}

/// A fully decoded RawTransaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTransaction<'a> {
    pub sender: AccountAddress,
    pub sequence_number: u64,
    pub payload: Payload<'a>,
    pub max_gas_amount: u64,
    pub gas_unit_price: u64,
    pub expiration_timestamp_secs: u64,
    pub chain_id: u8,
}

impl<'a> RawTransaction<'a> {
    /// Maximum fee the sender can be charged, `None` on overflow.
    pub fn max_gas_fee(&self) -> Option<u64> {
        self.max_gas_amount.checked_mul(self.gas_unit_price)
    }

    pub fn footer(&self) -> Footer {
        Footer {
            max_gas_amount: self.max_gas_amount,
            gas_unit_price: self.gas_unit_price,
            expiration_timestamp_secs: self.expiration_timestamp_secs,
            chain_id: self.chain_id,
        }
    }

    pub fn entry_function(&self) -> Option<&EntryFunction<'a>> {
        match &self.payload {
            Payload::EntryFunction(f) => Some(f),
            _ => None,
        }
    }
}

/// A decoded signing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transaction<'a> {
    Raw(RawTransaction<'a>),
    /// Multi-agent or fee-payer transaction; `body` is everything after the prefix.
    RawWithData { body: &'a [u8] },
    PlainMessage(&'a [u8]),
    RawBytesMessage(&'a [u8]),
}

impl<'a> Transaction<'a> {
    pub fn variant(&self) -> TxVariant {
        match self {
            Transaction::Raw(_) => TxVariant::RawTransaction,
            Transaction::RawWithData { .. } => TxVariant::RawTransactionWithData,
            Transaction::PlainMessage(_) => TxVariant::PlainMessage,
            Transaction::RawBytesMessage(_) => TxVariant::RawBytesMessage,
        }
    }

    pub fn as_raw(&self) -> Option<&RawTransaction<'a>> {
        match self {
            Transaction::Raw(tx) => Some(tx),
            _ => None,
        }
    }

    pub fn entry_function(&self) -> Option<&EntryFunction<'a>> {
        self.as_raw().and_then(RawTransaction::entry_function)
    }
}
