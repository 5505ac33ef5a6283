//! Builder API for encoding signing requests.
//!
//! Produces the exact bytes a wallet would send for signing, prefix
//! included. Used to generate test and benchmark inputs.
//!
//! # Example
//!
//! ```rust
//! use aptos_bcs::model::{AccountAddress, TransactionBuilder};
//!
//! let bytes = TransactionBuilder::new(AccountAddress::new([0x78; 32]))
//!     .sequence_number(7)
//!     .aptos_account_transfer(AccountAddress::new([0x09; 32]), 1_000_000)
//!     .max_gas_amount(2_000)
//!     .gas_unit_price(100)
//!     .chain_id(1)
//!     .build();
//!
//! let tx = aptos_bcs::decode_transaction(&bytes).unwrap();
//! assert_eq!(tx.entry_function().unwrap().call.amount(), Some(1_000_000));
//! ```

use crate::codec::primitives::Writer;
use crate::limits::{PREFIX_RAW_TX_HASHED, PREFIX_RAW_TX_WITH_DATA_HASHED};
use crate::model::{AccountAddress, PayloadVariant, TypeTagKind};

/// A type argument to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArg {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    /// Non-generic struct tag.
    Struct {
        address: AccountAddress,
        module: String,
        name: String,
    },
}

impl TypeArg {
    /// `0x1::aptos_coin::AptosCoin`
    pub fn aptos_coin() -> Self {
        TypeArg::Struct {
            address: AccountAddress::ONE,
            module: "aptos_coin".to_string(),
            name: "AptosCoin".to_string(),
        }
    }

    fn kind(&self) -> TypeTagKind {
        match self {
            TypeArg::Bool => TypeTagKind::Bool,
            TypeArg::U8 => TypeTagKind::U8,
            TypeArg::U64 => TypeTagKind::U64,
            TypeArg::U128 => TypeTagKind::U128,
            TypeArg::Address => TypeTagKind::Address,
            TypeArg::Signer => TypeTagKind::Signer,
            TypeArg::Struct { .. } => TypeTagKind::Struct,
        }
    }

    fn encode(&self, writer: &mut Writer) {
        writer.write_uleb128(self.kind() as u32);
        if let TypeArg::Struct {
            address,
            module,
            name,
        } = self
        {
            writer.write_address(address);
            writer.write_str(module);
            writer.write_str(name);
            // no nested type arguments
            writer.write_uleb128(0);
        }
    }
}

#[derive(Debug, Clone)]
enum PayloadSpec {
    Script(Vec<u8>),
    EntryFunction {
        address: AccountAddress,
        module: String,
        function: String,
        type_args: Vec<TypeArg>,
        args: Vec<Vec<u8>>,
    },
    Multisig(Vec<u8>),
}

/// Builder for a RawTransaction signing request.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    sender: AccountAddress,
    sequence_number: u64,
    payload: PayloadSpec,
    max_gas_amount: u64,
    gas_unit_price: u64,
    expiration_timestamp_secs: u64,
    chain_id: u8,
}

impl TransactionBuilder {
    /// Creates a builder with an empty script payload and zeroed fields.
    pub fn new(sender: AccountAddress) -> Self {
        Self {
            sender,
            sequence_number: 0,
            payload: PayloadSpec::Script(Vec::new()),
            max_gas_amount: 0,
            gas_unit_price: 0,
            expiration_timestamp_secs: 0,
            chain_id: 1,
        }
    }

    pub fn sequence_number(mut self, value: u64) -> Self {
        self.sequence_number = value;
        self
    }

    pub fn max_gas_amount(mut self, value: u64) -> Self {
        self.max_gas_amount = value;
        self
    }

    pub fn gas_unit_price(mut self, value: u64) -> Self {
        self.gas_unit_price = value;
        self
    }

    pub fn expiration_timestamp_secs(mut self, value: u64) -> Self {
        self.expiration_timestamp_secs = value;
        self
    }

    pub fn chain_id(mut self, value: u8) -> Self {
        self.chain_id = value;
        self
    }

    // =========================================================================
    // Payloads
    // =========================================================================

    /// Sets an arbitrary entry function payload.
    ///
    /// Each element of `args` is the BCS encoding of one argument; it is
    /// length-prefixed on the wire.
    pub fn entry_function(
        mut self,
        address: AccountAddress,
        module: impl Into<String>,
        function: impl Into<String>,
        type_args: Vec<TypeArg>,
        args: Vec<Vec<u8>>,
    ) -> Self {
        self.payload = PayloadSpec::EntryFunction {
            address,
            module: module.into(),
            function: function.into(),
            type_args,
            args,
        };
        self
    }

    /// Sets a `0x1::aptos_account::transfer` payload.
    pub fn aptos_account_transfer(self, receiver: AccountAddress, amount: u64) -> Self {
        self.entry_function(
            AccountAddress::ONE,
            "aptos_account",
            "transfer",
            Vec::new(),
            transfer_args(receiver, amount),
        )
    }

    /// Sets a `0x1::coin::transfer<coin>` payload.
    pub fn coin_transfer(self, coin: TypeArg, receiver: AccountAddress, amount: u64) -> Self {
        self.entry_function(
            AccountAddress::ONE,
            "coin",
            "transfer",
            vec![coin],
            transfer_args(receiver, amount),
        )
    }

    /// Sets a `0x1::aptos_account::transfer_coins<coin>` payload.
    pub fn transfer_coins(self, coin: TypeArg, receiver: AccountAddress, amount: u64) -> Self {
        self.entry_function(
            AccountAddress::ONE,
            "aptos_account",
            "transfer_coins",
            vec![coin],
            transfer_args(receiver, amount),
        )
    }

    /// Sets a script payload with an opaque body.
    pub fn script(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.payload = PayloadSpec::Script(body.into());
        self
    }

    /// Sets a multisig payload with an opaque body.
    pub fn multisig(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.payload = PayloadSpec::Multisig(body.into());
        self
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Encodes the transaction without the signing prefix.
    pub fn build_body(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(256);
        self.encode_body(&mut writer);
        writer.into_bytes()
    }

    /// Encodes the full signing request, prefix included.
    pub fn build(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(256);
        writer.write_bytes(&PREFIX_RAW_TX_HASHED);
        self.encode_body(&mut writer);
        writer.into_bytes()
    }

    fn encode_body(&self, writer: &mut Writer) {
        writer.write_address(&self.sender);
        writer.write_u64(self.sequence_number);

        match &self.payload {
            PayloadSpec::Script(body) => {
                writer.write_uleb128(PayloadVariant::Script as u32);
                writer.write_bytes(body);
            }
            PayloadSpec::EntryFunction {
                address,
                module,
                function,
                type_args,
                args,
            } => {
                writer.write_uleb128(PayloadVariant::EntryFunction as u32);
                writer.write_address(address);
                writer.write_str(module);
                writer.write_str(function);
                writer.write_uleb128(type_args.len() as u32);
                for arg in type_args {
                    arg.encode(writer);
                }
                writer.write_uleb128(args.len() as u32);
                for arg in args {
                    writer.write_bytes_prefixed(arg);
                }
            }
            PayloadSpec::Multisig(body) => {
                writer.write_uleb128(PayloadVariant::Multisig as u32);
                writer.write_bytes(body);
            }
        }

        writer.write_u64(self.max_gas_amount);
        writer.write_u64(self.gas_unit_price);
        writer.write_u64(self.expiration_timestamp_secs);
        writer.write_byte(self.chain_id);
    }
}

fn transfer_args(receiver: AccountAddress, amount: u64) -> Vec<Vec<u8>> {
    vec![receiver.as_bytes().to_vec(), amount.to_le_bytes().to_vec()]
}

/// Encodes a multi-agent or fee-payer signing request around an opaque body.
pub fn raw_transaction_with_data(body: &[u8]) -> Vec<u8> {
    let mut writer = Writer::with_capacity(PREFIX_RAW_TX_WITH_DATA_HASHED.len() + body.len());
    writer.write_bytes(&PREFIX_RAW_TX_WITH_DATA_HASHED);
    writer.write_bytes(body);
    writer.into_bytes()
}
