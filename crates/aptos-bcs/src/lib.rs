//! Aptos BCS signing request decoder.
//!
//! This crate decodes the byte strings a wallet sends to a signing device,
//! validates them against strict shape rules and classifies a small set of
//! well-known transfers so their effect can be shown before anything is
//! signed.
//!
//! # Overview
//!
//! A signing request is one of:
//! - **RawTransaction**: fully decoded; entry functions in the allow-list
//!   carry their receiver, amount and coin type
//! - **RawTransactionWithData**: recognized by prefix, body kept opaque
//! - **PlainMessage** / **RawBytesMessage**: any input without a transaction
//!   prefix, classified as text or bytes
//!
//! # Quick Start
//!
//! ```rust
//! use aptos_bcs::{decode_transaction, AccountAddress, TransactionBuilder, TypeArg};
//!
//! let bytes = TransactionBuilder::new(AccountAddress::new([0x78; 32]))
//!     .coin_transfer(TypeArg::aptos_coin(), AccountAddress::new([0x09; 32]), 42)
//!     .max_gas_amount(20_000)
//!     .gas_unit_price(100)
//!     .build();
//!
//! let tx = decode_transaction(&bytes).unwrap();
//! let call = &tx.entry_function().unwrap().call;
//! assert_eq!(call.amount(), Some(42));
//! assert!(call.coin_type().unwrap().is_aptos_coin());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Decoded types (Transaction, EntryFunction, AccountAddress)
//! - [`codec`]: Binary decoding and the matching encoder
//! - [`validate`]: Blind signing policy
//! - [`error`]: Error types and host status codes
//! - [`limits`]: Wire constants and bounds
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Every length is bounds-checked before bytes are consumed
//! - Varints must be canonical and fit in 32 bits
//! - A failed read never advances the cursor
//! - Recognized functions must match their expected shape exactly, and
//!   their payload must end where the footer begins
//! - Decoded views borrow the input buffer and never outlive it

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_transaction, decode_transaction_with_options, decode_with_status, DecodeOptions,
};
pub use error::{DecodeError, ErrorCode, ParseStatus, PolicyError};
pub use model::{
    AccountAddress, CoinTransfer, EntryFunction, Footer, FunctionCall, KnownFunction, ModuleId,
    Payload, PayloadVariant, RawTransaction, StructTag, Transaction, TransactionBuilder, Transfer,
    TxVariant, TypeArg, TypeTagKind, TypeTagValue,
};
pub use validate::{requires_blind_signing, validate_for_signing, SigningPolicy};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
