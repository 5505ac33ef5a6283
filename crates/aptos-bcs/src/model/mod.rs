//! Data model types for Aptos signing requests.
//!
//! This module contains the decoded views produced by the codec:
//! - Account addresses
//! - Type tags
//! - Entry function payloads and classified transfer arguments
//! - Transactions and messages
//! - Builders (test and bench input construction)

pub mod address;
pub mod builder;
pub mod entry_function;
pub mod transaction;
pub mod type_tag;

pub use address::AccountAddress;
pub use builder::{raw_transaction_with_data, TransactionBuilder, TypeArg};
pub use entry_function::{
    CoinTransfer, EntryFunction, FunctionCall, KnownFunction, ModuleId, Transfer,
};
pub use transaction::{Footer, Payload, PayloadVariant, RawTransaction, Transaction, TxVariant};
pub use type_tag::{StructTag, TypeTagKind, TypeTagValue};
