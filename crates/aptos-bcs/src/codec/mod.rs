//! Binary decoding for Aptos signing requests.
//!
//! Decoding is bottom-up: [`primitives`] reads BCS scalars and sequences,
//! [`type_tag`] and [`entry_function`] interpret payloads, and
//! [`transaction`] ties them together behind the public entry points.

pub mod entry_function;
pub mod message;
pub mod primitives;
pub mod transaction;
pub mod type_tag;

pub use entry_function::{classify, decode_entry_function, KNOWN_FUNCTIONS};
pub use message::{classify_message, is_interrupted};
pub use primitives::{Reader, Writer};
pub use transaction::{
    decode_transaction, decode_transaction_with_options, decode_with_status, DecodeOptions,
};
pub use type_tag::{decode_struct_tag, decode_type_tag, decode_type_tag_value, read_type_tag_kind};
