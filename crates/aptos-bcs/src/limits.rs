//! Wire constants and security limits for decoding.
//!
//! Every length read from untrusted input is checked against one of these
//! bounds before any bytes are consumed.

/// Maximum number of transport packets a signing request may span.
pub const MAX_TRANSACTION_PACKETS: usize = 2;

/// Maximum accepted input length in bytes (one packet carries up to 255 bytes).
pub const MAX_TRANSACTION_LEN: usize = MAX_TRANSACTION_PACKETS * 255;

/// Maximum length of a BCS sequence (bytes, strings, vectors).
pub const MAX_SEQUENCE_LENGTH: u32 = (1 << 31) - 1;

/// Maximum number of bytes in a ULEB128-encoded u32.
pub const MAX_UVARINT_U32_BYTES: usize = 5;

/// Account address size in bytes.
pub const ADDRESS_LEN: usize = 32;

/// Size of the hashed domain-separator prefix.
pub const TX_HASHED_PREFIX_LEN: usize = 32;

/// Size of the trailing footer:
/// max_gas_amount (8) + gas_unit_price (8) + expiration_timestamp_secs (8) + chain_id (1).
pub const TX_FOOTER_LEN: usize = 8 + 8 + 8 + 1;

/// Salt hashed into the RawTransaction prefix.
pub const RAW_TRANSACTION_SALT: &str = "APTOS::RawTransaction";

/// Salt hashed into the RawTransactionWithData prefix.
pub const RAW_TRANSACTION_WITH_DATA_SALT: &str = "APTOS::RawTransactionWithData";

/// SHA3-256 of [`RAW_TRANSACTION_SALT`].
pub const PREFIX_RAW_TX_HASHED: [u8; TX_HASHED_PREFIX_LEN] = [
    181, 233, 125, 176, 127, 160, 189, 14, 85, 152, 170, 54, 67, 169, 188, 111, 102, 147, 189,
    220, 26, 159, 236, 158, 103, 74, 70, 30, 170, 0, 177, 147,
];

/// SHA3-256 of [`RAW_TRANSACTION_WITH_DATA_SALT`].
pub const PREFIX_RAW_TX_WITH_DATA_HASHED: [u8; TX_HASHED_PREFIX_LEN] = [
    94, 250, 60, 79, 2, 248, 58, 15, 75, 45, 105, 252, 149, 198, 7, 204, 2, 130, 92, 196, 231,
    190, 83, 110, 240, 153, 45, 240, 80, 217, 230, 124,
];

/// Byte substituted for each multi-byte UTF-8 character when text is reduced to ASCII.
pub const TEXT_PLACEHOLDER: u8 = b'?';
