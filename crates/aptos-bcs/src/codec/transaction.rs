//! Signing request decoding.
//!
//! The first 32 bytes select the request kind:
//!
//! ```text
//! SHA3-256("APTOS::RawTransaction")         RawTransaction
//! SHA3-256("APTOS::RawTransactionWithData") RawTransactionWithData (body kept opaque)
//! anything else                             message over the whole buffer
//! ```
//!
//! A RawTransaction is laid out as:
//!
//! ```text
//! sender: [u8; 32] | sequence_number: u64 | payload | footer (25 bytes)
//! ```
//!
//! The footer has a fixed width and is read with its own cursor at
//! `len - 25`, since the payload length is not known up front. For the
//! classified transfer functions the payload must end exactly where the
//! footer starts.

use tracing::{debug, trace};

use crate::codec::entry_function::decode_entry_function;
use crate::codec::message::classify_message;
use crate::codec::primitives::Reader;
use crate::error::{DecodeError, ParseStatus};
use crate::limits::{
    MAX_TRANSACTION_LEN, PREFIX_RAW_TX_HASHED, PREFIX_RAW_TX_WITH_DATA_HASHED,
    TX_FOOTER_LEN, TX_HASHED_PREFIX_LEN,
};
use crate::model::{
    Footer, KnownFunction, Payload, PayloadVariant, RawTransaction, Transaction, TxVariant,
};

/// Decoding options.
///
/// Passed explicitly to every decode; the decoder holds no global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum accepted input length in bytes.
    pub max_transaction_len: usize,
    /// Require the whole module address to be `0x1` when classifying
    /// functions, instead of only its last byte.
    pub require_framework_address: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_transaction_len: MAX_TRANSACTION_LEN,
            require_framework_address: false,
        }
    }
}

impl DecodeOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that only classify functions at the exact framework address.
    pub fn strict() -> Self {
        Self {
            require_framework_address: true,
            ..Self::default()
        }
    }

    /// Sets the maximum input length.
    pub fn max_transaction_len(mut self, len: usize) -> Self {
        self.max_transaction_len = len;
        self
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a signing request with default options.
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction<'_>, DecodeError> {
    decode_transaction_with_options(bytes, &DecodeOptions::default())
}

/// Decodes a signing request.
///
/// On error nothing from the input may be displayed or signed.
pub fn decode_transaction_with_options<'a>(
    bytes: &'a [u8],
    options: &DecodeOptions,
) -> Result<Transaction<'a>, DecodeError> {
    if bytes.len() > options.max_transaction_len {
        return Err(DecodeError::InputTooLong {
            len: bytes.len(),
            max: options.max_transaction_len,
        });
    }

    let mut reader = Reader::new(bytes);
    let prefix = reader.read_bytes(TX_HASHED_PREFIX_LEN, "transaction prefix").ok();

    match prefix {
        Some(p) if p == PREFIX_RAW_TX_HASHED => {
            trace!("matched RawTransaction prefix");
            decode_raw_transaction(&mut reader, options).map(Transaction::Raw)
        }
        Some(p) if p == PREFIX_RAW_TX_WITH_DATA_HASHED => {
            trace!("matched RawTransactionWithData prefix");
            check_terminated(bytes, options)?;
            Ok(Transaction::RawWithData {
                body: reader.remaining(),
            })
        }
        _ => {
            check_terminated(bytes, options)?;
            reader.rewind();
            let message = reader.remaining();
            let variant = classify_message(message);
            trace!(?variant, len = message.len(), "no transaction prefix, classified as message");
            Ok(match variant {
                TxVariant::PlainMessage => Transaction::PlainMessage(message),
                _ => Transaction::RawBytesMessage(message),
            })
        }
    }
}

/// Decodes a signing request and reports the host-facing status.
pub fn decode_with_status<'a>(
    bytes: &'a [u8],
    options: &DecodeOptions,
) -> (ParseStatus, Option<Transaction<'a>>) {
    match decode_transaction_with_options(bytes, options) {
        Ok(tx) => {
            debug!(status = ?ParseStatus::Ok, variant = ?tx.variant(), "parsing status");
            (ParseStatus::Ok, Some(tx))
        }
        Err(e) => {
            let status = e.status();
            debug!(?status, error = %e, "parsing status");
            (status, None)
        }
    }
}

/// A request that fills the input limit must end in NUL, otherwise the
/// transport may have cut it short.
fn check_terminated(bytes: &[u8], options: &DecodeOptions) -> Result<(), DecodeError> {
    match bytes.last() {
        Some(&last) if bytes.len() == options.max_transaction_len && last != 0 => {
            Err(DecodeError::UnterminatedInput { len: bytes.len() })
        }
        _ => Ok(()),
    }
}

fn decode_raw_transaction<'a>(
    reader: &mut Reader<'a>,
    options: &DecodeOptions,
) -> Result<RawTransaction<'a>, DecodeError> {
    let sender = reader.read_address("sender")?;
    let sequence_number = reader.read_u64("sequence number")?;

    // At least one byte must remain for the payload tag.
    let footer_start = reader
        .len()
        .checked_sub(TX_FOOTER_LEN)
        .filter(|start| *start > reader.position())
        .ok_or(DecodeError::FooterOverlap {
            footer_start: reader.len().saturating_sub(TX_FOOTER_LEN),
            position: reader.position(),
        })?;
    let footer = read_footer(reader, footer_start)?;

    let payload = decode_payload(reader, footer_start, options)?;

    Ok(RawTransaction {
        sender,
        sequence_number,
        payload,
        max_gas_amount: footer.max_gas_amount,
        gas_unit_price: footer.gas_unit_price,
        expiration_timestamp_secs: footer.expiration_timestamp_secs,
        chain_id: footer.chain_id,
    })
}

fn read_footer(reader: &Reader<'_>, footer_start: usize) -> Result<Footer, DecodeError> {
    let mut footer = Reader::at(reader.data(), footer_start, "footer")?;
    Ok(Footer {
        max_gas_amount: footer.read_u64("max gas amount")?,
        gas_unit_price: footer.read_u64("gas unit price")?,
        expiration_timestamp_secs: footer.read_u64("expiration timestamp")?,
        chain_id: footer.read_u8("chain id")?,
    })
}

fn decode_payload<'a>(
    reader: &mut Reader<'a>,
    footer_start: usize,
    options: &DecodeOptions,
) -> Result<Payload<'a>, DecodeError> {
    let tag = reader.read_variant_index("payload variant")?;
    let variant =
        PayloadVariant::from_u32(tag).ok_or(DecodeError::InvalidPayloadVariant { variant: tag })?;
    trace!(?variant, "payload variant");

    let payload = match variant {
        PayloadVariant::Script => Payload::Script {
            body: opaque_body(reader, footer_start)?,
        },
        PayloadVariant::Multisig => Payload::Multisig {
            body: opaque_body(reader, footer_start)?,
        },
        PayloadVariant::EntryFunction => {
            let function = decode_entry_function(reader, options)?;
            if function.known_function() == KnownFunction::Unknown {
                check_before_footer(reader, footer_start)?;
            } else if reader.position() != footer_start {
                return Err(DecodeError::PayloadLengthMismatch {
                    footer_start,
                    position: reader.position(),
                });
            }
            Payload::EntryFunction(function)
        }
    };
    Ok(payload)
}

/// Returns the bytes between the current position and the footer.
fn opaque_body<'a>(reader: &mut Reader<'a>, footer_start: usize) -> Result<&'a [u8], DecodeError> {
    check_before_footer(reader, footer_start)?;
    reader.read_bytes(footer_start - reader.position(), "payload body")
}

fn check_before_footer(reader: &Reader<'_>, footer_start: usize) -> Result<(), DecodeError> {
    if reader.position() > footer_start {
        return Err(DecodeError::FooterOverlap {
            footer_start,
            position: reader.position(),
        });
    }
    Ok(())
}
