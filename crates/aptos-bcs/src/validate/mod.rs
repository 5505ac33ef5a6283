//! Signing policy for decoded transactions.
//!
//! Decoding only establishes that the bytes are well formed. Whether the
//! user can be shown enough to make an informed decision is a separate
//! question: anything that is not a classified transfer or readable text is
//! "blind" and may only be signed when the user has enabled blind signing.
//!
//! The policy holds no persisted state; the caller passes the current
//! setting.

use crate::codec::message::is_interrupted;
use crate::error::PolicyError;
use crate::model::{FunctionCall, Payload, Transaction};

/// User-controlled signing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SigningPolicy {
    pub allow_blind_signing: bool,
}

impl SigningPolicy {
    /// Creates a policy.
    pub fn new(allow_blind_signing: bool) -> Self {
        Self {
            allow_blind_signing,
        }
    }
}

/// Returns why a transaction cannot be fully shown, or `None` if it can.
///
/// Script, multisig and unrecognized entry function payloads have no length
/// the decoder can check the footer against. A truncated or padded request
/// of that kind still decodes, with gas, expiration and chain id read from
/// shifted bytes, so none of its fields can be shown as trustworthy.
pub fn blind_signing_reason(tx: &Transaction<'_>) -> Option<&'static str> {
    match tx {
        Transaction::Raw(raw) => match &raw.payload {
            Payload::Script { .. } => Some("script payloads"),
            Payload::Multisig { .. } => Some("multisig payloads"),
            Payload::EntryFunction(f) => match f.call {
                FunctionCall::Unknown => Some("unrecognized entry functions"),
                _ => None,
            },
        },
        Transaction::RawWithData { .. } => Some("transactions with additional signers"),
        Transaction::RawBytesMessage(_) => Some("raw byte messages"),
        Transaction::PlainMessage(text) if is_interrupted(text) => {
            Some("messages with embedded NUL bytes")
        }
        Transaction::PlainMessage(_) => None,
    }
}

/// Returns true if signing `tx` requires blind signing.
pub fn requires_blind_signing(tx: &Transaction<'_>) -> bool {
    blind_signing_reason(tx).is_some()
}

/// Checks that `tx` may be signed under `policy`.
pub fn validate_for_signing(
    tx: &Transaction<'_>,
    policy: &SigningPolicy,
) -> Result<(), PolicyError> {
    match blind_signing_reason(tx) {
        Some(reason) if !policy.allow_blind_signing => {
            Err(PolicyError::BlindSigningDisabled { reason })
        }
        _ => Ok(()),
    }
}
