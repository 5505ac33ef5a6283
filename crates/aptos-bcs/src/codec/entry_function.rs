//! Entry function decoding.
//!
//! The module and function identifiers are always read. Arguments are only
//! parsed for the functions in [`KNOWN_FUNCTIONS`], and then against an
//! exact shape: anything else is an error, never a best guess.

use crate::codec::primitives::Reader;
use crate::codec::transaction::DecodeOptions;
use crate::codec::type_tag::{decode_struct_tag, read_type_tag_kind};
use crate::error::DecodeError;
use crate::limits::ADDRESS_LEN;
use crate::model::{
    AccountAddress, CoinTransfer, EntryFunction, FunctionCall, KnownFunction, ModuleId, StructTag,
    Transfer, TypeTagKind,
};

/// Recognized `(module, function)` pairs at the framework address.
pub const KNOWN_FUNCTIONS: &[(&[u8], &[u8], KnownFunction)] = &[
    (b"aptos_account", b"transfer", KnownFunction::AptosAccountTransfer),
    (b"coin", b"transfer", KnownFunction::CoinTransfer),
    (b"aptos_account", b"transfer_coins", KnownFunction::AptosAccountTransferCoins),
];

const AMOUNT_LEN: u32 = 8;

/// Classifies a call by module address, module name and function name.
///
/// By default only the last byte of the module address must be `0x01`;
/// [`DecodeOptions::require_framework_address`] tightens this to the full
/// address.
pub fn classify(module: &ModuleId<'_>, function: &[u8], options: &DecodeOptions) -> KnownFunction {
    let framework = if options.require_framework_address {
        module.address == AccountAddress::ONE
    } else {
        module.address.last_byte() == 0x01
    };
    if !framework {
        return KnownFunction::Unknown;
    }
    KNOWN_FUNCTIONS
        .iter()
        .find(|(m, f, _)| *m == module.name && *f == function)
        .map_or(KnownFunction::Unknown, |(_, _, known)| *known)
}

/// Decodes an entry function payload (the variant tag is already consumed).
///
/// Unknown functions stop after the function name.
pub fn decode_entry_function<'a>(
    reader: &mut Reader<'a>,
    options: &DecodeOptions,
) -> Result<EntryFunction<'a>, DecodeError> {
    let module = ModuleId {
        address: reader.read_address("module address")?,
        name: reader.read_bytes_prefixed("module name")?,
    };
    let function = reader.read_bytes_prefixed("function name")?;

    let known = classify(&module, function, options);
    tracing::trace!(?known, "classified entry function");

    let call = match known {
        KnownFunction::Unknown => FunctionCall::Unknown,
        KnownFunction::AptosAccountTransfer => {
            expect_type_arg_count(reader, known)?;
            FunctionCall::AptosAccountTransfer(decode_transfer_args(reader, known)?)
        }
        KnownFunction::CoinTransfer => {
            FunctionCall::CoinTransfer(decode_coin_transfer(reader, known)?)
        }
        KnownFunction::AptosAccountTransferCoins => {
            FunctionCall::AptosAccountTransferCoins(decode_coin_transfer(reader, known)?)
        }
    };

    Ok(EntryFunction {
        module,
        function,
        call,
    })
}

fn expect_type_arg_count(
    reader: &mut Reader<'_>,
    function: KnownFunction,
) -> Result<(), DecodeError> {
    let expected = function.expected_type_args().unwrap_or(0);
    let found = reader.read_uleb128_u32("type argument count")?;
    if found != expected {
        return Err(DecodeError::TypeArgCountMismatch {
            function,
            expected,
            found,
        });
    }
    Ok(())
}

fn decode_coin_transfer<'a>(
    reader: &mut Reader<'a>,
    function: KnownFunction,
) -> Result<CoinTransfer<'a>, DecodeError> {
    expect_type_arg_count(reader, function)?;
    let coin_type = decode_coin_type(reader, function)?;
    let Transfer { receiver, amount } = decode_transfer_args(reader, function)?;
    Ok(CoinTransfer {
        coin_type,
        receiver,
        amount,
    })
}

fn decode_coin_type<'a>(
    reader: &mut Reader<'a>,
    function: KnownFunction,
) -> Result<StructTag<'a>, DecodeError> {
    let found = read_type_tag_kind(reader)?;
    if found != TypeTagKind::Struct {
        return Err(DecodeError::UnexpectedTypeTag {
            function,
            expected: TypeTagKind::Struct,
            found,
        });
    }
    decode_struct_tag(reader, function)
}

/// Reads the `(receiver: address, amount: u64)` argument pair.
fn decode_transfer_args(
    reader: &mut Reader<'_>,
    function: KnownFunction,
) -> Result<Transfer, DecodeError> {
    let expected = function.expected_args().unwrap_or(0);
    let found = reader.read_uleb128_u32("argument count")?;
    if found != expected {
        return Err(DecodeError::ArgCountMismatch {
            function,
            expected,
            found,
        });
    }

    expect_arg_len(reader, function, "receiver", ADDRESS_LEN as u32)?;
    let receiver = reader.read_address("receiver")?;
    expect_arg_len(reader, function, "amount", AMOUNT_LEN)?;
    let amount = reader.read_u64("amount")?;

    Ok(Transfer { receiver, amount })
}

fn expect_arg_len(
    reader: &mut Reader<'_>,
    function: KnownFunction,
    arg: &'static str,
    expected: u32,
) -> Result<(), DecodeError> {
    let found = reader.read_uleb128_u32(arg)?;
    if found != expected {
        return Err(DecodeError::ArgLengthMismatch {
            function,
            arg,
            expected,
            found,
        });
    }
    Ok(())
}
