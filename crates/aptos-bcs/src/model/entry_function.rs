//! Entry function payloads and their classified arguments.

use std::fmt;

use crate::model::{AccountAddress, StructTag};

/// Functions with a fixed, fully interpreted argument shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KnownFunction {
    Unknown = 0,
    /// `0x1::aptos_account::transfer`
    AptosAccountTransfer = 1,
    /// `0x1::coin::transfer<CoinType>`
    CoinTransfer = 2,
    /// `0x1::aptos_account::transfer_coins<CoinType>`
    AptosAccountTransferCoins = 3,
}

impl KnownFunction {
    /// Number of type arguments the function must carry.
    pub fn expected_type_args(self) -> Option<u32> {
        match self {
            KnownFunction::Unknown => None,
            KnownFunction::AptosAccountTransfer => Some(0),
            KnownFunction::CoinTransfer | KnownFunction::AptosAccountTransferCoins => Some(1),
        }
    }

    /// Number of value arguments the function must carry.
    pub fn expected_args(self) -> Option<u32> {
        match self {
            KnownFunction::Unknown => None,
            _ => Some(2),
        }
    }
}

/// A module identifier: address plus module name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId<'a> {
    pub address: AccountAddress,
    pub name: &'a [u8],
}

impl fmt::Display for ModuleId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address.to_short_string(), self.name.escape_ascii())
    }
}

/// Receiver and amount of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    pub receiver: AccountAddress,
    pub amount: u64,
}

/// A transfer of an explicitly typed coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoinTransfer<'a> {
    pub coin_type: StructTag<'a>,
    pub receiver: AccountAddress,
    pub amount: u64,
}

/// Classified call arguments, keyed by the recognized function.
///
/// Unknown functions carry no arguments; only the raw module and function
/// identifiers are trustworthy for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionCall<'a> {
    Unknown,
    AptosAccountTransfer(Transfer),
    CoinTransfer(CoinTransfer<'a>),
    AptosAccountTransferCoins(CoinTransfer<'a>),
}

impl<'a> FunctionCall<'a> {
    /// Returns which known function this call was classified as.
    pub fn known_function(&self) -> KnownFunction {
        match self {
            FunctionCall::Unknown => KnownFunction::Unknown,
            FunctionCall::AptosAccountTransfer(_) => KnownFunction::AptosAccountTransfer,
            FunctionCall::CoinTransfer(_) => KnownFunction::CoinTransfer,
            FunctionCall::AptosAccountTransferCoins(_) => KnownFunction::AptosAccountTransferCoins,
        }
    }

    /// Number of type arguments decoded, `None` when arguments were not parsed.
    pub fn type_arg_count(&self) -> Option<u32> {
        self.known_function().expected_type_args()
    }

    /// Number of value arguments decoded, `None` when arguments were not parsed.
    pub fn arg_count(&self) -> Option<u32> {
        self.known_function().expected_args()
    }

    pub fn receiver(&self) -> Option<&AccountAddress> {
        match self {
            FunctionCall::Unknown => None,
            FunctionCall::AptosAccountTransfer(t) => Some(&t.receiver),
            FunctionCall::CoinTransfer(t) | FunctionCall::AptosAccountTransferCoins(t) => {
                Some(&t.receiver)
            }
        }
    }

    pub fn amount(&self) -> Option<u64> {
        match self {
            FunctionCall::Unknown => None,
            FunctionCall::AptosAccountTransfer(t) => Some(t.amount),
            FunctionCall::CoinTransfer(t) | FunctionCall::AptosAccountTransferCoins(t) => {
                Some(t.amount)
            }
        }
    }

    /// Coin type for typed transfers.
    pub fn coin_type(&self) -> Option<&StructTag<'a>> {
        match self {
            FunctionCall::CoinTransfer(t) | FunctionCall::AptosAccountTransferCoins(t) => {
                Some(&t.coin_type)
            }
            _ => None,
        }
    }
}

/// An entry function call payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryFunction<'a> {
    pub module: ModuleId<'a>,
    pub function: &'a [u8],
    pub call: FunctionCall<'a>,
}

impl EntryFunction<'_> {
    pub fn known_function(&self) -> KnownFunction {
        self.call.known_function()
    }
}

impl fmt::Display for EntryFunction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.function.escape_ascii())
    }
}
