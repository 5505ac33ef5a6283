//! Account addresses.
//!
//! Addresses are 32 raw bytes on the wire.

use std::fmt;

use crate::limits::ADDRESS_LEN;

/// A 32-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccountAddress(pub [u8; ADDRESS_LEN]);

impl AccountAddress {
    /// The all-zero address.
    pub const ZERO: AccountAddress = AccountAddress([0u8; ADDRESS_LEN]);

    /// The framework address `0x1`.
    pub const ONE: AccountAddress = {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[ADDRESS_LEN - 1] = 1;
        AccountAddress(bytes)
    };

    /// Creates an address from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        AccountAddress(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns the last byte of the address.
    pub fn last_byte(&self) -> u8 {
        self.0[ADDRESS_LEN - 1]
    }

    /// Formats the address with leading zero bytes removed, keeping at least one byte.
    ///
    /// `0x1` renders as `0x01`.
    pub fn to_short_string(&self) -> String {
        let leading_zeros = self.0[..ADDRESS_LEN - 1]
            .iter()
            .take_while(|b| **b == 0)
            .count();
        let mut out = String::with_capacity(2 + 2 * (ADDRESS_LEN - leading_zeros));
        out.push_str("0x");
        for byte in &self.0[leading_zeros..] {
            out.push_str(&format!("{:02x}", byte));
        }
        out
    }
}

impl From<[u8; ADDRESS_LEN]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        AccountAddress(bytes)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x78;
        bytes[31] = 0xee;
        let s = AccountAddress(bytes).to_string();
        assert_eq!(s.len(), 66);
        assert!(s.starts_with("0x78"));
        assert!(s.ends_with("ee"));
    }

    #[test]
    fn test_short_string() {
        assert_eq!(AccountAddress::ONE.to_short_string(), "0x01");
        assert_eq!(AccountAddress::ZERO.to_short_string(), "0x00");

        let mut bytes = [0u8; 32];
        bytes[30] = 0xab;
        bytes[31] = 0x00;
        assert_eq!(AccountAddress(bytes).to_short_string(), "0xab00");
    }

    #[test]
    fn test_last_byte() {
        assert_eq!(AccountAddress::ONE.last_byte(), 1);
        assert_eq!(AccountAddress::ZERO.last_byte(), 0);
    }
}
