//! Allocation records

use alloy_primitives::{Address, U256};

use crate::{AirdropError, amount::parse_units};

/// One (address, amount) entry of the airdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocationRecord {
    /// Recipient
    pub address: Address,
    /// Amount in subunits (10^18 per token)
    pub amount: U256,
}

impl AllocationRecord {
    /// Create a record from already validated parts
    pub const fn new(address: Address, amount: U256) -> Self {
        Self { address, amount }
    }

    /// Validate a textual address and decimal token amount
    pub fn parse(address: &str, amount: &str) -> Result<Self, AirdropError> {
        Ok(Self { address: parse_address(address)?, amount: parse_units(amount)? })
    }
}

/// Parse an Ethereum address of the form `0x` + 40 hex characters.
///
/// Either letter case is accepted; no checksum is enforced.
pub fn parse_address(value: &str) -> Result<Address, AirdropError> {
    let invalid = || AirdropError::InvalidAddressFormat(value.to_string());
    let digits = value.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 {
        return Err(invalid());
    }
    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
    Ok(Address::from(bytes))
}

/// Lowercase `0x` hex form of an address, used as the artifact key.
///
/// Checksum-cased addresses must be lowercased (or passed through
/// [`parse_address`]) before looking up a claim in the artifact.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_slice()))
}
