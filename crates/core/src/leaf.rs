//! Leaf encoding

use airdrop_merkle::{Hash, Keccak256Hasher};

use crate::AllocationRecord;

/// Length of an encoded leaf: 20 address bytes + 32 amount bytes
pub const LEAF_ENCODING_LEN: usize = 52;

/// Serialize a record as `address (20 bytes) || amount (32 bytes, big-endian)`.
///
/// Both fields have a fixed width, so no two records share an encoding.
/// This is `abi.encodePacked(address, uint256)` in Solidity.
pub fn encode_leaf(record: &AllocationRecord) -> [u8; LEAF_ENCODING_LEN] {
    let mut buffer = [0u8; LEAF_ENCODING_LEN];
    buffer[..20].copy_from_slice(record.address.as_slice());
    buffer[20..].copy_from_slice(&record.amount.to_be_bytes::<32>());
    buffer
}

/// Keccak256 digest of the encoded record
pub fn leaf_hash(record: &AllocationRecord) -> Hash {
    Keccak256Hasher::hash(&encode_leaf(record))
}
