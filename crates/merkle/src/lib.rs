//! Sorted-pair Merkle tree for airdrop allowlists
//!
//! This crate builds a binary Keccak256 tree over leaf digests and serves
//! inclusion proofs for it. Key properties:
//! - Leaves stay in input order; only each hashed pair is sorted
//! - An unpaired node at the end of a level moves up unchanged
//! - Proofs carry no direction bits, verification sorts at every step
//!
//! The resulting roots match the OpenZeppelin `MerkleProof` verifier and
//! `merkletreejs` with `sortPairs: true`.

mod error;
mod hasher;
mod proof;
mod tree;

pub use error::MerkleError;
pub use hasher::Keccak256Hasher;
pub use proof::{compute_root, verify_hex_proof, verify_proof};
pub use tree::MerkleTree;

/// 32-byte digest
pub type Hash = [u8; 32];

/// Format a digest as lowercase hex with 0x prefix
pub fn format_hash_hex(hash: &Hash) -> String {
    format!("0x{}", hex::encode(hash))
}

/// Parse a 0x-prefixed, 64 character hex digest
pub fn parse_hash_hex(value: &str) -> Result<Hash, MerkleError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| MerkleError::InvalidDigest(value.to_string()))?;
    let mut hash = [0u8; 32];
    hex::decode_to_slice(digits, &mut hash)
        .map_err(|_| MerkleError::InvalidDigest(value.to_string()))?;
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip() {
        let mut hash = [0u8; 32];
        hash[0] = 0xab;
        hash[31] = 0x01;
        let encoded = format_hash_hex(&hash);
        assert_eq!(encoded.len(), 66);
        assert!(encoded.starts_with("0xab00"));
        assert_eq!(parse_hash_hex(&encoded).unwrap(), hash);
    }

    #[test]
    fn test_parse_hash_hex_accepts_uppercase_digits() {
        let value = format!("0x{}", "AB".repeat(32));
        assert_eq!(parse_hash_hex(&value).unwrap(), [0xab; 32]);
    }

    #[test]
    fn test_parse_hash_hex_rejects_malformed() {
        let short = format!("0x{}", "00".repeat(31));
        let long = format!("0x{}", "00".repeat(33));
        let unprefixed = "00".repeat(32);
        let bad_hex = format!("0x{}", "zz".repeat(32));

        for value in [short.as_str(), long.as_str(), unprefixed.as_str(), bad_hex.as_str(), ""] {
            assert_eq!(
                parse_hash_hex(value),
                Err(MerkleError::InvalidDigest(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }
}
