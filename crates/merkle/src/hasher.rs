//! Keccak256 hasher for the airdrop tree

use tiny_keccak::{Hasher, Keccak};

use crate::Hash;

/// Keccak256 hasher
#[derive(Debug, Clone, Copy)]
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Hash arbitrary bytes
    pub fn hash(data: &[u8]) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }

    /// Hash two digests in the order given
    pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(left);
        hasher.update(right);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }

    /// Hash two digests after ordering them ascending as byte strings.
    ///
    /// The result does not depend on argument order, which is what lets
    /// proofs omit left/right position.
    pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
        if a <= b { Self::hash_pair(a, b) } else { Self::hash_pair(b, a) }
    }
}
