//! Merkle tree errors

use thiserror::Error;

/// Errors raised while building a tree or handling proofs.
///
/// A proof that simply fails to verify is not an error; verification
/// reports that as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// A tree needs at least one leaf
    #[error("cannot build a Merkle tree without leaves")]
    EmptyTree,
    /// The requested leaf is not part of the tree
    #[error("leaf {0} not found in tree")]
    LeafNotFound(String),
    /// Leaf index past the end of the bottom level
    #[error("leaf index {index} is out of bounds for tree with {len} leaves")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of leaves
        len: usize,
    },
    /// A hex digest that is not exactly 32 bytes of valid hex
    #[error("invalid digest {0:?}: expected 0x followed by 64 hex characters")]
    InvalidDigest(String),
}
