//! Merkle tree construction and proof generation

use std::collections::HashMap;

use crate::{Hash, MerkleError, format_hash_hex, hasher::Keccak256Hasher, proof::verify_proof};

/// Binary Merkle tree with sorted-pair hashing.
///
/// Every level is kept as a plain digest array: `layers()[0]` holds the
/// leaves in input order and the last layer holds only the root. Proofs are
/// read straight out of these arrays, so the tree is built once and then
/// queried any number of times.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Digest arrays from the leaves (index 0) up to the root
    layers: Vec<Vec<Hash>>,
    /// Leaf digest -> index of its first occurrence in the bottom layer
    positions: HashMap<Hash, usize>,
    /// Root hash
    root: Hash,
}

impl MerkleTree {
    /// Build a tree over `leaves`, which are used in the order given.
    pub fn new(leaves: Vec<Hash>) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut positions = HashMap::with_capacity(leaves.len());
        for (index, leaf) in leaves.iter().enumerate() {
            positions.entry(*leaf).or_insert(index);
        }

        let mut layers = vec![leaves];
        while layers.last().is_some_and(|level| level.len() > 1) {
            let next = Self::reduce_level(&layers[layers.len() - 1]);
            layers.push(next);
        }
        let root = layers[layers.len() - 1][0];

        Ok(Self { layers, positions, root })
    }

    /// Hash one level into the next.
    ///
    /// Consecutive pairs are hashed in sorted order. A trailing odd node is
    /// copied up as is: it is neither duplicated nor hashed with itself.
    fn reduce_level(level: &[Hash]) -> Vec<Hash> {
        level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => Keccak256Hasher::hash_sorted_pair(left, right),
                _ => pair[0],
            })
            .collect()
    }

    /// Get the root hash
    pub const fn root(&self) -> Hash {
        self.root
    }

    /// Leaf digests in input order
    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    /// All levels, leaves first
    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.layers
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    /// Always false, a tree cannot be built without leaves
    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Number of hashing levels above the leaves
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Index of the first occurrence of `leaf`
    pub fn leaf_index(&self, leaf: &Hash) -> Option<usize> {
        self.positions.get(leaf).copied()
    }

    /// Generate the inclusion proof for a leaf digest
    pub fn proof(&self, leaf: &Hash) -> Result<Vec<Hash>, MerkleError> {
        let index = self
            .leaf_index(leaf)
            .ok_or_else(|| MerkleError::LeafNotFound(format_hash_hex(leaf)))?;
        self.proof_at(index)
    }

    /// Generate the inclusion proof for the leaf at `index`.
    ///
    /// Siblings are ordered from the leaf level upwards. A node carried up
    /// without a partner contributes nothing at that level.
    pub fn proof_at(&self, index: usize) -> Result<Vec<Hash>, MerkleError> {
        let len = self.len();
        if index >= len {
            return Err(MerkleError::IndexOutOfBounds { index, len });
        }

        let mut proof = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.layers[..self.depth()] {
            if let Some(sibling) = level.get(position ^ 1) {
                proof.push(*sibling);
            }
            position /= 2;
        }

        Ok(proof)
    }

    /// Check a proof for `leaf` against this tree's root
    pub fn verify(&self, leaf: &Hash, proof: &[Hash]) -> bool {
        verify_proof(leaf, proof, &self.root)
    }
}
