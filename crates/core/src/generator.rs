//! Airdrop tree generation

use std::collections::HashSet;

use airdrop_merkle::{Hash, MerkleTree, format_hash_hex, verify_proof};
use alloy_primitives::{Address, U256};
use tracing::{info, warn};

use crate::{
    AirdropError, AirdropSummary, AllocationRecord,
    amount::format_units,
    leaf::leaf_hash,
    record::format_address,
    summary::total_amount,
};

/// Outcome of re-verifying one generated proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCheck {
    /// Recipient
    pub address: Address,
    /// Allocated subunits
    pub amount: U256,
    /// Number of siblings in the proof
    pub proof_len: usize,
    /// Whether the proof led back to the root
    pub valid: bool,
}

/// Merkle tree over a validated allocation list.
///
/// Records keep their input order as leaves.
#[derive(Debug, Clone)]
pub struct AirdropGenerator {
    records: Vec<AllocationRecord>,
    tree: MerkleTree,
}

impl AirdropGenerator {
    /// Hash every record and build the tree.
    ///
    /// Each address may appear only once; a repeat fails with
    /// `DuplicateAddress`.
    pub fn new(records: Vec<AllocationRecord>) -> Result<Self, AirdropError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(repeat) = records.iter().find(|record| !seen.insert(record.address)) {
            return Err(AirdropError::DuplicateAddress(format_address(&repeat.address)));
        }

        let leaves = records.iter().map(leaf_hash).collect();
        let tree = MerkleTree::new(leaves)?;
        info!(
            leaves = tree.len(),
            depth = tree.depth(),
            root = %format_hash_hex(&tree.root()),
            "Merkle tree built"
        );
        Ok(Self { records, tree })
    }

    /// Get the root hash
    pub const fn root(&self) -> Hash {
        self.tree.root()
    }

    /// Records in leaf order
    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    /// Underlying tree
    pub const fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Sum of all allocations in subunits
    pub fn total_amount(&self) -> Result<U256, AirdropError> {
        total_amount(&self.records)
    }

    /// Proof for an (address, amount) pair; fails with `LeafNotFound` if the
    /// pair is not in the tree
    pub fn proof_for(&self, address: Address, amount: U256) -> Result<Vec<Hash>, AirdropError> {
        let leaf = leaf_hash(&AllocationRecord::new(address, amount));
        Ok(self.tree.proof(&leaf)?)
    }

    /// Check a claim against this tree's root
    pub fn verify_claim(&self, address: Address, amount: U256, proof: &[Hash]) -> bool {
        verify_claim(address, amount, proof, &self.root())
    }

    /// Build the persisted artifact
    pub fn summary(&self) -> Result<AirdropSummary, AirdropError> {
        AirdropSummary::build(&self.records, &self.tree)
    }

    /// Regenerate and verify proofs for the first `count` records
    pub fn verify_samples(&self, count: usize) -> Result<Vec<SampleCheck>, AirdropError> {
        self.records
            .iter()
            .take(count)
            .map(|record| -> Result<_, AirdropError> {
                let proof = self.proof_for(record.address, record.amount)?;
                let valid = self.verify_claim(record.address, record.amount, &proof);
                let check = SampleCheck {
                    address: record.address,
                    amount: record.amount,
                    proof_len: proof.len(),
                    valid,
                };

                if valid {
                    info!(
                        address = %format_address(&check.address),
                        tokens = %format_units(check.amount),
                        subunits = %check.amount,
                        proof_len = check.proof_len,
                        "Proof verified"
                    );
                } else {
                    warn!(
                        address = %format_address(&check.address),
                        proof_len = check.proof_len,
                        "Proof failed verification"
                    );
                }
                Ok(check)
            })
            .collect()
    }
}

/// Check that `(address, amount)` is committed under `root`
pub fn verify_claim(address: Address, amount: U256, proof: &[Hash], root: &Hash) -> bool {
    verify_proof(&leaf_hash(&AllocationRecord::new(address, amount)), proof, root)
}
