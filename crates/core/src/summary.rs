//! Persisted airdrop artifact

use std::collections::BTreeMap;

use airdrop_merkle::{MerkleTree, format_hash_hex, parse_hash_hex, verify_proof};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{
    AirdropError, AllocationRecord,
    amount::{format_subunits_hex, parse_subunits_hex},
    leaf::leaf_hash,
    record::{format_address, parse_address},
};

/// Claim data published for one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimProof {
    /// Allocated subunits as `0x` hex
    pub amount: String,
    /// Sibling digests, leaf side first
    pub proof: Vec<String>,
}

/// Root, totals and per-address proofs, as written to `merkle_data.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropSummary {
    /// Tree root as `0x` + 64 hex characters
    pub merkle_root: String,
    /// Number of allocations
    pub total_addresses: usize,
    /// Sum of all allocations in subunits, as a decimal string
    pub total_amount: String,
    /// Lowercase address -> claim data
    pub proofs: BTreeMap<String, ClaimProof>,
}

impl AirdropSummary {
    /// Assemble the artifact for `records`, which must be the records `tree`
    /// was built from. Fails with `DuplicateAddress` if two records share an
    /// address, since each address keys exactly one claim.
    pub fn build(records: &[AllocationRecord], tree: &MerkleTree) -> Result<Self, AirdropError> {
        let mut proofs = BTreeMap::new();
        for record in records {
            let address = format_address(&record.address);
            if proofs.contains_key(&address) {
                return Err(AirdropError::DuplicateAddress(address));
            }

            let proof = tree.proof(&leaf_hash(record))?;
            let claim = ClaimProof {
                amount: format_subunits_hex(record.amount),
                proof: proof.iter().map(format_hash_hex).collect(),
            };
            proofs.insert(address, claim);
        }

        Ok(Self {
            merkle_root: format_hash_hex(&tree.root()),
            total_addresses: records.len(),
            total_amount: total_amount(records)?.to_string(),
            proofs,
        })
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, AirdropError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously written artifact
    pub fn from_json(json: &str) -> Result<Self, AirdropError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Re-derive the leaf for `address` and check its proof against the root.
    ///
    /// Returns `Ok(false)` for an address without an entry or whose proof does
    /// not lead to the root. Malformed fields are errors.
    pub fn verify_entry(&self, address: &str) -> Result<bool, AirdropError> {
        let address = parse_address(address)?;
        let Some(claim) = self.proofs.get(&format_address(&address)) else {
            return Ok(false);
        };

        let root = parse_hash_hex(&self.merkle_root)?;
        let record = AllocationRecord::new(address, parse_subunits_hex(&claim.amount)?);
        let proof = claim
            .proof
            .iter()
            .map(|sibling| parse_hash_hex(sibling.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(verify_proof(&leaf_hash(&record), &proof, &root))
    }

    /// Check every entry's proof and the recorded totals
    pub fn verify_all(&self) -> Result<bool, AirdropError> {
        if self.total_addresses != self.proofs.len() {
            return Ok(false);
        }

        let mut total = U256::ZERO;
        for (address, claim) in &self.proofs {
            if !self.verify_entry(address)? {
                return Ok(false);
            }
            total = total
                .checked_add(parse_subunits_hex(&claim.amount)?)
                .ok_or_else(|| AirdropError::AmountOverflow("total amount".to_string()))?;
        }

        Ok(total.to_string() == self.total_amount)
    }
}

/// Sum of all allocations in subunits
pub fn total_amount(records: &[AllocationRecord]) -> Result<U256, AirdropError> {
    records.iter().try_fold(U256::ZERO, |sum, record| {
        sum.checked_add(record.amount)
            .ok_or_else(|| AirdropError::AmountOverflow("total amount".to_string()))
    })
}
