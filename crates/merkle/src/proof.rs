//! Proof verification

use crate::{Hash, MerkleError, hasher::Keccak256Hasher, parse_hash_hex};

/// Fold a proof into the root it implies for `leaf`
pub fn compute_root(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |current, sibling| Keccak256Hasher::hash_sorted_pair(&current, sibling))
}

/// Verify a proof against a root hash
pub fn verify_proof(leaf: &Hash, proof: &[Hash], root: &Hash) -> bool {
    compute_root(leaf, proof) == *root
}

/// Verify a proof given as 0x-prefixed hex digests.
///
/// Fails only when one of the inputs is not a 32-byte digest. A well-formed
/// proof that does not lead to `root` yields `Ok(false)`.
pub fn verify_hex_proof<S: AsRef<str>>(
    leaf: &str,
    proof: &[S],
    root: &str,
) -> Result<bool, MerkleError> {
    let leaf = parse_hash_hex(leaf)?;
    let root = parse_hash_hex(root)?;
    let proof = proof
        .iter()
        .map(|sibling| parse_hash_hex(sibling.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(verify_proof(&leaf, &proof, &root))
}
