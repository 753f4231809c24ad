//! Airdrop allocation commitments
//!
//! Turns a list of (address, token amount) allocations into a Merkle root and
//! one inclusion proof per address:
//! - `amount`: exact decimal to 10^18 subunit conversion
//! - `leaf`: `keccak256(address || uint256 amount)` leaf digests
//! - `loader`: CSV validation with per-line errors
//! - `generator`: tree construction, proof lookup and sample verification
//! - `summary`: the JSON artifact handed to claim frontends and contracts

pub mod amount;
pub mod error;
pub mod generator;
pub mod leaf;
pub mod loader;
pub mod record;
pub mod sample;
pub mod summary;

pub use airdrop_merkle::{Hash, MerkleTree, verify_proof};
pub use amount::{format_units, parse_units};
pub use error::AirdropError;
pub use generator::{AirdropGenerator, SampleCheck, verify_claim};
pub use leaf::{encode_leaf, leaf_hash};
pub use loader::{load_csv, parse_csv};
pub use record::{AllocationRecord, format_address, parse_address};
pub use summary::{AirdropSummary, ClaimProof};
