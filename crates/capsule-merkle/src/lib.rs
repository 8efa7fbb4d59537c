//! Merkle commitments over capsule leaves.
//!
//! Nodes are lowercase hex SHA-256 digests. A parent is the digest of its two children
//! concatenated as text, smaller child first, so proofs carry sibling hashes without
//! left/right markers.

mod error;
mod hash;
mod proof;
mod tree;

pub use error::MerkleError;
pub use hash::{EMPTY_TREE_PREIMAGE, empty_root, hash_pair, sha256_hex};
pub use proof::{InclusionProof, MAX_PATH_LEN};
pub use tree::MerkleTree;
