//! Inclusion proofs and their verification.

use capsule_core::schema::proof_sample::ProofSample;

use crate::error::MerkleError;
use crate::hash::{hash_pair, sha256_hex};

/// Maximum number of path entries accepted for verification.
///
/// A tree of 2^64 leaves needs no more.
pub const MAX_PATH_LEN: usize = 64;

/// A leaf together with the sibling hashes met while climbing from it to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionProof {
    /// Leaf value. It is hashed once more to form its level-0 node.
    pub leaf: String,
    /// Sibling hashes, nearest first.
    pub path: Vec<String>,
}

impl InclusionProof {
    /// Create a proof from a leaf and its sibling path.
    #[must_use]
    pub const fn new(leaf: String, path: Vec<String>) -> Self {
        Self { leaf, path }
    }

    /// The proof reported for a tree without leaves.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            leaf: String::new(),
            path: Vec::new(),
        }
    }

    /// Performs basic validation.
    ///
    /// # Errors
    /// Returns an error if the leaf is empty or the path holds more than [`MAX_PATH_LEN`]
    /// entries.
    pub fn validate_basic(&self) -> Result<(), MerkleError> {
        if self.leaf.is_empty() {
            return Err(MerkleError::EmptyLeaf);
        }
        if self.path.len() > MAX_PATH_LEN {
            return Err(MerkleError::PathTooLong {
                len: self.path.len(),
                max: MAX_PATH_LEN,
            });
        }
        Ok(())
    }

    /// Replay the climb: hash the leaf, then fold in each sibling in path order.
    #[must_use]
    pub fn compute_root(&self) -> String {
        self.path
            .iter()
            .fold(sha256_hex(&self.leaf), |node, sibling| {
                hash_pair(&node, sibling)
            })
    }

    /// Whether the recomputed root equals `root` exactly.
    #[must_use]
    pub fn verify(&self, root: &str) -> bool {
        self.compute_root() == root
    }
}

impl From<InclusionProof> for ProofSample {
    fn from(proof: InclusionProof) -> Self {
        Self {
            leaf: proof.leaf,
            path: proof.path,
        }
    }
}

impl From<ProofSample> for InclusionProof {
    fn from(sample: ProofSample) -> Self {
        Self::new(sample.leaf, sample.path)
    }
}
