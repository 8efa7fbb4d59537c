//! Bottom-up Merkle tree over capsule leaves.

use crate::error::MerkleError;
use crate::hash::{empty_root, hash_pair, sha256_hex};
use crate::proof::InclusionProof;

/// A fully materialised Merkle tree.
///
/// Level 0 holds `sha256(leaf)` for every leaf. Each further level pairs adjacent nodes of the
/// one below; an odd trailing node is paired with itself. Building stops at the first level of
/// length one, so a single leaf is its own root with no pairing step.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    leaves: Vec<String>,
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    /// Build the tree over `leaves`.
    #[must_use]
    pub fn new(leaves: Vec<String>) -> Self {
        let mut level: Vec<String> = leaves.iter().map(sha256_hex).collect();
        let mut levels = Vec::new();
        while level.len() > 1 {
            let parent = parent_level(&level);
            levels.push(std::mem::replace(&mut level, parent));
        }
        levels.push(level);

        Self { leaves, levels }
    }

    /// Number of leaves.
    #[must_use]
    pub const fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Whether the tree has no leaves.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Number of pairing steps between level 0 and the root.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// The leaves, in insertion order.
    #[must_use]
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    /// The root hash. A tree without leaves has the root `sha256("empty")`.
    #[must_use]
    pub fn root(&self) -> String {
        self.levels
            .last()
            .and_then(|level| level.first())
            .cloned()
            .unwrap_or_else(empty_root)
    }

    /// Collect the sibling path for the leaf at `index`.
    ///
    /// # Errors
    /// Returns an error if `index` is not a leaf of this tree.
    pub fn proof(&self, index: usize) -> Result<InclusionProof, MerkleError> {
        let out_of_bounds = MerkleError::IndexOutOfBounds {
            index,
            leaf_count: self.leaf_count(),
        };
        let leaf = self.leaves.get(index).ok_or_else(|| out_of_bounds.clone())?;

        let mut position = index;
        let mut path = Vec::with_capacity(self.depth());
        for level in self.levels.iter().filter(|level| level.len() > 1) {
            let node = level.get(position).ok_or_else(|| out_of_bounds.clone())?;
            let sibling = level.get(position ^ 1).unwrap_or(node);
            path.push(sibling.clone());
            position /= 2;
        }

        Ok(InclusionProof::new(leaf.clone(), path))
    }
}

fn parent_level(level: &[String]) -> Vec<String> {
    level
        .chunks(2)
        .filter_map(|pair| {
            let left = pair.first()?;
            let right = pair.get(1).unwrap_or(left);
            Some(hash_pair(left, right))
        })
        .collect()
}
