use thiserror::Error;

/// Errors that can occur when building or checking inclusion proofs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// The requested leaf does not exist.
    #[error("Leaf index {index} is out of bounds for a tree of {leaf_count} leaves")]
    IndexOutOfBounds {
        /// Requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },

    /// The proof carries no leaf.
    #[error("Proof leaf must not be empty")]
    EmptyLeaf,

    /// The proof path is longer than any tree this crate can build.
    #[error("Expected no more than {max} path entries, got {len}")]
    PathTooLong {
        /// Entries in the path.
        len: usize,
        /// Maximum accepted entries.
        max: usize,
    },
}
