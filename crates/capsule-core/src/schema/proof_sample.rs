//! Inclusion proof schema models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A sampled inclusion proof: one leaf plus the sibling hashes from that leaf up to the root.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ProofSample {
    /// The leaf value (lowercase hex). Verification hashes it once more before climbing.
    pub leaf: String,
    /// Sibling hashes, nearest sibling first and the root's child last.
    pub path: Vec<String>,
}
