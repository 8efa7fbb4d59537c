//! Commitment verification schema models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::proof_sample::ProofSample;

/// Parameters for a verification call, exactly as received.
///
/// Fields stay optional so that a missing root, leaf or path can be reported as a payload error
/// instead of a generic parse failure. `root` is read when `anchorRoot` is absent, so a
/// generation response can be fed back unmodified.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Claimed Merkle root.
    pub anchor_root: Option<String>,
    /// Root under its generation response name. `anchorRoot` wins when both are present.
    pub root: Option<String>,
    /// Inclusion proof to replay.
    pub proof_sample: Option<UncheckedProofSample>,
    /// Whether the simulated retrieval cache is warm.
    pub cache_warm: Option<bool>,
}

/// Inclusion proof fields before validation.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct UncheckedProofSample {
    /// The leaf value.
    pub leaf: Option<String>,
    /// Sibling hashes, nearest first.
    pub path: Option<Vec<String>>,
}

impl VerifyRequest {
    /// The claimed root, preferring `anchorRoot` over `root`.
    #[must_use]
    pub fn claimed_root(&self) -> Option<&str> {
        self.anchor_root
            .as_deref()
            .filter(|root| !root.is_empty())
            .or_else(|| self.root.as_deref())
    }
}

impl From<ProofSample> for UncheckedProofSample {
    fn from(sample: ProofSample) -> Self {
        Self {
            leaf: Some(sample.leaf),
            path: Some(sample.path),
        }
    }
}

/// Result of a verification call.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Whether the recomputed root equals the claimed root.
    pub verified: bool,
    /// Simulated retrieval latency in milliseconds. Cosmetic only.
    pub retrieval_ms: u64,
    /// Root recomputed from the proof.
    pub computed_root: String,
    /// Cache state used for the latency figure.
    pub cache_warm: bool,
}
