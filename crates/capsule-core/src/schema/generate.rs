//! Commitment generation schema models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::proof_sample::ProofSample;

/// Parameters for a commitment generation call.
///
/// All fields are optional; missing fields fall back to the service defaults.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Size of the synthetic dataset, in gigabytes.
    #[serde(rename = "datasetGB", alias = "datasetSizeGB")]
    pub dataset_gb: Option<f64>,
    /// Audit ratio. Each unit yields 125 capsules.
    pub audit_ratio: Option<f64>,
    /// Whether the simulated retrieval cache is warm.
    pub cache_warm: Option<bool>,
}

/// Result of a commitment generation call.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Number of synthetic capsules (leaves) committed to.
    pub capsule_count: u64,
    /// Merkle root over all capsules (lowercase hex).
    pub root: String,
    /// Inclusion proof for the sampled capsule.
    pub proof_sample: ProofSample,
    /// Cache state the caller asked for, echoed for the verification step.
    pub cache_warm: bool,
}
