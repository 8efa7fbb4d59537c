//! Synthetic capsule commitment generation.

use capsule_core::base::format_number;
use capsule_core::schema::generate::{GenerateRequest, GenerateResponse};
use capsule_merkle::{InclusionProof, MerkleTree, sha256_hex};
use tracing::{debug, instrument};

use crate::common::{GeneratorDefaults, ServiceLimits};
use crate::error::CommitmentError;

/// Capsules produced per unit of audit ratio.
pub const CAPSULES_PER_AUDIT_RATIO: f64 = 125.0;
/// Leaf whose inclusion proof is sampled, clamped to the last leaf for smaller trees.
pub const SAMPLE_INDEX: usize = 2;

/// Generator parameters with every default applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Dataset size, in gigabytes.
    pub dataset_gb: f64,
    /// Audit ratio.
    pub audit_ratio: f64,
    /// Whether the simulated cache is warm.
    pub cache_warm: bool,
}

impl GeneratorParams {
    /// Fill the fields missing from `request` with `defaults`.
    #[must_use]
    pub fn resolve(request: &GenerateRequest, defaults: &GeneratorDefaults) -> Self {
        Self {
            dataset_gb: request.dataset_gb.unwrap_or(defaults.dataset_gb),
            audit_ratio: request.audit_ratio.unwrap_or(defaults.audit_ratio),
            cache_warm: request.cache_warm.unwrap_or(defaults.cache_warm),
        }
    }

    /// Number of capsules these parameters commit to.
    #[must_use]
    pub fn capsule_count(&self) -> u64 {
        capsule_count(self.audit_ratio)
    }

    /// Leaf for capsule `index`: `sha256("{dataset_gb}:{audit_ratio}:{index}")`.
    #[must_use]
    pub fn leaf(&self, index: u64) -> String {
        sha256_hex(format!(
            "{}:{}:{index}",
            format_number(self.dataset_gb),
            format_number(self.audit_ratio)
        ))
    }

    fn validate(&self, limits: &ServiceLimits) -> Result<u64, CommitmentError> {
        if !self.dataset_gb.is_finite() {
            return Err(CommitmentError::invalid("datasetGB must be a finite number"));
        }
        if !self.audit_ratio.is_finite() {
            return Err(CommitmentError::invalid("auditRatio must be a finite number"));
        }
        let capsule_count = self.capsule_count();
        if capsule_count > limits.max_capsule_count {
            return Err(CommitmentError::InvalidPayload(format!(
                "auditRatio {} yields {capsule_count} capsules, more than the limit of {}",
                format_number(self.audit_ratio),
                limits.max_capsule_count
            )));
        }
        Ok(capsule_count)
    }
}

/// `max(1, round(audit_ratio * 125))`
///
/// Negative and NaN ratios clamp to a single capsule; huge ratios saturate at `u64::MAX`.
#[allow(
    clippy::float_arithmetic,
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Float-to-int cast saturates and the value is clamped to at least one"
)]
#[must_use]
pub fn capsule_count(audit_ratio: f64) -> u64 {
    let scaled = (audit_ratio * CAPSULES_PER_AUDIT_RATIO).round();
    if scaled.is_nan() || scaled < 1.0 {
        1
    } else {
        scaled as u64
    }
}

/// Index of the sampled leaf in a tree of `capsule_count` leaves.
#[must_use]
pub fn sample_index(capsule_count: usize) -> usize {
    SAMPLE_INDEX.min(capsule_count.saturating_sub(1))
}

/// Build the commitment and sample one inclusion proof.
///
/// # Errors
/// Returns [`CommitmentError::InvalidPayload`] for non-finite parameters or a capsule count above
/// the configured limit.
#[instrument(skip_all, fields(dataset_gb = params.dataset_gb, audit_ratio = params.audit_ratio))]
pub(crate) fn generate(
    params: &GeneratorParams,
    limits: &ServiceLimits,
) -> Result<GenerateResponse, CommitmentError> {
    let capsule_count = params.validate(limits)?;

    let leaves: Vec<String> = (0..capsule_count).map(|index| params.leaf(index)).collect();
    let tree = MerkleTree::new(leaves);

    let proof_sample = if tree.is_empty() {
        InclusionProof::empty()
    } else {
        tree.proof(sample_index(tree.leaf_count()))
            .map_err(|e| CommitmentError::Internal(e.to_string()))?
    };

    let root = tree.root();
    debug!(
        capsule_count,
        depth = tree.depth(),
        root = %root,
        "Built capsule commitment"
    );

    Ok(GenerateResponse {
        capsule_count,
        root,
        proof_sample: proof_sample.into(),
        cache_warm: params.cache_warm,
    })
}
