//! Inclusion proof verification.

use capsule_core::schema::verify::{VerifyRequest, VerifyResponse};
use capsule_merkle::InclusionProof;
use tracing::{debug, instrument};

use crate::error::CommitmentError;
use crate::latency::simulated_retrieval_ms;

/// A verification request that passed payload checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationInput {
    /// Claimed root.
    pub root: String,
    /// Proof to replay.
    pub proof: InclusionProof,
    /// Whether the simulated cache is warm.
    pub cache_warm: bool,
}

impl VerificationInput {
    /// Check `request` before any hashing takes place.
    ///
    /// # Errors
    /// Returns [`CommitmentError::InvalidPayload`] if the root or leaf is missing or empty, the
    /// path is missing, or the path is longer than [`capsule_merkle::MAX_PATH_LEN`].
    pub fn from_request(
        request: VerifyRequest,
        default_cache_warm: bool,
    ) -> Result<Self, CommitmentError> {
        let root = request
            .claimed_root()
            .filter(|root| !root.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| CommitmentError::invalid("anchorRoot is required"))?;
        let sample = request
            .proof_sample
            .ok_or_else(|| CommitmentError::invalid("proofSample is required"))?;
        let leaf = sample
            .leaf
            .filter(|leaf| !leaf.is_empty())
            .ok_or_else(|| CommitmentError::invalid("proofSample.leaf is required"))?;
        let path = sample
            .path
            .ok_or_else(|| CommitmentError::invalid("proofSample.path must be a list"))?;

        let proof = InclusionProof::new(leaf, path);
        proof
            .validate_basic()
            .map_err(|e| CommitmentError::InvalidPayload(e.to_string()))?;

        Ok(Self {
            root,
            proof,
            cache_warm: request.cache_warm.unwrap_or(default_cache_warm),
        })
    }
}

/// Replay the proof and compare against the claimed root.
#[instrument(skip_all, fields(path_len = input.proof.path.len()))]
pub(crate) fn verify(input: &VerificationInput) -> VerifyResponse {
    let computed_root = input.proof.compute_root();
    let verified = computed_root == input.root;
    debug!(verified, computed_root = %computed_root, "Replayed inclusion proof");

    VerifyResponse {
        verified,
        retrieval_ms: simulated_retrieval_ms(input.cache_warm),
        computed_root,
        cache_warm: input.cache_warm,
    }
}

#[cfg(test)]
mod tests {
    use capsule_core::schema::verify::UncheckedProofSample;
    use capsule_merkle::{MerkleTree, sha256_hex};

    use super::*;

    fn request(root: Option<&str>, leaf: Option<&str>, path: Option<Vec<String>>) -> VerifyRequest {
        VerifyRequest {
            anchor_root: root.map(str::to_owned),
            root: None,
            proof_sample: Some(UncheckedProofSample {
                leaf: leaf.map(str::to_owned),
                path,
            }),
            cache_warm: None,
        }
    }

    fn rejection(request: VerifyRequest) -> String {
        match VerificationInput::from_request(request, true) {
            Err(CommitmentError::InvalidPayload(message)) => message,
            other => panic!("expected invalid payload, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert_eq!(
            rejection(request(None, Some("leaf"), Some(vec![]))),
            "anchorRoot is required"
        );
        assert_eq!(
            rejection(request(Some(""), Some("leaf"), Some(vec![]))),
            "anchorRoot is required"
        );
        assert_eq!(
            rejection(request(Some("root"), None, Some(vec![]))),
            "proofSample.leaf is required"
        );
        assert_eq!(
            rejection(request(Some("root"), Some(""), Some(vec![]))),
            "proofSample.leaf is required"
        );
        assert_eq!(
            rejection(request(Some("root"), Some("leaf"), None)),
            "proofSample.path must be a list"
        );
        assert_eq!(
            rejection(VerifyRequest {
                anchor_root: Some("root".to_owned()),
                root: None,
                proof_sample: None,
                cache_warm: None,
            }),
            "proofSample is required"
        );
        assert_eq!(
            rejection(request(Some("root"), Some("leaf"), Some(vec!["a".to_owned(); 65]))),
            "Expected no more than 64 path entries, got 65"
        );
    }

    #[test]
    fn reads_root_when_anchor_root_is_absent() {
        let mut from_generation = request(None, Some("leaf"), Some(vec![]));
        from_generation.root = Some("r".to_owned());
        let input = VerificationInput::from_request(from_generation, true).expect("valid request");
        assert_eq!(input.root, "r");

        let mut both = request(Some("anchor"), Some("leaf"), Some(vec![]));
        both.root = Some("r".to_owned());
        let input = VerificationInput::from_request(both, true).expect("valid request");
        assert_eq!(input.root, "anchor");

        let mut empty = request(None, Some("leaf"), Some(vec![]));
        empty.root = Some(String::new());
        assert_eq!(rejection(empty), "anchorRoot is required");
    }

    #[test]
    fn cache_flag_falls_back_to_default() {
        let input = VerificationInput::from_request(request(Some("r"), Some("l"), Some(vec![])), false)
            .expect("valid request");
        assert!(!input.cache_warm);

        let mut explicit = request(Some("r"), Some("l"), Some(vec![]));
        explicit.cache_warm = Some(true);
        let input = VerificationInput::from_request(explicit, false).expect("valid request");
        assert!(input.cache_warm);
    }

    #[test]
    fn verifies_generated_proof() {
        let leaves: Vec<String> = (0..5).map(|i| sha256_hex(format!("{i}"))).collect();
        let tree = MerkleTree::new(leaves);
        let proof = tree.proof(2).expect("proof");

        let input = VerificationInput {
            root: tree.root(),
            proof,
            cache_warm: true,
        };
        let response = verify(&input);
        assert!(response.verified);
        assert_eq!(response.computed_root, tree.root());
        assert_eq!(response.retrieval_ms, 18);
    }

    #[test]
    fn root_mismatch_is_not_verified() {
        let input = VerificationInput {
            root: sha256_hex("some other root"),
            proof: InclusionProof::new("leaf".to_owned(), vec![sha256_hex("sibling")]),
            cache_warm: false,
        };
        let response = verify(&input);
        assert!(!response.verified);
        assert_eq!(response.retrieval_ms, 58);
        assert!(!response.cache_warm);
    }
}
