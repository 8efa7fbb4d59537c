//! Service handle tying the generator and verifier to one configuration.

use capsule_core::schema::generate::{GenerateRequest, GenerateResponse};
use capsule_core::schema::verify::{VerifyRequest, VerifyResponse};
use tracing::info;

use crate::common::ServiceConfig;
use crate::error::CommitmentError;
use crate::generator::{self, GeneratorParams};
use crate::verifier::{self, VerificationInput};

/// Handle shared by the request handlers and commands.
///
/// Built once at start-up and passed by reference. It holds no mutable state, so concurrent
/// calls never interact.
#[derive(Debug, Clone, Default)]
pub struct CommitmentService {
    config: ServiceConfig,
}

impl CommitmentService {
    /// Create a service with the given configuration.
    #[must_use]
    pub const fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Generate a commitment over synthetic capsules.
    ///
    /// # Errors
    /// Returns [`CommitmentError::InvalidPayload`] if the parameters are not finite or the
    /// capsule count exceeds the configured limit.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, CommitmentError> {
        let params = GeneratorParams::resolve(request, &self.config.defaults);
        let response = generator::generate(&params, &self.config.limits)?;
        info!(
            capsule_count = response.capsule_count,
            root = %response.root,
            "Generated capsule commitment"
        );
        Ok(response)
    }

    /// Verify an inclusion proof against its claimed root.
    ///
    /// A proof that does not reproduce the root is a successful call with `verified = false`.
    ///
    /// # Errors
    /// Returns [`CommitmentError::InvalidPayload`] if the request is malformed.
    pub fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, CommitmentError> {
        let input = VerificationInput::from_request(request, self.config.defaults.cache_warm)?;
        let response = verifier::verify(&input);
        info!(
            verified = response.verified,
            retrieval_ms = response.retrieval_ms,
            "Verified capsule commitment"
        );
        Ok(response)
    }
}
