//! Serialized schema/data contracts.

/// Commitment generation request/response schema types.
pub mod generate;
/// Inclusion proof schema types.
pub mod proof_sample;
/// Commitment verification request/response schema types.
pub mod verify;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body returned by the request handlers when a call fails.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable failure reason.
    pub error: String,
}
