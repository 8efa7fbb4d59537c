//! Capsule commitment generation and verification.
//!
//! [`CommitmentService`] is the entry point: it owns the generator defaults and limits and is
//! passed explicitly to the [`handler`] and [`commands`] layers.

pub mod commands;
pub mod common;
pub mod handler;

mod error;
mod generator;
mod latency;
mod service;
mod verifier;

pub use error::CommitmentError;
pub use generator::{
    CAPSULES_PER_AUDIT_RATIO, GeneratorParams, SAMPLE_INDEX, capsule_count, sample_index,
};
pub use latency::{BASE_RETRIEVAL_MS, COLD_CACHE_FACTOR, simulated_retrieval_ms};
pub use service::CommitmentService;
pub use verifier::VerificationInput;
