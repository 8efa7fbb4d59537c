//! Commit subcommands.

use std::path::PathBuf;

use capsule_core::schema::generate::GenerateRequest;

use super::constants::{
    CAPSULE_AUDIT_RATIO, CAPSULE_CACHE_COLD, CAPSULE_COMMITMENT_IN, CAPSULE_COMMITMENT_OUT,
    CAPSULE_DATASET_GB, CAPSULE_REQUEST_FILE, CAPSULE_VERIFY_OUT, DEFAULT_COMMITMENT_FILE,
};
use super::parse_finite;

/// Arguments for `commit generate`.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Size of the synthetic dataset, in gigabytes. Defaults to 500.
    #[arg(long, env = CAPSULE_DATASET_GB, value_parser = parse_finite)]
    pub dataset_gb: Option<f64>,
    /// Audit ratio; each unit yields 125 capsules. Defaults to 10.
    #[arg(long, env = CAPSULE_AUDIT_RATIO, value_parser = parse_finite)]
    pub audit_ratio: Option<f64>,
    /// Simulate a cold retrieval cache.
    #[arg(long, env = CAPSULE_CACHE_COLD, default_value_t = false)]
    pub cache_cold: bool,
    /// JSON generation request. Flags given on the command line override its fields.
    #[arg(long, env = CAPSULE_REQUEST_FILE)]
    pub request: Option<PathBuf>,
    /// Commitment output file.
    #[arg(long, env = CAPSULE_COMMITMENT_OUT, default_value = DEFAULT_COMMITMENT_FILE)]
    pub out: PathBuf,
}

impl GenerateArgs {
    /// Overlay the command-line flags on `request`.
    #[must_use]
    pub fn apply(&self, request: GenerateRequest) -> GenerateRequest {
        GenerateRequest {
            dataset_gb: self.dataset_gb.or(request.dataset_gb),
            audit_ratio: self.audit_ratio.or(request.audit_ratio),
            cache_warm: if self.cache_cold {
                Some(false)
            } else {
                request.cache_warm
            },
        }
    }
}

/// Arguments for `commit verify`.
#[derive(Debug, clap::Args)]
pub struct VerifyArgs {
    /// Commitment to verify: a generation response or a verification request.
    #[arg(long = "in", env = CAPSULE_COMMITMENT_IN, default_value = DEFAULT_COMMITMENT_FILE)]
    pub input: PathBuf,
    /// Simulate a cold retrieval cache, whatever the commitment says.
    #[arg(long, env = CAPSULE_CACHE_COLD, default_value_t = false)]
    pub cache_cold: bool,
    /// Verification result output file.
    #[arg(long, env = CAPSULE_VERIFY_OUT)]
    pub out: Option<PathBuf>,
}

impl VerifyArgs {
    /// Cache flag override, if any.
    #[must_use]
    pub const fn cache_warm(&self) -> Option<bool> {
        if self.cache_cold { Some(false) } else { None }
    }
}

/// Commit command group.
#[derive(Debug, clap::Subcommand)]
pub enum CommitCommands {
    /// Generate a commitment over synthetic capsules and sample one inclusion proof.
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Replay a sampled inclusion proof against its anchor root.
    Verify {
        #[command(flatten)]
        args: VerifyArgs,
    },
}
