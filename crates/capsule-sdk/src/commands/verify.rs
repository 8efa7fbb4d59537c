//! Commitment verification command implementation.

use std::path::PathBuf;

use capsule_core::schema::verify::{VerifyRequest, VerifyResponse};
use eyre::{Context as _, ensure};
use tracing::{info, instrument, warn};

use super::json_file::{read_json, write_json};
use crate::service::CommitmentService;

/// Verify the commitment stored in `input_file`.
///
/// The file may hold a verification request or an unmodified generation response.
/// `cache_warm` overrides the cache flag found in the file.
///
/// # Errors
/// Returns an error if the file cannot be read, the payload is invalid, or the proof does not
/// reproduce the anchor root. The result is written to `output_file` before the last check.
#[instrument(skip_all, fields(input = ?input_file))]
pub async fn verify_commitment(
    service: &CommitmentService,
    input_file: PathBuf,
    cache_warm: Option<bool>,
    output_file: Option<PathBuf>,
) -> eyre::Result<VerifyResponse> {
    info!("Loading commitment...");
    let mut request: VerifyRequest = read_json(&input_file).await?;
    if cache_warm.is_some() {
        request.cache_warm = cache_warm;
    }

    let response = service
        .verify(request)
        .context("Failed to verify commitment")?;

    if let Some(output_file) = output_file {
        write_json(&output_file, &response).await?;
    }

    if response.verified {
        info!(retrieval_ms = response.retrieval_ms, "Commitment VALID");
    } else {
        warn!(
            computed_root = %response.computed_root,
            "Commitment INVALID"
        );
    }
    ensure!(
        response.verified,
        "Inclusion proof does not reproduce the anchor root"
    );

    Ok(response)
}
