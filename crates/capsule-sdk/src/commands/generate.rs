//! Commitment generation command implementation.

use std::path::{Path, PathBuf};

use capsule_core::schema::generate::{GenerateRequest, GenerateResponse};
use eyre::Context as _;
use tracing::{info, instrument};

use super::json_file::{read_json, write_json};
use crate::service::CommitmentService;

/// Load a generation request from `path`, or an empty request if no file is given.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub async fn load_generate_request(path: Option<&Path>) -> eyre::Result<GenerateRequest> {
    match path {
        Some(path) => {
            info!(file = ?path, "Loading generation request...");
            read_json(path).await
        }
        None => Ok(GenerateRequest::default()),
    }
}

/// Generate a capsule commitment and write it to `output_file`.
///
/// # Errors
/// Returns an error if the request is rejected or the output cannot be written.
#[instrument(skip_all, fields(output = ?output_file))]
pub async fn generate_commitment(
    service: &CommitmentService,
    request: GenerateRequest,
    output_file: PathBuf,
) -> eyre::Result<GenerateResponse> {
    info!("Generating capsule commitment...");
    let response = service
        .generate(&request)
        .context("Failed to generate commitment")?;

    write_json(&output_file, &response).await?;
    info!(
        capsule_count = response.capsule_count,
        root = %response.root,
        "Commitment written"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn writes_commitment_file() {
        let dir = tempdir().expect("tempdir");
        let output = dir.path().join("commitment.json");

        let request = GenerateRequest {
            dataset_gb: Some(100.0),
            audit_ratio: Some(0.2),
            cache_warm: Some(false),
        };
        let response = generate_commitment(&CommitmentService::default(), request, output.clone())
            .await
            .expect("generate");
        assert_eq!(response.capsule_count, 25);

        let written: GenerateResponse =
            serde_json::from_str(&std::fs::read_to_string(&output).expect("read output"))
                .expect("parse output");
        assert_eq!(written, response);
    }

    #[tokio::test]
    async fn missing_request_file_means_defaults() {
        let request = load_generate_request(None).await.expect("load");
        assert_eq!(request, GenerateRequest::default());
    }

    #[tokio::test]
    async fn loads_request_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("request.json");
        std::fs::write(&path, r#"{"datasetSizeGB": 42, "auditRatio": 1}"#).expect("write");

        let request = load_generate_request(Some(&path)).await.expect("load");
        assert_eq!(request.dataset_gb, Some(42.0));
        assert_eq!(request.audit_ratio, Some(1.0));
        assert_eq!(request.cache_warm, None);
    }

    #[tokio::test]
    async fn rejects_oversized_commitment() {
        let dir = tempdir().expect("tempdir");
        let output = dir.path().join("commitment.json");
        let request = GenerateRequest {
            audit_ratio: Some(525.0),
            ..GenerateRequest::default()
        };

        let err = generate_commitment(&CommitmentService::default(), request, output.clone())
            .await
            .expect_err("limit exceeded");
        assert!(
            format!("{err:?}")
                .contains("auditRatio 525 yields 65625 capsules, more than the limit of 65536"),
            "{err:?}"
        );
        assert!(!output.exists());

        let at_limit = GenerateRequest {
            audit_ratio: Some(524.288),
            ..GenerateRequest::default()
        };
        let response = generate_commitment(&CommitmentService::default(), at_limit, output)
            .await
            .expect("exactly at the limit");
        assert_eq!(response.capsule_count, 65_536);
    }
}
