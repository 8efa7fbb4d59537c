//! Run a single request file through the HTTP-style handler.

use std::path::PathBuf;

use eyre::Context as _;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode};
use tracing::{info, instrument, warn};

use crate::handler::{self, Endpoint};
use crate::service::CommitmentService;

/// Serve `body_file` (or an empty body) as a `method` request to `endpoint`.
///
/// The response body goes to `output_file`, or to stdout when none is given. Client and server
/// errors are reported through the returned status, not as an `Err`.
///
/// # Errors
/// Returns an error if the body cannot be read or the response cannot be written.
#[instrument(skip_all, fields(endpoint = %endpoint, method = %method))]
pub async fn handle_request_file(
    service: &CommitmentService,
    endpoint: Endpoint,
    method: Method,
    body_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
) -> eyre::Result<StatusCode> {
    let body = match body_file {
        Some(path) => tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read request body {}", path.display()))?,
        None => Vec::new(),
    };

    let request = Request::builder()
        .method(method)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .context("Failed to build request")?;
    let response = handler::handle(service, endpoint, &request);
    let status = response.status();

    match output_file {
        Some(path) => tokio::fs::write(&path, response.body())
            .await
            .with_context(|| format!("Failed to write response {}", path.display()))?,
        None => print_body(response.body()),
    }

    if status.is_success() {
        info!(status = %status, "Handler responded");
    } else {
        warn!(status = %status, "Handler responded with an error");
    }
    Ok(status)
}

#[allow(clippy::print_stdout, reason = "Prints the response body to stdout")]
fn print_body(body: &[u8]) {
    println!("{}", String::from_utf8_lossy(body));
}
