//! HTTP-style request handling.
//!
//! Transport wiring (routing, CORS, auth) lives outside this crate. A handler here takes a
//! request for one endpoint and always produces a JSON response:
//! `405` for anything but `POST`, `400` for malformed or invalid payloads and `500` otherwise.

use std::fmt;

use capsule_core::schema::ErrorResponse;
use capsule_core::schema::generate::GenerateRequest;
use capsule_core::schema::verify::VerifyRequest;
use http::header::{ALLOW, CONTENT_TYPE};
use http::{HeaderValue, Method, Request, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::error::CommitmentError;
use crate::service::CommitmentService;

const APPLICATION_JSON: &str = "application/json";
/// Sent when an error body itself cannot be encoded.
const INTERNAL_ERROR_BODY: &[u8] = br#"{"error":"Internal error"}"#;

/// Endpoints served by [`handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Commitment generation.
    Generate,
    /// Inclusion proof verification.
    Verify,
}

impl Endpoint {
    /// Lowercase endpoint name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Verify => "verify",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failures of a single request.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Only `POST` is served.
    #[error("Method {0} is not allowed, use POST")]
    MethodNotAllowed(Method),

    /// The body is not the expected JSON document.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Generation or verification rejected the payload, or failed internally.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

impl HandlerError {
    /// Status code reported to the caller.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedBody(_) | Self::Commitment(CommitmentError::InvalidPayload(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Commitment(CommitmentError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Serve one request for `endpoint`.
#[instrument(skip_all, fields(endpoint = %endpoint, method = %request.method()))]
pub fn handle(
    service: &CommitmentService,
    endpoint: Endpoint,
    request: &Request<Vec<u8>>,
) -> Response<Vec<u8>> {
    match dispatch(service, endpoint, request) {
        Ok(body) => {
            info!(status = %StatusCode::OK, "Request served");
            json_response(StatusCode::OK, body)
        }
        Err(err) => {
            let status = err.status();
            warn!(status = %status, error = %err, "Request rejected");
            error_response(&err)
        }
    }
}

fn dispatch(
    service: &CommitmentService,
    endpoint: Endpoint,
    request: &Request<Vec<u8>>,
) -> Result<Vec<u8>, HandlerError> {
    if request.method() != Method::POST {
        return Err(HandlerError::MethodNotAllowed(request.method().clone()));
    }

    let body = request.body();
    match endpoint {
        Endpoint::Generate => {
            let payload = if body.iter().all(u8::is_ascii_whitespace) {
                GenerateRequest::default()
            } else {
                serde_json::from_slice(body)?
            };
            encode(&service.generate(&payload)?)
        }
        Endpoint::Verify => {
            let payload: VerifyRequest = serde_json::from_slice(body)?;
            encode(&service.verify(payload)?)
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, HandlerError> {
    serde_json::to_vec(value)
        .map_err(|e| HandlerError::Commitment(CommitmentError::Internal(e.to_string())))
}

fn error_response(err: &HandlerError) -> Response<Vec<u8>> {
    let body = error_body(&ErrorResponse {
        error: err.to_string(),
    });
    let mut response = json_response(err.status(), body);
    if matches!(err, HandlerError::MethodNotAllowed(_)) {
        response
            .headers_mut()
            .insert(ALLOW, HeaderValue::from_static("POST"));
    }
    response
}

fn error_body<T: Serialize>(body: &T) -> Vec<u8> {
    serde_json::to_vec(body).unwrap_or_else(|e| {
        error!(error = %e, "Failed to encode error body");
        INTERNAL_ERROR_BODY.to_vec()
    })
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response<Vec<u8>> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    response
}
