//! Handle subcommand.

use std::path::PathBuf;

use capsule_sdk::handler::Endpoint;
use http::Method;

use super::constants::{
    CAPSULE_BODY_FILE, CAPSULE_ENDPOINT, CAPSULE_METHOD, CAPSULE_RESPONSE_OUT, DEFAULT_METHOD,
};
use super::{parse_endpoint, parse_method};

/// Arguments for `handle`.
#[derive(Debug, clap::Args)]
pub struct HandleArgs {
    /// Endpoint to call (generate or verify).
    #[arg(long, env = CAPSULE_ENDPOINT, value_parser = parse_endpoint)]
    pub endpoint: Endpoint,
    /// HTTP method of the request.
    #[arg(
        long,
        env = CAPSULE_METHOD,
        default_value = DEFAULT_METHOD,
        value_parser = parse_method
    )]
    pub method: Method,
    /// JSON request body. An absent file sends an empty body.
    #[arg(long, env = CAPSULE_BODY_FILE)]
    pub body: Option<PathBuf>,
    /// Response body output file. Printed to stdout when omitted.
    #[arg(long, env = CAPSULE_RESPONSE_OUT)]
    pub out: Option<PathBuf>,
}
