//! Command-line interface for the `capsule` CLI application.

mod commit;
pub mod constants;
mod handle;

use std::path::PathBuf;

use capsule_sdk::common::{ServiceConfig, ServiceLimits};
use capsule_sdk::handler::Endpoint;
use clap::Parser;
use eyre::{Result, ensure, eyre};
use http::Method;

pub use self::commit::CommitCommands;
use self::constants::{CAPSULE_MAX_CAPSULES, CAPSULE_SCHEMA_OUT};
pub use self::handle::HandleArgs;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "capsule")]
#[command(about = "Capsule commitment demo tools")]
pub struct Cli {
    /// Service configuration shared by every command.
    #[command(flatten)]
    pub service: ServiceArgs,
    /// CLI top-level command group.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Commitment generation and verification.
    Commit {
        /// Commit subcommands.
        #[command(subcommand)]
        command: CommitCommands,
    },
    /// Run one request body through the HTTP-style handler.
    Handle {
        #[command(flatten)]
        args: HandleArgs,
    },
    /// Write the JSON Schemas of the wire types.
    Schema {
        /// Output file. Printed to stdout when omitted.
        #[arg(long, env = CAPSULE_SCHEMA_OUT)]
        out: Option<PathBuf>,
    },
}

/// Service arguments accepted by every command.
#[derive(Debug, clap::Args)]
pub struct ServiceArgs {
    /// Maximum number of capsules a single commitment may hold.
    #[arg(
        long,
        global = true,
        env = CAPSULE_MAX_CAPSULES,
        default_value_t = capsule_sdk::common::DEFAULT_MAX_CAPSULE_COUNT,
        value_parser = parse_max_capsules
    )]
    pub max_capsules: u64,
}

impl From<ServiceArgs> for ServiceConfig {
    fn from(args: ServiceArgs) -> Self {
        Self {
            limits: ServiceLimits {
                max_capsule_count: args.max_capsules,
            },
            ..Self::default()
        }
    }
}

pub fn parse_endpoint(s: &str) -> Result<Endpoint> {
    match s {
        "generate" => Ok(Endpoint::Generate),
        "verify" => Ok(Endpoint::Verify),
        other => Err(eyre!(
            "Invalid endpoint: {other}. Expected 'generate' or 'verify'."
        )),
    }
}

pub fn parse_method(s: &str) -> Result<Method> {
    Method::from_bytes(s.to_ascii_uppercase().as_bytes())
        .map_err(|e| eyre!("Invalid HTTP method: {s}. {e}"))
}

pub fn parse_finite(s: &str) -> Result<f64> {
    let value: f64 = s
        .parse()
        .map_err(|e| eyre!("Invalid number: {s}. {e}"))?;
    ensure!(value.is_finite(), "Number must be finite, got {s}");
    Ok(value)
}

pub fn parse_max_capsules(s: &str) -> Result<u64> {
    let value: u64 = s
        .parse()
        .map_err(|e| eyre!("Invalid capsule limit: {s}. {e}"))?;
    ensure!(value >= 1, "Capsule limit must be at least 1");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use capsule_core::schema::generate::GenerateRequest;
    use clap::Parser as _;

    use super::*;

    #[test]
    fn endpoint_parse() {
        assert_eq!(
            parse_endpoint("generate").expect("generate should parse"),
            Endpoint::Generate
        );
        assert_eq!(
            parse_endpoint("verify").expect("verify should parse"),
            Endpoint::Verify
        );
        assert!(parse_endpoint("Verify").is_err());
    }

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!(parse_method("post").expect("post"), Method::POST);
        assert_eq!(parse_method("GET").expect("GET"), Method::GET);
        assert!(parse_method("NOT A METHOD").is_err());
    }

    #[test]
    fn finite_parse() {
        assert_eq!(parse_finite("0.5").expect("0.5").to_bits(), 0.5_f64.to_bits());
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("ten").is_err());
    }

    #[test]
    fn max_capsules_parse() {
        assert_eq!(parse_max_capsules("1024").expect("1024"), 1024);
        assert!(parse_max_capsules("0").is_err());
        assert!(parse_max_capsules("-1").is_err());
    }

    #[test]
    fn generate_flags_override_request_file() {
        let cli = Cli::try_parse_from([
            "capsule",
            "commit",
            "generate",
            "--audit-ratio",
            "2",
            "--cache-cold",
        ])
        .expect("cli should parse");

        let Commands::Commit {
            command: CommitCommands::Generate { args },
        } = cli.command
        else {
            panic!("expected commit generate");
        };

        let from_file = GenerateRequest {
            dataset_gb: Some(64.0),
            audit_ratio: Some(1.0),
            cache_warm: Some(true),
        };
        let merged = args.apply(from_file);
        assert_eq!(
            merged,
            GenerateRequest {
                dataset_gb: Some(64.0),
                audit_ratio: Some(2.0),
                cache_warm: Some(false),
            }
        );
        assert_eq!(args.out, PathBuf::from(constants::DEFAULT_COMMITMENT_FILE));
    }

    #[test]
    fn verify_cache_override() {
        let cli = Cli::try_parse_from(["capsule", "commit", "verify", "--in", "c.json"])
            .expect("cli should parse");
        let Commands::Commit {
            command: CommitCommands::Verify { args },
        } = cli.command
        else {
            panic!("expected commit verify");
        };
        assert_eq!(args.input, PathBuf::from("c.json"));
        assert_eq!(args.cache_warm(), None);

        let cli = Cli::try_parse_from(["capsule", "commit", "verify", "--cache-cold"])
            .expect("cli should parse");
        let Commands::Commit {
            command: CommitCommands::Verify { args },
        } = cli.command
        else {
            panic!("expected commit verify");
        };
        assert_eq!(args.cache_warm(), Some(false));
    }

    #[test]
    fn handle_defaults_to_post() {
        let cli = Cli::try_parse_from(["capsule", "handle", "--endpoint", "verify"])
            .expect("cli should parse");
        let Commands::Handle { args } = cli.command else {
            panic!("expected handle");
        };
        assert_eq!(args.endpoint, Endpoint::Verify);
        assert_eq!(args.method, Method::POST);
        assert!(args.body.is_none());
    }

    #[test]
    fn service_limit_flows_into_config() {
        let cli = Cli::try_parse_from(["capsule", "schema", "--max-capsules", "16"])
            .expect("cli should parse");
        let config = ServiceConfig::from(cli.service);
        assert_eq!(config.limits.max_capsule_count, 16);
    }
}
