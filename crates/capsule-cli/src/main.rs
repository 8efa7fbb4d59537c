//! Capsule CLI Application

mod cli;

use capsule_sdk::CommitmentService;
use capsule_sdk::commands::{
    generate_commitment, handle_request_file, load_generate_request, verify_commitment,
    write_schemas,
};
use clap::Parser as _;
use cli::{Cli, CommitCommands, Commands};

fn init_tracing() -> eyre::Result<()> {
    #[cfg(feature = "tokio-console")]
    {
        // tokio-console: layers the console subscriber with fmt
        use tracing_subscriber::prelude::*;
        tracing_subscriber::registry()
            .with(console_subscriber::spawn())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                    ),
            )
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;
    }

    #[cfg(not(feature = "tokio-console"))]
    {
        // stdout is reserved for response bodies and schemas
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .with_target(false)
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;
    }

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();
    let service = CommitmentService::new(cli.service.into());

    let res = match cli.command {
        Commands::Commit { command } => match command {
            CommitCommands::Generate { args } => {
                async {
                    let request = load_generate_request(args.request.as_deref()).await?;
                    generate_commitment(&service, args.apply(request), args.out)
                        .await
                        .map(|_| ())
                }
                .await
            }
            CommitCommands::Verify { args } => {
                let cache_warm = args.cache_warm();
                verify_commitment(&service, args.input, cache_warm, args.out)
                    .await
                    .map(|_| ())
            }
        },
        Commands::Handle { args } => {
            handle_request_file(&service, args.endpoint, args.method, args.body, args.out)
                .await
                .map(|_| ())
        }
        Commands::Schema { out } => write_schemas(out).await,
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
