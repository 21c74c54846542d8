use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use voxdrop_common::{logger, AppConfig};
use voxdrop_server::{AppState, TranscriptionWorkflow};
use voxdrop_transcribe::{
    load_sdk_config, AwsTranscriptionService, HttpResultFetcher, S3BlobStore, UuidTokenSource,
};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "voxdrop")]
#[command(about = "Voxdrop - upload audio to S3 and transcribe it with Amazon Transcribe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;

    if let Some(Commands::Serve { host, port }) = cli.command {
        if let Some(host) = host {
            config.server_host = host;
        }
        if let Some(port) = port {
            config.server_port = port;
        }
    }

    config.validate()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Voxdrop starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Region: {}", config.aws_region);
    tracing::info!("  Bucket: {}", config.bucket);
    tracing::info!(
        "  Credentials: {}",
        if config.has_static_credentials() { "environment" } else { "default chain" }
    );

    let sdk_config = load_sdk_config(&config).await;
    let workflow = TranscriptionWorkflow::new(
        Arc::new(S3BlobStore::new(&sdk_config, config.bucket.clone())),
        Arc::new(AwsTranscriptionService::new(&sdk_config)),
        Arc::new(HttpResultFetcher::new()?),
        Arc::new(UuidTokenSource),
    );

    voxdrop_server::start_server(AppState::new(config, workflow)).await?;

    Ok(())
}
