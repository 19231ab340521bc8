//! Friendnet CLI binary.

use anyhow::Result;
use friendnet::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the friendnet CLI.
///
/// Uses tokio's current_thread runtime; the session is sequential.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for piped output.
    // Example: RUST_LOG=friendnet=debug friendnet < script.txt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("friendnet=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting friendnet session");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Friendnet session completed");
    Ok(())
}
