mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stacksync_client::PortainerClient;
use stacksync_core::{Outcome, reconcile};

use cli::Cli;
use output::{failure_json, print_error, print_success, set_output};

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("STACKSYNC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let host = cli
        .host
        .context("No Portainer host configured. Use --host or set STACKSYNC_HOST")?;
    let api_key = cli
        .api_key
        .context("No API key configured. Use --api-key or set STACKSYNC_API_KEY")?;
    let endpoint_id = cli
        .endpoint_id
        .context("No endpoint configured. Use --endpoint-id or set STACKSYNC_ENDPOINT_ID")?;

    let client = PortainerClient::new(&host, api_key)
        .with_context(|| format!("Invalid Portainer host URL: {host}"))?;
    let intent = cli.command.into_intent(endpoint_id);
    debug!(action = %intent.action, endpoint_id, "reconciling");

    match reconcile(&client, &intent).await {
        Ok(outcome) => {
            if let Outcome::Listed { stacks } = &outcome {
                let json = serde_json::to_string(stacks).context("Failed to encode stack list")?;
                set_output("stacks", &json)?;
            }
            print_success(&outcome.summary());
            Ok(())
        }
        Err(err) => anyhow::bail!(failure_json(&err)),
    }
}
