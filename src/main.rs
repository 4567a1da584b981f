use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod cli;
mod home;
mod layout;
mod render;
mod server;
mod view;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let environment = view::PageView::capture().environment;
            info!(%environment, "starting devops-assessment");
            server::serve(&cli.hostname, cli.port).await
        }
        Commands::Render { output } => export(output.as_deref()).await,
    }
}

async fn export(output: Option<&Path>) -> Result<()> {
    let doc = render::render_page().await;
    match output {
        Some(path) => {
            tokio::fs::write(path, doc)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "page exported");
        }
        None => println!("{doc}"),
    }
    Ok(())
}

// Logs go to stderr so `render` output on stdout stays a clean document.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
