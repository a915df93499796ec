//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storyreel::{AppState, FlowClient, FlowConfig, ProjectStore, ServerConfig};

/// AI-assisted storyboard authoring service.
#[derive(Debug, Parser)]
#[command(name = "storyreel", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON-formatted logs
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve,
    /// Run the extraction pipeline on a text file and print the result
    Extract {
        /// File holding assistant-reply text to extract from
        file: PathBuf,
        /// Skip schema validation and return raw records only
        #[arg(long)]
        no_validate: bool,
    },
}

/// Run the HTTP service until stopped.
pub async fn run_serve() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let data_dir =
        std::env::var("STORYREEL_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let store = ProjectStore::new(data_dir)?;
    let flow = FlowClient::new(FlowConfig::from_env()?);

    storyreel::serve(ServerConfig::from_env(), AppState::new(store, flow)).await?;
    Ok(())
}

/// Extract storyboard records from a file of assistant-reply text.
pub fn run_extract(file: &Path, validate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(file)?;
    let result = storyreel::extract_storyboard(&text, validate);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
