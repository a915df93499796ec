//! Storyreel CLI binary.
//!
//! - `storyreel serve` runs the HTTP service.
//! - `storyreel extract <file>` runs the extraction pipeline on a text file
//!   and prints the result as JSON, for debugging prompt changes.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_extract, run_serve};

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    storyreel::init_observability_with_config(
        storyreel::ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    match cli.command {
        Commands::Serve => {
            run_serve().await?;
        }
        Commands::Extract { file, no_validate } => {
            run_extract(&file, !no_validate)?;
        }
    }

    Ok(())
}
