use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meeting_organizer::cli::{run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the printed table
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
