use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use statls::app;
use statls::config::{Cli, Config};
use statls::error::AppError;
use statls::infra::fs::RealFsClient;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match try_main(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let config = Config::resolve(cli, |key| std::env::var(key).ok(), stdout.is_terminal())?;
    let mut out = stdout.lock();
    app::run(&config, Arc::new(RealFsClient), &mut out).await?;

    Ok(())
}

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statls=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
