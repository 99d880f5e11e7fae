mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rackview_api::InventoryClient;
use rackview_core::{CoreError, DashboardController, FileSessionStore};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = rackview_config::load_config_or_default();
    let backend = cfg.resolve_backend(cli.global.backend.as_deref())?;
    let transport = cfg.transport(cli.global.insecure, cli.global.timeout);

    let client =
        InventoryClient::new(backend.as_str(), &transport).map_err(CoreError::from)?;
    let store = FileSessionStore::default_location()?;
    let mut controller =
        DashboardController::new(client, Box::new(store)).map_err(CliError::from)?;

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &mut controller, &cli.global).await
}
