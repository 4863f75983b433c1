use anyhow::Result;
use clap::Parser;
use tender_desk::cli::Cli;
use tender_desk::commands;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::resolve_config(&cli)?;
    info!(
        criterion = %config.criterion,
        shipments = ?config.shipments_path,
        carriers = ?config.carriers_path,
        "Tendering desk starting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli, &config, &mut out)
}
