use anyhow::Result;
use clap::Parser;
use msgboard::app::App;
use msgboard::cli::Cli;
use msgboard::config::AppConfig;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so the terminal UI is not overwritten
    init_tracing(cli.debug)?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    tracing::info!("Starting msgboard against {}", config.base_url);

    let mut app = App::new(&config)?;
    app.run().await?;

    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let log_dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get data directory"))?
        .join("msgboard");
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("msgboard.log"))?;

    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    Ok(())
}
