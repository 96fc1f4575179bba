//! Tallyweb main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tallyweb_api::start_server;
use tallyweb_config::{Config, ConfigError};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "tallyweb")]
#[command(author = "Tallyweb Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A small web form for tallying signed amounts against numbered item slots", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, load_error) = match Config::load(args.config.clone()) {
        Ok(config) => (config, None),
        Err(e @ ConfigError::FileNotFound { .. }) => (Config::default(), Some(e)),
        Err(e) => {
            for suggestion in e.suggestions() {
                eprintln!("  - {}", suggestion);
            }
            return Err(e).with_context(|| format!("Failed to load configuration from {}", args.config.display()));
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str())).init();

    match load_error {
        Some(e) => log::warn!("{}; using built-in defaults", e),
        None => log::info!("Config loaded from {}", args.config.display()),
    }
    log::info!(
        "Ledger mode={}, session idle timeout={}m",
        config.ledger.mode,
        config.session.idle_timeout_minutes
    );

    let rt = Runtime::new().context("Failed to start async runtime")?;
    rt.block_on(start_server(config)).context("Server error")?;

    Ok(())
}
