use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use milk_config::MilkConfig;
use milk_session::{FileStore, KeyValueStore};

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("milk error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = MilkConfig::load_with_dotenv().context("failed to load ceialmilk configuration")?;
    let storage = open_storage(&config)?;

    // Theme is local state only; no API round trip needed.
    if let cli::Commands::Theme { action } = &cli.command {
        return commands::theme::handle(action, storage, &flags);
    }

    let ctx = context::AppContext::init(config, storage)
        .await
        .context("failed to initialize ceialmilk session")?;

    let result = commands::dispatch::dispatch(cli.command, &ctx, &flags).await;
    let persisted = ctx.persist_session();
    result?;
    persisted
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MILK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn open_storage(config: &MilkConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let path = config
        .storage
        .resolved_path()
        .context("cannot locate the state file; set MILK_STORAGE__PATH")?;
    tracing::debug!(path = %path.display(), "opening state file");
    Ok(Arc::new(FileStore::open(path)) as Arc<dyn KeyValueStore>)
}
