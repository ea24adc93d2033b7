use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsdeck::app::AppContext;
use newsdeck::cli::{commands, Cli, Commands};
use newsdeck::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Headlines {
            category,
            search,
            page_size,
        } => {
            commands::print_headlines(&ctx, category, search, page_size).await?;
        }
        Commands::Categories => {
            commands::list_categories();
        }
        Commands::Tui => {
            newsdeck::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
