pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsdeck")]
#[command(about = "A terminal news reader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print headlines to stdout
    Headlines {
        /// Category filter (see `newsdeck categories`)
        #[arg(short, long)]
        category: Option<String>,

        /// Search text
        #[arg(short, long)]
        search: Option<String>,

        /// Number of articles to request
        #[arg(short, long)]
        page_size: Option<u32>,
    },
    /// List the categories the news API accepts
    Categories,
    /// Launch the TUI (the default when no command is given)
    Tui,
}
