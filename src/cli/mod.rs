pub mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::interval::parse_interval;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "feedwheel")]
#[command(about = "A rotating RSS/Atom headline reader", long_about = None, version)]
pub struct Cli {
    /// Config file (default: ~/.config/feedwheel/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Source list file, one feed address per line
    #[arg(short, long, global = true)]
    pub feeds: Option<PathBuf>,

    /// Time each story stays on screen (e.g., "10s", "1m")
    #[arg(long, global = true, value_parser = parse_interval)]
    pub advance: Option<Duration>,

    /// Time between feed refreshes (e.g., "30m", "1h")
    #[arg(long, global = true, value_parser = parse_interval)]
    pub refresh: Option<Duration>,

    /// Number of parallel workers for fetching feeds
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI (default)
    Tui,
    /// Rotate through stories on stdout until Ctrl-C
    Watch,
    /// Fetch every feed once and print the stories
    Fetch {
        /// Print stories as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the configured source list
    Sources,
}

impl Cli {
    /// The subcommand to run, `tui` when none was given.
    pub fn selected(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }

    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.feeds {
            config.feeds.path = path.clone();
        }
        if let Some(advance) = self.advance {
            config.rotation.advance_interval = advance;
        }
        if let Some(refresh) = self.refresh {
            config.rotation.refresh_interval = refresh;
        }
        if let Some(workers) = self.workers {
            config.fetch.workers = workers;
        }
    }
}
