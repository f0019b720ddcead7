use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedwheel::app::AppContext;
use feedwheel::cli::{commands, Cli, Commands};
use feedwheel::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.selected();

    // Logs go to stderr; the TUI stays quiet unless RUST_LOG asks otherwise.
    let default_filter = match command {
        Commands::Tui => "off",
        _ => "warn",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    match command {
        Commands::Sources => {
            commands::sources(&config.feeds.path)?;
        }
        Commands::Fetch { json } => {
            let ctx = AppContext::new(config)?;
            commands::fetch(&ctx, json).await?;
        }
        Commands::Watch => {
            let ctx = AppContext::new(config)?;
            commands::watch(&ctx).await?;
        }
        Commands::Tui => {
            let ctx = AppContext::new(config)?;
            feedwheel::tui::run(&ctx).await?;
        }
    }

    Ok(())
}
