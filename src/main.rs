use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{Cli, Commands};
use unsplash_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load_or_create()?;

    match cli.command {
        Commands::Random(args) => {
            cli::commands::random::run(args, &config).await?;
        }
        Commands::Url(args) => {
            cli::commands::url::run(args, &config)?;
        }
        Commands::Config(args) => {
            cli::commands::config::run(args, &mut config)?;
        }
    }

    Ok(())
}
