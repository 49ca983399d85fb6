use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use unsplash_cli::config::{Config, ACCESS_KEY_ENV};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Config key (e.g., api.base_url, defaults.format)
        key: String,
    },

    /// Set a configuration value (an empty value unsets it)
    Set {
        /// Config key (e.g., api.access_key, defaults.crop)
        key: String,
        /// Value to set
        value: String,
    },

    /// Show the config file path
    Path,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, config: &mut Config) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(config),
        Some(ConfigCommand::Get { key }) => get_config(&key, config),
        Some(ConfigCommand::Set { key, value }) => set_config(&key, &value, config),
        Some(ConfigCommand::Path) => show_path(config),
        Some(ConfigCommand::Reset { force }) => reset_config(force, config),
    }
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration".cyan().bold());
    println!("{}", "=".repeat(50));

    let mut section = "";
    for &key in Config::keys() {
        let (table, name) = key.split_once('.').unwrap_or(("", key));
        if table != section {
            println!();
            println!("[{}]", table.yellow());
            section = table;
        }
        let value = config
            .get(key)
            .unwrap_or_else(|| "(not set)".dimmed().to_string());
        println!("  {} = {}", name.bold(), value);
    }
    println!();

    println!("{}", format!("Config file: {}", config.config_path.display()).dimmed());

    Ok(())
}

fn get_config(key: &str, config: &Config) -> Result<()> {
    if !Config::keys().contains(&key) {
        eprintln!("{}: Unknown config key '{}'", "Error".red().bold(), key);
        eprintln!();
        eprintln!("Available keys:");
        for k in Config::keys() {
            eprintln!("  {}", k);
        }
        return Ok(());
    }

    match config.get(key) {
        Some(value) => println!("{}", value),
        None => println!("{}", "(not set)".dimmed()),
    }
    Ok(())
}

fn set_config(key: &str, value: &str, config: &mut Config) -> Result<()> {
    config.set(key, value)?;
    config.save()?;

    if value.is_empty() {
        println!("{} Unset {}", "✓".green(), key.cyan());
    } else {
        println!("{} Set {} = {}", "✓".green(), key.cyan(), config.get(key).unwrap_or_default());
    }
    Ok(())
}

fn show_path(config: &Config) -> Result<()> {
    println!("{}", config.config_path.display());
    Ok(())
}

fn reset_config(force: bool, config: &mut Config) -> Result<()> {
    if !force {
        eprintln!(
            "{}: This will reset all configuration to defaults. Use --force to confirm.",
            "Warning".yellow().bold()
        );
        return Ok(());
    }

    // Preserve the path
    let path = config.config_path.clone();

    *config = Config::default();
    config.config_path = path;
    config.save()?;
    config.apply_env();

    if config.access_key().is_some() {
        println!("{}", format!("{} is still set and overrides api.access_key", ACCESS_KEY_ENV).dimmed());
    }

    println!("{} Configuration reset to defaults", "✓".green());
    Ok(())
}
