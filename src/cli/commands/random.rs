use anyhow::Result;
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::{print_image, AdjustArgs, OutputFormat};
use unsplash_cli::api::UnsplashClient;
use unsplash_cli::config::Config;
use unsplash_cli::core::Orientation;

#[derive(Args)]
pub struct RandomArgs {
    /// Limit the selection to photos matching these search terms
    #[arg(short, long)]
    pub query: Option<String>,

    /// Photo orientation (landscape, portrait, squarish)
    #[arg(long)]
    pub orientation: Option<Orientation>,

    #[command(flatten)]
    pub adjust: AdjustArgs,

    /// Output format (text, json, quiet)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

pub async fn run(args: RandomArgs, config: &Config) -> Result<()> {
    let client = UnsplashClient::from_config(config)?;
    let orientation = args.orientation.or(config.defaults.orientation);

    // Show progress
    let pb = if args.output == OutputFormat::Text {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.yellow} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(match args.query.as_deref() {
            Some(query) => format!("Fetching a random photo of \"{}\"...", query),
            None => "Fetching a random photo...".to_string(),
        });
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let photo = match client.fetch_random_photo(args.query.as_deref(), orientation).await {
        Ok(photo) => photo,
        Err(e) => {
            if let Some(pb) = pb {
                pb.finish_with_message(format!("{} Fetch failed", "✗".red()));
            }
            return Err(e.into());
        }
    };

    if let Some(pb) = &pb {
        pb.finish_with_message(format!("{} Fetched photo", "✓".green()));
    }

    let mut image = photo.to_image_parameters();
    args.adjust.apply(&mut image, config);

    print_image(&image, Some(&photo), args.output)
}
