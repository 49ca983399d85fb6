use anyhow::Result;
use clap::Args;

use super::{print_image, AdjustArgs, OutputFormat};
use unsplash_cli::config::Config;
use unsplash_cli::core::ImageParameters;

#[derive(Args)]
pub struct UrlArgs {
    /// Raw image URL, as returned in a photo's `urls.raw`
    #[arg(required = true)]
    pub raw_url: String,

    /// Photographer to credit in the output
    #[arg(long)]
    pub owner: Option<String>,

    #[command(flatten)]
    pub adjust: AdjustArgs,

    /// Output format (text, json, quiet)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

pub fn run(args: UrlArgs, config: &Config) -> Result<()> {
    let mut image = match args.owner {
        Some(owner) => ImageParameters::with_owner(args.raw_url, owner),
        None => ImageParameters::new(args.raw_url),
    };

    args.adjust.apply(&mut image, config);
    tracing::debug!("Built image URL: {}", image);

    print_image(&image, None, args.output)
}
