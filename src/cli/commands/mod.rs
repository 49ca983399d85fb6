pub mod config;
pub mod random;
pub mod url;

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde_json::json;

use unsplash_cli::api::RandomPhoto;
use unsplash_cli::config::Config;
use unsplash_cli::core::{Adjustment, Crop, ImageFormat, ImageParameters};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Quiet,
}

/// Image edits shared by the `random` and `url` commands
#[derive(Args, Debug, Default)]
pub struct AdjustArgs {
    /// Width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Image format (gif, jp2, jpg, json, jxr, pjpg, mp4, png, png8, png32, webm, webp, blurhash)
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Fit mode passed through to the image service (e.g. crop, clip, max)
    #[arg(long)]
    pub fit: Option<String>,

    /// Crop regions, comma separated (top, bottom, left, right, faces, entropy, edges)
    #[arg(long, value_delimiter = ',')]
    pub crop: Vec<Crop>,

    /// Ignore the [defaults] table of the config file
    #[arg(long)]
    pub no_defaults: bool,
}

impl AdjustArgs {
    pub fn to_adjustment(&self) -> Adjustment {
        Adjustment {
            width: self.width,
            height: self.height,
            format: self.format,
            crop: if self.crop.is_empty() {
                None
            } else {
                Some(self.crop.clone())
            },
            fit: self.fit.clone(),
        }
    }

    /// Apply config defaults (unless disabled), then the command-line edits
    pub fn apply(&self, image: &mut ImageParameters, config: &Config) {
        if !self.no_defaults {
            image.adjust(config.default_adjustment());
        }
        image.adjust(self.to_adjustment());
    }
}

pub fn print_image(image: &ImageParameters, photo: Option<&RandomPhoto>, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let value = json!({
                "url": image.url(),
                "base_url": image.base_url(),
                "owner_name": image.owner_name(),
                "edits": image.edits(),
                "crop": image.crop(),
                "photo": photo,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Quiet => {
            println!("{}", image.url());
        }
        OutputFormat::Text => {
            println!();
            println!("{}: {}", "URL".cyan().bold(), image.url());
            if let Some(owner) = image.owner_name() {
                let username = photo
                    .and_then(|p| p.user.as_ref())
                    .and_then(|u| u.username.as_deref());
                match username {
                    Some(username) => println!("{}: {} (@{})", "Photographer".cyan().bold(), owner, username),
                    None => println!("{}: {}", "Photographer".cyan().bold(), owner),
                }
            }
            if let Some(photo) = photo {
                if let Some(description) = photo.description.as_deref().or(photo.alt_description.as_deref()) {
                    println!("{}: {}", "Description".cyan().bold(), description);
                }
                if let Some(page) = photo.links.as_ref().and_then(|l| l.html.as_deref()) {
                    println!("{}: {}", "Page".cyan().bold(), page);
                }
            }
            if image.edits().is_empty() && image.crop().is_empty() {
                println!("{}", "(no edits applied)".dimmed());
            }
        }
    }
    Ok(())
}
