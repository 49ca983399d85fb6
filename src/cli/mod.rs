pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unsplash",
    version,
    about = "Unsplash CLI - fetch random photos and build edited image URLs",
    long_about = r#"Unsplash CLI - fetch random photos and build edited image URLs

Fetches a random photo from the Unsplash API and prints an image URL with
your size, format, fit and crop edits applied.

SETUP:
  Set your access key via environment variable or config:
    export UNSPLASH_ACCESS_KEY=your-key-here
    unsplash config set api.access_key your-key-here

EXAMPLES:
  Fetch a random photo:
    unsplash random
    unsplash r --query mountains --orientation landscape

  Resize and crop:
    unsplash random --width 1920 --height 1080 --crop faces,entropy
    unsplash random --format webp --fit crop --output json

  Edit a URL you already have:
    unsplash url "https://images.unsplash.com/photo-123?ixid=abc" --width 800

  Manage configuration:
    unsplash config show
    unsplash config set defaults.format webp

OUTPUT FORMATS:
  --output text   Human-readable output (default)
  --output json   Machine-readable JSON
  --output quiet  Just the image URL"#,
    after_help = r#"CONFIGURATION:
  Config file: ~/.config/unsplash/config.toml (Linux)

  Formats: gif, jp2, jpg, json, jxr, pjpg, mp4, png, png8, png32, webm, webp, blurhash
  Crop: top, bottom, left, right, faces, entropy, edges
  Orientation: landscape, portrait, squarish"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a random photo and print its edited URL
    ///
    /// Default edits from the [defaults] config table are applied first,
    /// then the ones given on the command line.
    #[command(
        alias = "r",
        after_help = r#"EXAMPLES:
  Basic:
    unsplash random

  Narrow the selection:
    unsplash random --query "northern lights" --orientation portrait

  Ask the image service for a smaller WebP:
    unsplash random --width 640 --format webp

  JSON output:
    unsplash random --output json"#
    )]
    Random(commands::random::RandomArgs),

    /// Apply edits to a raw image URL without calling the API
    #[command(
        alias = "u",
        after_help = r#"EXAMPLES:
  unsplash url "https://images.unsplash.com/photo-1?ixid=x" --width 100 --crop faces,top
  unsplash url "https://images.unsplash.com/photo-1?ixid=x" --no-defaults --format png"#
    )]
    Url(commands::url::UrlArgs),

    /// View or modify configuration
    ///
    /// Changes are saved to the config file immediately.
    #[command(
        alias = "c",
        after_help = r#"EXAMPLES:
  Show all settings:
    unsplash config show

  Get a specific value:
    unsplash config get defaults.format

  Set values:
    unsplash config set api.access_key YOUR_ACCESS_KEY
    unsplash config set defaults.crop faces,entropy
    unsplash config set defaults.width 1920

  Unset a value:
    unsplash config set defaults.width ""

  Show config file path:
    unsplash config path

  Reset to defaults:
    unsplash config reset --force

AVAILABLE SETTINGS:
  api.access_key        - Unsplash access key (client id)
  api.secret_key        - Unsplash secret key (stored, not sent)
  api.base_url          - API root
  defaults.orientation  - landscape, portrait or squarish
  defaults.format       - Output image format
  defaults.width        - Width in pixels
  defaults.height       - Height in pixels
  defaults.fit          - Fit mode (e.g. crop, clip, max)
  defaults.crop         - Comma separated crop regions"#
    )]
    Config(commands::config::ConfigArgs),
}
