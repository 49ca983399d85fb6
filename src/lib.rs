//! Small client for the Unsplash API.
//!
//! [`api::UnsplashClient`] fetches random photos and [`core::ImageParameters`]
//! turns a photo's raw URL into an edited image URL:
//!
//! ```no_run
//! use unsplash_cli::api::UnsplashClient;
//! use unsplash_cli::core::{Adjustment, Crop, Orientation};
//!
//! # async fn demo() -> Result<(), unsplash_cli::core::UnsplashError> {
//! let client = UnsplashClient::new("your-access-key");
//! let mut image = client.get_random_image(Some("mountains"), Some(Orientation::Landscape)).await?;
//! image.adjust(Adjustment::new().with_width(1920).with_crop([Crop::Entropy]));
//! println!("{} by {}", image.url(), image.owner_name().unwrap_or("unknown"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod core;
mod http_client;
