use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::UnsplashError;

/// Output encodings accepted by the Unsplash image service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Gif,
    Jp2,
    Jpg,
    Json,
    Jxr,
    Pjpg,
    Mp4,
    Png,
    Png8,
    Png32,
    Webm,
    Webp,
    Blurhash,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 13] = [
        ImageFormat::Gif,
        ImageFormat::Jp2,
        ImageFormat::Jpg,
        ImageFormat::Json,
        ImageFormat::Jxr,
        ImageFormat::Pjpg,
        ImageFormat::Mp4,
        ImageFormat::Png,
        ImageFormat::Png8,
        ImageFormat::Png32,
        ImageFormat::Webm,
        ImageFormat::Webp,
        ImageFormat::Blurhash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Jp2 => "jp2",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Json => "json",
            ImageFormat::Jxr => "jxr",
            ImageFormat::Pjpg => "pjpg",
            ImageFormat::Mp4 => "mp4",
            ImageFormat::Png => "png",
            ImageFormat::Png8 => "png8",
            ImageFormat::Png32 => "png32",
            ImageFormat::Webm => "webm",
            ImageFormat::Webp => "webp",
            ImageFormat::Blurhash => "blurhash",
        }
    }
}

/// Region hints telling the image service which part to keep when cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Top,
    Bottom,
    Left,
    Right,
    Faces,
    Entropy,
    Edges,
}

impl Crop {
    pub const ALL: [Crop; 7] = [
        Crop::Top,
        Crop::Bottom,
        Crop::Left,
        Crop::Right,
        Crop::Faces,
        Crop::Entropy,
        Crop::Edges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Top => "top",
            Crop::Bottom => "bottom",
            Crop::Left => "left",
            Crop::Right => "right",
            Crop::Faces => "faces",
            Crop::Entropy => "entropy",
            Crop::Edges => "edges",
        }
    }
}

/// Orientation filter for the random photo endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Landscape,
        Orientation::Portrait,
        Orientation::Squarish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

fn parse_variant<T: Copy>(
    kind: &str,
    value: &str,
    all: &[T],
    as_str: impl Fn(&T) -> &'static str,
) -> Result<T, UnsplashError> {
    let wanted = value.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|v| as_str(v) == wanted)
        .ok_or_else(|| {
            let valid: Vec<&str> = all.iter().map(|v| as_str(v)).collect();
            UnsplashError::InvalidParameter(format!(
                "unknown {} '{}'. Valid values: {}",
                kind,
                value,
                valid.join(", ")
            ))
        })
}

impl FromStr for ImageFormat {
    type Err = UnsplashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("format", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Crop {
    type Err = UnsplashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("crop", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Orientation {
    type Err = UnsplashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("orientation", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
