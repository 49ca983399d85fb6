use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::{Crop, ImageFormat};

/// The four edits the image service understands, in render order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEdits {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<ImageFormat>,
    pub fit: Option<String>,
}

impl ImageEdits {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.format.is_none() && self.fit.is_none()
    }
}

/// A set of changes to apply with [`ImageParameters::adjust`]
///
/// Fields left as `None` keep whatever the image already has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<ImageFormat>,
    pub crop: Option<Vec<Crop>>,
    pub fit: Option<String>,
}

impl Adjustment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_crop(mut self, crop: impl IntoIterator<Item = Crop>) -> Self {
        self.crop = Some(crop.into_iter().collect());
        self
    }

    pub fn with_fit(mut self, fit: impl Into<String>) -> Self {
        self.fit = Some(fit.into());
        self
    }
}

/// An Unsplash image plus the edits to request from the image service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageParameters {
    base_url: String,
    edits: ImageEdits,
    crop: Vec<Crop>,
    owner_name: Option<String>,
}

impl ImageParameters {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            edits: ImageEdits::default(),
            crop: Vec::new(),
            owner_name: None,
        }
    }

    pub fn with_owner(base_url: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: Some(owner_name.into()),
            ..Self::new(base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    pub fn edits(&self) -> &ImageEdits {
        &self.edits
    }

    pub fn crop(&self) -> &[Crop] {
        &self.crop
    }

    /// Apply the set fields of `adjustment`, leaving the rest untouched.
    ///
    /// Zero dimensions, an empty fit and an empty crop list are treated as
    /// not provided.
    pub fn adjust(&mut self, adjustment: Adjustment) {
        if let Some(width) = adjustment.width.filter(|w| *w > 0) {
            self.edits.width = Some(width);
        }
        if let Some(height) = adjustment.height.filter(|h| *h > 0) {
            self.edits.height = Some(height);
        }
        if let Some(format) = adjustment.format {
            self.edits.format = Some(format);
        }
        if let Some(crop) = adjustment.crop.filter(|c| !c.is_empty()) {
            self.crop = crop;
        }
        if let Some(fit) = adjustment.fit.filter(|f| !f.is_empty()) {
            self.edits.fit = Some(fit);
        }
    }

    /// Drop every edit and the crop
    pub fn reset(&mut self) {
        self.edits = ImageEdits::default();
        self.crop.clear();
    }

    /// Build the image URL with the current edits applied
    pub fn url(&self) -> String {
        let mut url = self.base_url.clone();

        if let Some(width) = self.edits.width {
            url.push_str(&format!("&width={}", width));
        }
        if let Some(height) = self.edits.height {
            url.push_str(&format!("&height={}", height));
        }
        if let Some(format) = self.edits.format {
            url.push_str(&format!("&format={}", format.as_str()));
        }
        if let Some(fit) = &self.edits.fit {
            url.push_str(&format!("&fit={}", fit));
        }

        if !self.crop.is_empty() {
            let tags: Vec<&str> = self.crop.iter().map(|c| c.as_str()).collect();
            url.push_str("&crop=");
            url.push_str(&tags.join(","));
        }

        url
    }
}

impl fmt::Display for ImageParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://img.example/x";

    #[test]
    fn untouched_image_renders_base_url() {
        let image = ImageParameters::new(BASE);
        assert_eq!(image.url(), BASE);
        assert!(image.edits().is_empty());
        assert!(image.crop().is_empty());
        assert_eq!(image.owner_name(), None);
    }

    #[test]
    fn width_and_crop_render_in_order() {
        let mut image = ImageParameters::new(BASE);
        image.adjust(Adjustment::new().with_width(100).with_crop([Crop::Faces, Crop::Top]));
        assert_eq!(image.url(), "https://img.example/x&width=100&crop=faces,top");
    }

    #[test]
    fn fields_render_in_fixed_order_regardless_of_adjust_order() {
        let mut image = ImageParameters::new(BASE);
        image.adjust(Adjustment::new().with_crop([Crop::Entropy]));
        image.adjust(Adjustment::new().with_fit("crop"));
        image.adjust(Adjustment::new().with_format(ImageFormat::Webp));
        image.adjust(Adjustment::new().with_height(300));
        image.adjust(Adjustment::new().with_width(400));

        assert_eq!(
            image.url(),
            "https://img.example/x&width=400&height=300&format=webp&fit=crop&crop=entropy"
        );
    }

    #[test]
    fn later_adjustments_override_and_absent_fields_are_kept() {
        let mut image = ImageParameters::new(BASE);
        image.adjust(
            Adjustment::new()
                .with_width(100)
                .with_height(50)
                .with_crop([Crop::Left]),
        );
        image.adjust(Adjustment::new().with_width(200));

        assert_eq!(image.edits().width, Some(200));
        assert_eq!(image.edits().height, Some(50));
        assert_eq!(image.crop(), &[Crop::Left]);
    }

    #[test]
    fn falsy_values_do_not_overwrite() {
        let mut image = ImageParameters::new(BASE);
        image.adjust(Adjustment::new().with_width(100).with_fit("max").with_crop([Crop::Top]));
        image.adjust(Adjustment::new().with_width(0).with_fit("").with_crop([]));

        assert_eq!(image.url(), "https://img.example/x&width=100&fit=max&crop=top");
    }

    #[test]
    fn url_is_stable_between_reads() {
        let mut image = ImageParameters::new(BASE);
        image.adjust(Adjustment::new().with_format(ImageFormat::Png32).with_crop([Crop::Edges]));
        assert_eq!(image.url(), image.url());
        assert_eq!(image.to_string(), image.url());
    }

    #[test]
    fn url_reflects_edits_made_after_a_previous_read() {
        let mut image = ImageParameters::new(BASE);
        image.adjust(Adjustment::new().with_width(10));
        let first = image.url();
        image.adjust(Adjustment::new().with_width(20));
        assert_ne!(first, image.url());
        assert_eq!(image.url(), "https://img.example/x&width=20");
    }

    #[test]
    fn reset_clears_everything_but_base_and_owner() {
        let mut image = ImageParameters::with_owner(BASE, "Alice");
        image.adjust(
            Adjustment::new()
                .with_width(1)
                .with_height(2)
                .with_format(ImageFormat::Jpg)
                .with_fit("clip")
                .with_crop([Crop::Faces, Crop::Bottom]),
        );
        image.reset();

        assert_eq!(image.url(), BASE);
        assert_eq!(image.owner_name(), Some("Alice"));
        assert!(image.edits().is_empty());
    }
}
