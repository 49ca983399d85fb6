pub mod error;
pub mod options;
pub mod params;

pub use error::UnsplashError;
pub use options::{Crop, ImageFormat, Orientation};
pub use params::{Adjustment, ImageEdits, ImageParameters};
