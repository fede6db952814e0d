//! Raster operations used by the image nodes.

mod mask;
mod png;

pub use mask::{
    composite, difference, grayscale, replace_colour, solid_fill, threshold_mask,
    DEFAULT_THRESHOLD,
};
pub use png::{load_rgb, save_rgb};
