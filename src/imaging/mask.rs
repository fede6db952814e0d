//! Mask-based colour replacement.
//!
//! Replacement is built from four raster steps: a solid reference fill, an
//! absolute difference against it, a grayscale collapse of that difference,
//! and a threshold mask used to composite the replacement fill over the
//! original.

use image::{imageops, GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

use crate::error::{NodeError, Result};
use crate::types::Colour;

/// Default clip threshold for colour replacement.
pub const DEFAULT_THRESHOLD: i64 = 10;

/// Create an image of the given size filled with one colour.
pub fn solid_fill(width: u32, height: u32, colour: Colour) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb(colour.to_array()))
}

/// Per-channel absolute difference of two images of equal size.
pub fn difference(a: &RgbImage, b: &RgbImage) -> Result<RgbImage> {
    ensure_same_size(a.dimensions(), b.dimensions())?;

    let mut out = RgbImage::new(a.width(), a.height());
    for ((dst, pa), pb) in out.pixels_mut().zip(a.pixels()).zip(b.pixels()) {
        *dst = Rgb([
            pa[0].abs_diff(pb[0]),
            pa[1].abs_diff(pb[1]),
            pa[2].abs_diff(pb[2]),
        ]);
    }
    Ok(out)
}

/// Collapse an RGB image to one intensity per pixel.
///
/// Uses ITU-R 601-2 luma weights rounded to nearest. A non-black pixel
/// never maps below 1, so only a black pixel maps to zero.
pub fn grayscale(image: &RgbImage) -> GrayImage {
    let mut out = GrayImage::new(image.width(), image.height());
    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        *dst = Luma([luma(src)]);
    }
    out
}

/// Mark pixels brighter than `threshold` with 255, the rest with 0.
pub fn threshold_mask(gray: &GrayImage, threshold: i64) -> GrayImage {
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel[0] = if i64::from(pixel[0]) > threshold { 255 } else { 0 };
    }
    out
}

/// Blend `foreground` over `background`, weighted per pixel by `mask`.
///
/// A mask value of 255 selects the foreground, 0 the background.
pub fn composite(foreground: &RgbImage, background: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    ensure_same_size(foreground.dimensions(), background.dimensions())?;
    ensure_same_size(foreground.dimensions(), mask.dimensions())?;

    let mut out = RgbImage::new(foreground.width(), foreground.height());
    for (((dst, fg), bg), m) in out
        .pixels_mut()
        .zip(foreground.pixels())
        .zip(background.pixels())
        .zip(mask.pixels())
    {
        let alpha = u32::from(m[0]);
        *dst = match alpha {
            255 => *fg,
            0 => *bg,
            _ => Rgb([
                blend(fg[0], bg[0], alpha),
                blend(fg[1], bg[1], alpha),
                blend(fg[2], bg[2], alpha),
            ]),
        };
    }
    Ok(out)
}

/// Replace every pixel within `threshold` of `target` with `replacement`.
///
/// Distance is the grayscale intensity of the absolute RGB difference; a
/// pixel whose distance equals the threshold is replaced. The threshold is
/// not range checked: negative values replace nothing, values of 255 or
/// more replace everything.
pub fn replace_colour(
    image: &RgbImage,
    target: Colour,
    replacement: Colour,
    threshold: i64,
) -> Result<RgbImage> {
    let (width, height) = image.dimensions();

    let reference = solid_fill(width, height, target);
    let diff = difference(image, &reference)?;
    let gray = grayscale(&diff);

    let mut mask = threshold_mask(&gray, threshold);
    imageops::invert(&mut mask);

    let fill = solid_fill(width, height, replacement);
    composite(&fill, image, &mask)
}

fn luma(pixel: &Rgb<u8>) -> u8 {
    // 16.16 fixed point ITU-R 601-2 weights, rounded to nearest
    let weighted = u32::from(pixel[0]) * 19595
        + u32::from(pixel[1]) * 38470
        + u32::from(pixel[2]) * 7471;
    let rounded = ((weighted + 0x8000) >> 16) as u8;

    if rounded == 0 && pixel.0 != [0, 0, 0] {
        1
    } else {
        rounded
    }
}

fn blend(fg: u8, bg: u8, alpha: u32) -> u8 {
    ((u32::from(fg) * alpha + u32::from(bg) * (255 - alpha) + 127) / 255) as u8
}

fn ensure_same_size(a: (u32, u32), b: (u32, u32)) -> Result<()> {
    if a != b {
        return Err(NodeError::Shape {
            message: format!("image sizes differ: {}x{} vs {}x{}", a.0, a.1, b.0, b.1),
            help: None,
        });
    }
    Ok(())
}
