//! Host image tensors and their 8-bit raster form.
//!
//! The host hands images around as `[batch, height, width, channels]`
//! tensors of normalized `f32` values. Nodes work on `RgbImage` frames and
//! convert back at the boundary.

use image::{Rgb, RgbImage};
use palette::Srgb;

use crate::error::{NodeError, Result};

/// Number of channels every image node works with.
pub const RGB_CHANNELS: usize = 3;

/// A normalized image batch in the host's layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl ImageTensor {
    /// Create a tensor from a `[batch, height, width, channels]` shape and
    /// row-major data.
    pub fn new(shape: [usize; 4], data: Vec<f32>) -> Result<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| NodeError::Shape {
                message: format!("tensor shape {:?} is too large", shape),
                help: None,
            })?;
        if data.len() != expected {
            return Err(NodeError::Shape {
                message: format!(
                    "tensor data has {} values but shape {:?} needs {}",
                    data.len(),
                    shape,
                    expected
                ),
                help: None,
            });
        }
        Ok(Self { shape, data })
    }

    /// Normalize a single 8-bit frame into a batch of one.
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let mut data = Vec::with_capacity(image.len());
        push_frame(&mut data, image);

        Self {
            shape: [1, height as usize, width as usize, RGB_CHANNELS],
            data,
        }
    }

    /// Normalize several equally sized frames into one batch.
    pub fn from_frames(frames: &[RgbImage]) -> Result<Self> {
        let Some(first) = frames.first() else {
            return Err(NodeError::Shape {
                message: "cannot build a tensor from zero frames".to_string(),
                help: None,
            });
        };

        let (width, height) = first.dimensions();
        let mut data = Vec::with_capacity(first.len() * frames.len());
        for (i, frame) in frames.iter().enumerate() {
            if frame.dimensions() != (width, height) {
                return Err(NodeError::Shape {
                    message: format!(
                        "frame {} is {}x{}, expected {}x{}",
                        i,
                        frame.width(),
                        frame.height(),
                        width,
                        height
                    ),
                    help: Some("All frames in a batch must share dimensions".to_string()),
                });
            }
            push_frame(&mut data, frame);
        }

        Ok(Self {
            shape: [frames.len(), height as usize, width as usize, RGB_CHANNELS],
            data,
        })
    }

    /// Convert every frame in the batch to an 8-bit RGB raster.
    ///
    /// Values are clamped to [0, 1] and rounded to the nearest 8-bit level.
    pub fn frames(&self) -> Result<Vec<RgbImage>> {
        let [batch, height, width, channels] = self.shape;
        if channels != RGB_CHANNELS {
            return Err(NodeError::Shape {
                message: format!("expected {} channels, found {}", RGB_CHANNELS, channels),
                help: Some("Only RGB images are supported".to_string()),
            });
        }

        let frame_len = height * width * channels;
        if frame_len == 0 {
            return Ok(vec![RgbImage::new(width as u32, height as u32); batch]);
        }

        let mut frames = Vec::with_capacity(batch);
        for chunk in self.data.chunks_exact(frame_len) {
            let mut frame = RgbImage::new(width as u32, height as u32);
            for (pixel, values) in frame.pixels_mut().zip(chunk.chunks_exact(RGB_CHANNELS)) {
                let rgb: Srgb<u8> = Srgb::new(values[0], values[1], values[2]).into_format();
                *pixel = Rgb([rgb.red, rgb.green, rgb.blue]);
            }
            frames.push(frame);
        }
        Ok(frames)
    }

    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn batch(&self) -> usize {
        self.shape[0]
    }

    pub fn height(&self) -> usize {
        self.shape[1]
    }

    pub fn width(&self) -> usize {
        self.shape[2]
    }

    pub fn channels(&self) -> usize {
        self.shape[3]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

fn push_frame(data: &mut Vec<f32>, frame: &RgbImage) {
    for pixel in frame.pixels() {
        let rgb: Srgb<f32> = Srgb::new(pixel[0], pixel[1], pixel[2]).into_format();
        data.extend_from_slice(&[rgb.red, rgb.green, rgb.blue]);
    }
}
