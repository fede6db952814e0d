//! Image Replace Color node.

use crate::error::Result;
use crate::imaging::{replace_colour, DEFAULT_THRESHOLD};
use crate::types::{Colour, ImageTensor, Value, ValueType};

use super::{InputSpec, Inputs, IntOptions, Node, NodeSpec, OutputSpec, IMAGE_CATEGORY};

/// Replace a colour in an image, within a clip threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageReplaceColor;

impl ImageReplaceColor {
    /// Apply the replacement to every frame of a batch.
    pub fn apply(
        &self,
        image: &ImageTensor,
        target: Colour,
        replacement: Colour,
        threshold: i64,
    ) -> Result<ImageTensor> {
        // An empty batch has no frames to rebuild the shape from
        if image.batch() == 0 {
            return Ok(image.clone());
        }

        let frames = image
            .frames()?
            .iter()
            .map(|frame| replace_colour(frame, target, replacement, threshold))
            .collect::<Result<Vec<_>>>()?;

        ImageTensor::from_frames(&frames)
    }
}

impl Node for ImageReplaceColor {
    fn spec(&self) -> NodeSpec {
        let white = Value::Color(Colour::WHITE.to_hex());

        NodeSpec {
            name: "ImageReplaceColor",
            description: "Replace Color in an Image",
            category: IMAGE_CATEGORY,
            function: "image_remove_color",
            inputs: vec![
                InputSpec::image("image"),
                InputSpec::color("target_color").with_default(white.clone()),
                InputSpec::color("replace_color").with_default(white),
                InputSpec::int(
                    "clip_threshold",
                    IntOptions {
                        default: DEFAULT_THRESHOLD,
                        min: 0,
                        max: 255,
                        step: 1,
                    },
                ),
            ],
            outputs: vec![OutputSpec::new("IMAGE", ValueType::Image)],
        }
    }

    fn execute(&self, inputs: &Inputs) -> Result<Vec<Value>> {
        let image = inputs.image("image")?;
        let target = Colour::from_hex(inputs.color("target_color")?)?;
        let replacement = Colour::from_hex(inputs.color("replace_color")?)?;
        let threshold = inputs.int("clip_threshold")?;

        let out = self.apply(image, target, replacement, threshold)?;
        Ok(vec![Value::Image(out)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn tensor() -> ImageTensor {
        let img = RgbImage::from_fn(3, 3, |x, y| {
            if x == y {
                Rgb([255, 255, 255])
            } else {
                Rgb([30, 60, 90])
            }
        });
        ImageTensor::from_rgb_image(&img)
    }

    fn run(inputs: Inputs) -> Result<ImageTensor> {
        let node = ImageReplaceColor;
        let inputs = inputs.resolve(&node.spec())?;
        let mut out = node.execute(&inputs)?;
        match out.pop() {
            Some(Value::Image(image)) => Ok(image),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_defaults_replace_white_with_white() {
        let input = tensor();
        let out = run(Inputs::new().with("image", Value::Image(input.clone()))).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_replace_diagonal() {
        let out = run(Inputs::new()
            .with("image", Value::Image(tensor()))
            .with("target_color", Value::Color("#FFFFFF".into()))
            .with("replace_color", Value::Color("#000000".into()))
            .with("clip_threshold", Value::Int(0)))
        .unwrap();

        let frame = &out.frames().unwrap()[0];
        assert_eq!(frame.get_pixel(1, 1).0, [0, 0, 0]);
        assert_eq!(frame.get_pixel(1, 0).0, [30, 60, 90]);
    }

    #[test]
    fn test_full_threshold_fills() {
        let out = run(Inputs::new()
            .with("image", Value::Image(tensor()))
            .with("replace_color", Value::Color("#102030".into()))
            .with("clip_threshold", Value::Int(255)))
        .unwrap();

        for frame in out.frames().unwrap() {
            assert!(frame.pixels().all(|p| p.0 == [0x10, 0x20, 0x30]));
        }
    }

    #[test]
    fn test_batch_is_processed_per_frame() {
        let a = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let b = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let batch = ImageTensor::from_frames(&[a, b]).unwrap();

        let out = ImageReplaceColor
            .apply(&batch, Colour::WHITE, Colour::RED, 10)
            .unwrap();
        let frames = out.frames().unwrap();

        assert_eq!(out.batch(), 2);
        assert!(frames[0].pixels().all(|p| p.0 == [255, 0, 0]));
        assert!(frames[1].pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_empty_batch_passes_through() {
        let empty = ImageTensor::new([0, 3, 3, 3], vec![]).unwrap();
        let out = ImageReplaceColor
            .apply(&empty, Colour::WHITE, Colour::BLACK, 10)
            .unwrap();
        assert_eq!(out, empty);
    }

    #[test]
    fn test_rejects_non_rgb_tensor() {
        let rgba = ImageTensor::new([1, 1, 1, 4], vec![0.0; 4]).unwrap();
        assert!(run(Inputs::new().with("image", Value::Image(rgba))).is_err());
    }
}
