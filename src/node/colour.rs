//! Colour utility nodes.
//!
//! Most of these only adapt a colour between the host's `COLOR` and
//! `STRING`/`INT` sockets.

use crate::error::Result;
use crate::types::{hex_to_rgb, invert_hex, ChannelOrder, Value, ValueType};

use super::{InputSpec, Inputs, Node, NodeSpec, OutputSpec, COLOR_CATEGORY};

/// Colour primitive: passes the picked colour through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPicker;

impl Node for ColorPicker {
    fn spec(&self) -> NodeSpec {
        NodeSpec {
            name: "ColorPicker",
            description: "Color Primitive",
            category: COLOR_CATEGORY,
            function: "colorpicker",
            inputs: vec![InputSpec::color("color")],
            outputs: vec![OutputSpec::new("color", ValueType::Color)],
        }
    }

    fn execute(&self, inputs: &Inputs) -> Result<Vec<Value>> {
        Ok(vec![Value::Color(inputs.color("color")?.to_string())])
    }
}

/// Split a colour into integer R, G and B outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorToRgb;

impl Node for ColorToRgb {
    fn spec(&self) -> NodeSpec {
        NodeSpec {
            name: "ColorToRGB",
            description: "Color to RGB",
            category: COLOR_CATEGORY,
            function: "execute",
            inputs: vec![InputSpec::color("color")],
            outputs: vec![
                OutputSpec::new("R", ValueType::Int),
                OutputSpec::new("G", ValueType::Int),
                OutputSpec::new("B", ValueType::Int),
            ],
        }
    }

    fn execute(&self, inputs: &Inputs) -> Result<Vec<Value>> {
        let (r, g, b) = hex_to_rgb(inputs.color("color")?, ChannelOrder::Rgb)?;
        Ok(vec![
            Value::Int(r.into()),
            Value::Int(g.into()),
            Value::Int(b.into()),
        ])
    }
}

/// Re-label a colour as a hex string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorToHex;

impl Node for ColorToHex {
    fn spec(&self) -> NodeSpec {
        NodeSpec {
            name: "ColorToHex",
            description: "Color To HEX",
            category: COLOR_CATEGORY,
            function: "execute",
            inputs: vec![InputSpec::color("color")],
            outputs: vec![OutputSpec::new("hex_string", ValueType::String)],
        }
    }

    fn execute(&self, inputs: &Inputs) -> Result<Vec<Value>> {
        Ok(vec![Value::String(inputs.color("color")?.to_string())])
    }
}

/// Returns the inverse of a colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertColor;

impl Node for InvertColor {
    fn spec(&self) -> NodeSpec {
        NodeSpec {
            name: "InvertColor",
            description: "Returns to inverse of a color",
            category: COLOR_CATEGORY,
            function: "execute",
            inputs: vec![InputSpec::color("color")],
            outputs: vec![OutputSpec::new("color", ValueType::Color)],
        }
    }

    fn execute(&self, inputs: &Inputs) -> Result<Vec<Value>> {
        Ok(vec![Value::Color(invert_hex(inputs.color("color")?)?)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodeError;
    use pretty_assertions::assert_eq;

    fn run(node: &dyn Node, color: &str) -> Result<Vec<Value>> {
        let inputs = Inputs::new()
            .with("color", Value::Color(color.to_string()))
            .resolve(&node.spec())?;
        node.execute(&inputs)
    }

    #[test]
    fn test_picker_passes_through() {
        assert_eq!(run(&ColorPicker, "#A1b2C3").unwrap(), vec![Value::Color("#A1b2C3".into())]);
    }

    #[test]
    fn test_picker_default_is_red() {
        let inputs = Inputs::new().resolve(&ColorPicker.spec()).unwrap();
        assert_eq!(
            ColorPicker.execute(&inputs).unwrap(),
            vec![Value::Color("#ff0000".into())]
        );
    }

    #[test]
    fn test_to_hex_relabels() {
        assert_eq!(run(&ColorToHex, "#00ff00").unwrap(), vec![Value::String("#00ff00".into())]);
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(
            run(&ColorToRgb, "#ff8001").unwrap(),
            vec![Value::Int(255), Value::Int(128), Value::Int(1)]
        );
    }

    #[test]
    fn test_to_rgb_malformed() {
        assert!(matches!(run(&ColorToRgb, "#ff80"), Err(NodeError::Parse { .. })));
    }

    #[test]
    fn test_invert() {
        assert_eq!(run(&InvertColor, "#A1B2C3").unwrap(), vec![Value::Color("#5e4d3c".into())]);
        assert_eq!(run(&InvertColor, "000000").unwrap(), vec![Value::Color("#ffffff".into())]);
    }

    #[test]
    fn test_output_arity_matches_spec() {
        let nodes: [&dyn Node; 4] = [&ColorPicker, &ColorToRgb, &ColorToHex, &InvertColor];
        for node in nodes {
            let spec = node.spec();
            let outputs = run(node, "#123456").unwrap();
            assert_eq!(outputs.len(), spec.outputs.len(), "{}", spec.name);
            for (value, output) in outputs.iter().zip(&spec.outputs) {
                assert_eq!(value.value_type(), output.ty, "{}", spec.name);
            }
        }
    }
}
