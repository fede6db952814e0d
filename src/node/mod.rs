//! Node definitions.
//!
//! A node declares its typed inputs and outputs through a [`NodeSpec`] and
//! is invoked with keyword-matched [`Inputs`]. Nodes hold no state; every
//! call is independent.

mod colour;
mod replace;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

use crate::error::{NodeError, Result};
use crate::types::{Colour, ImageTensor, Value, ValueType};

pub use colour::{ColorPicker, ColorToHex, ColorToRgb, InvertColor};
pub use replace::ImageReplaceColor;

/// Category shared by the colour utility nodes.
pub const COLOR_CATEGORY: &str = "utils/color";

/// Category of the image processing nodes.
pub const IMAGE_CATEGORY: &str = "Image/Process";

/// A single operation exposed to the graph editor.
pub trait Node {
    /// Describe the node's inputs, outputs and placement.
    fn spec(&self) -> NodeSpec;

    /// Run the node. `inputs` already carries defaults for anything the
    /// caller left out.
    fn execute(&self, inputs: &Inputs) -> Result<Vec<Value>>;
}

/// Bounds and default of an `INT` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntOptions {
    pub default: i64,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

/// A declared input socket.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    pub name: &'static str,
    pub ty: ValueType,
    pub default: Option<Value>,
    pub int_options: Option<IntOptions>,
}

impl InputSpec {
    /// A colour input backed by the colour widget (defaults to red).
    pub fn color(name: &'static str) -> Self {
        Self {
            name,
            ty: ValueType::Color,
            default: Some(Value::Color(Colour::RED.to_hex())),
            int_options: None,
        }
    }

    /// A string input with no default.
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            ty: ValueType::String,
            default: None,
            int_options: None,
        }
    }

    /// An image input with no default.
    pub fn image(name: &'static str) -> Self {
        Self {
            name,
            ty: ValueType::Image,
            default: None,
            int_options: None,
        }
    }

    /// An integer input with bounds.
    pub fn int(name: &'static str, options: IntOptions) -> Self {
        Self {
            name,
            ty: ValueType::Int,
            default: Some(Value::Int(options.default)),
            int_options: Some(options),
        }
    }

    /// Override the default value.
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// A declared output socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    pub name: &'static str,
    pub ty: ValueType,
}

impl OutputSpec {
    pub const fn new(name: &'static str, ty: ValueType) -> Self {
        Self { name, ty }
    }
}

/// Everything the host needs to place and wire a node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    /// Implementation name (e.g. `InvertColor`).
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Name of the entry point the host calls.
    pub function: &'static str,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
}

impl NodeSpec {
    /// Find an input by name.
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Render the host's object-info JSON for this node.
    pub fn object_info(&self, display_name: &str) -> serde_json::Value {
        let mut required = serde_json::Map::new();
        for input in &self.inputs {
            let entry = match (&input.int_options, &input.default) {
                (Some(options), _) => json!([input.ty, options]),
                (None, Some(Value::Color(default))) => json!([input.ty, { "default": default }]),
                _ => json!([input.ty]),
            };
            required.insert(input.name.to_string(), entry);
        }

        json!({
            "name": self.name,
            "display_name": display_name,
            "description": self.description,
            "category": self.category,
            "function": self.function,
            "input": { "required": required },
            "output": self.outputs.iter().map(|o| o.ty).collect::<Vec<_>>(),
            "output_name": self.outputs.iter().map(|o| o.name).collect::<Vec<_>>(),
        })
    }
}

/// Keyword-matched input values for one node call.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: HashMap<String, Value>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value (builder style).
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Match provided values against a node's declared inputs.
    ///
    /// Missing inputs take their declared default; unknown names and
    /// mismatched types are rejected.
    pub fn resolve(mut self, spec: &NodeSpec) -> Result<Self> {
        if let Some(unknown) = self.values.keys().find(|k| spec.input(k).is_none()) {
            return Err(NodeError::Input {
                message: format!("{} has no input named '{}'", spec.name, unknown),
                help: Some(format!("Known inputs: {}", input_names(spec))),
            });
        }

        for input in &spec.inputs {
            match self.values.get(input.name) {
                Some(value) if value.value_type() != input.ty => {
                    return Err(NodeError::Input {
                        message: format!(
                            "input '{}' expects {}, got {}",
                            input.name,
                            input.ty,
                            value.value_type()
                        ),
                        help: None,
                    });
                }
                Some(_) => {}
                None => match &input.default {
                    Some(default) => {
                        self.values.insert(input.name.to_string(), default.clone());
                    }
                    None => {
                        return Err(NodeError::Input {
                            message: format!("missing required input '{}'", input.name),
                            help: None,
                        });
                    }
                },
            }
        }

        Ok(self)
    }

    /// Get a colour input as its hex string.
    pub fn color(&self, name: &str) -> Result<&str> {
        self.require(name)?.as_str().ok_or_else(|| type_error(name, ValueType::Color))
    }

    /// Get a string input.
    pub fn string(&self, name: &str) -> Result<&str> {
        self.require(name)?.as_str().ok_or_else(|| type_error(name, ValueType::String))
    }

    /// Get an integer input.
    pub fn int(&self, name: &str) -> Result<i64> {
        self.require(name)?.as_int().ok_or_else(|| type_error(name, ValueType::Int))
    }

    /// Get an image input.
    pub fn image(&self, name: &str) -> Result<&ImageTensor> {
        self.require(name)?.as_image().ok_or_else(|| type_error(name, ValueType::Image))
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.values.get(name).ok_or_else(|| NodeError::Input {
            message: format!("missing required input '{}'", name),
            help: None,
        })
    }
}

fn type_error(name: &str, expected: ValueType) -> NodeError {
    NodeError::Input {
        message: format!("input '{}' is not {}", name, expected),
        help: None,
    }
}

fn input_names(spec: &NodeSpec) -> String {
    spec.inputs.iter().map(|i| i.name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn threshold_spec() -> NodeSpec {
        NodeSpec {
            name: "Test",
            description: "test node",
            category: COLOR_CATEGORY,
            function: "execute",
            inputs: vec![
                InputSpec::color("color"),
                InputSpec::int(
                    "threshold",
                    IntOptions {
                        default: 10,
                        min: 0,
                        max: 255,
                        step: 1,
                    },
                ),
                InputSpec::string("label"),
            ],
            outputs: vec![OutputSpec::new("color", ValueType::Color)],
        }
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let inputs = Inputs::new()
            .with("label", Value::String("x".into()))
            .resolve(&threshold_spec())
            .unwrap();

        assert_eq!(inputs.color("color").unwrap(), "#ff0000");
        assert_eq!(inputs.int("threshold").unwrap(), 10);
        assert_eq!(inputs.string("label").unwrap(), "x");
    }

    #[test]
    fn test_resolve_missing_required() {
        let err = Inputs::new().resolve(&threshold_spec()).unwrap_err();
        assert!(err.to_string().contains("label"));
    }

    #[test]
    fn test_resolve_rejects_unknown_and_mistyped() {
        let unknown = Inputs::new()
            .with("label", Value::String("x".into()))
            .with("colour", Value::Color("#000000".into()))
            .resolve(&threshold_spec());
        assert!(matches!(unknown, Err(NodeError::Input { .. })));

        let mistyped = Inputs::new()
            .with("label", Value::String("x".into()))
            .with("threshold", Value::String("10".into()))
            .resolve(&threshold_spec());
        assert!(matches!(mistyped, Err(NodeError::Input { .. })));
    }

    #[test]
    fn test_string_type_error_names_string() {
        let inputs = Inputs::new().with("label", Value::Int(3));
        let err = inputs.string("label").unwrap_err();
        assert!(err.to_string().contains("is not STRING"), "{}", err);
    }

    #[test]
    fn test_object_info() {
        let info = threshold_spec().object_info("Test Node");

        assert_eq!(info["display_name"], "Test Node");
        assert_eq!(info["category"], "utils/color");
        assert_eq!(info["input"]["required"]["color"], json!(["COLOR", { "default": "#ff0000" }]));
        assert_eq!(
            info["input"]["required"]["threshold"],
            json!(["INT", { "default": 10, "min": 0, "max": 255, "step": 1 }])
        );
        assert_eq!(info["input"]["required"]["label"], json!(["STRING"]));
        assert_eq!(info["output"], json!(["COLOR"]));
        assert_eq!(info["output_name"], json!(["color"]));
    }
}
