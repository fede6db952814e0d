//! Node registry.
//!
//! Maps human-readable display names to node implementations. The registry
//! is immutable after construction; use `RegistryBuilder` to create one, or
//! `NodeRegistry::builtin()` for the standard set.
//!
//! # Example
//!
//! ```ignore
//! use colornodes::{Inputs, NodeRegistry, Value};
//!
//! let registry = NodeRegistry::builtin();
//! let inputs = Inputs::new().with("color", Value::Color("#a1b2c3".into()));
//! let outputs = registry.execute("Invert Color", inputs)?;
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::error::{NodeError, Result};
use crate::node::{
    ColorPicker, ColorToHex, ColorToRgb, ImageReplaceColor, Inputs, InvertColor, Node, NodeSpec,
};
use crate::types::Value;

pub const COLOR_PICKER: &str = "Color Picker";
pub const COLOR_TO_RGB: &str = "Color to RGB";
pub const COLOR_TO_HEX: &str = "Color to Hex";
pub const IMAGE_REPLACE_COLOR: &str = "Image Replace Color";
pub const INVERT_COLOR: &str = "Invert Color";

/// Display-name to node mapping, in registration order.
pub struct NodeRegistry {
    entries: Vec<(String, Box<dyn Node>)>,
}

impl NodeRegistry {
    /// The standard node set.
    pub fn builtin() -> Self {
        let mut builder = RegistryBuilder::new();
        builder
            .add(COLOR_PICKER, ColorPicker)
            .add(COLOR_TO_RGB, ColorToRgb)
            .add(COLOR_TO_HEX, ColorToHex)
            .add(IMAGE_REPLACE_COLOR, ImageReplaceColor)
            .add(INVERT_COLOR, InvertColor);

        Self {
            entries: builder.entries,
        }
    }

    /// Get a node by display name.
    pub fn get(&self, name: &str) -> Option<&dyn Node> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node.as_ref())
    }

    /// Get all display names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over (display name, node) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Node)> {
        self.entries.iter().map(|(n, node)| (n.as_str(), node.as_ref()))
    }

    /// Look up a node's spec.
    pub fn spec(&self, name: &str) -> Result<NodeSpec> {
        Ok(self.require(name)?.spec())
    }

    /// Resolve inputs against the node's declared sockets and run it.
    pub fn execute(&self, name: &str, inputs: Inputs) -> Result<Vec<Value>> {
        let node = self.require(name)?;
        let inputs = inputs.resolve(&node.spec())?;
        node.execute(&inputs)
    }

    /// Object-info JSON for every node, keyed by display name.
    pub fn object_info(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(name, node)| (name.to_string(), node.spec().object_info(name)))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    /// Get the number of registered nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn require(&self, name: &str) -> Result<&dyn Node> {
        self.get(name).ok_or_else(|| NodeError::Registry {
            message: format!("unknown node '{}'", name),
            help: Some(format!(
                "Available nodes: {}",
                self.names().collect::<Vec<_>>().join(", ")
            )),
        })
    }
}

impl fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Builder for constructing a NodeRegistry.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<(String, Box<dyn Node>)>,
}

impl RegistryBuilder {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under a display name.
    pub fn add(&mut self, name: impl Into<String>, node: impl Node + 'static) -> &mut Self {
        self.entries.push((name.into(), Box::new(node)));
        self
    }

    /// Build the registry, rejecting duplicate display names.
    pub fn build(self) -> Result<NodeRegistry> {
        let mut seen = HashSet::new();
        for (name, _) in &self.entries {
            if !seen.insert(name.as_str()) {
                return Err(NodeError::Registry {
                    message: format!("node '{}' registered twice", name),
                    help: None,
                });
            }
        }

        Ok(NodeRegistry {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_names_in_order() {
        let registry = NodeRegistry::builtin();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![
                "Color Picker",
                "Color to RGB",
                "Color to Hex",
                "Image Replace Color",
                "Invert Color"
            ]
        );
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_categories() {
        let registry = NodeRegistry::builtin();
        for (name, node) in registry.iter() {
            let expected = if name == IMAGE_REPLACE_COLOR {
                "Image/Process"
            } else {
                "utils/color"
            };
            assert_eq!(node.spec().category, expected, "{}", name);
        }
    }

    #[test]
    fn test_execute_by_name() {
        let registry = NodeRegistry::builtin();
        let out = registry
            .execute(
                INVERT_COLOR,
                Inputs::new().with("color", Value::Color("#a1b2c3".into())),
            )
            .unwrap();
        assert_eq!(out, vec![Value::Color("#5e4d3c".into())]);
    }

    #[test]
    fn test_unknown_node() {
        let registry = NodeRegistry::builtin();
        let err = registry.execute("Color Sampler", Inputs::new()).unwrap_err();
        assert!(matches!(err, NodeError::Registry { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.add("Twice", ColorPicker).add("Twice", InvertColor);
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_object_info() {
        let info = NodeRegistry::builtin().object_info();
        let replace = &info[IMAGE_REPLACE_COLOR];

        assert_eq!(replace["function"], "image_remove_color");
        assert_eq!(replace["output"], serde_json::json!([ValueType::Image]));
        assert_eq!(
            replace["input"]["required"]["clip_threshold"][1]["default"],
            10
        );
        assert_eq!(info[COLOR_TO_RGB]["output_name"], serde_json::json!(["R", "G", "B"]));
    }
}
