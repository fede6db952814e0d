//! Values passed between the host and nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ImageTensor;

/// The host's type labels for node sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Color,
    String,
    Int,
    Image,
}

impl ValueType {
    /// Get the label the host uses for this type.
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::Color => "COLOR",
            ValueType::String => "STRING",
            ValueType::Int => "INT",
            ValueType::Image => "IMAGE",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single input or output value.
///
/// Colours travel as hex strings, exactly as the host's colour widget
/// produces them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Color(String),
    String(String),
    Int(i64),
    Image(ImageTensor),
}

impl Value {
    /// The type label of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Color(_) => ValueType::Color,
            Value::String(_) => ValueType::String,
            Value::Int(_) => ValueType::Int,
            Value::Image(_) => ValueType::Image,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Color(s) | Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageTensor> {
        match self {
            Value::Image(image) => Some(image),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(s) | Value::String(s) => write!(f, "{}", s),
            Value::Int(v) => write!(f, "{}", v),
            Value::Image(image) => {
                let [batch, height, width, channels] = image.shape();
                write!(f, "image[{}x{}x{}x{}]", batch, height, width, channels)
            }
        }
    }
}
