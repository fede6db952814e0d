//! colornodes - colour nodes for node-graph image pipelines
//!
//! A small set of stateless nodes: a colour primitive, hex/RGB conversion,
//! colour inversion and mask-based colour replacement in images, exposed
//! through a registry keyed by display name.

pub mod cli;
pub mod config;
pub mod error;
pub mod imaging;
pub mod node;
pub mod output;
pub mod registry;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{NodeError, Result};
pub use imaging::{replace_colour, DEFAULT_THRESHOLD};
pub use node::{
    ColorPicker, ColorToHex, ColorToRgb, ImageReplaceColor, InputSpec, Inputs, IntOptions,
    InvertColor, Node, NodeSpec, OutputSpec,
};
pub use registry::{NodeRegistry, RegistryBuilder};
pub use types::{hex_to_rgb, invert_hex, ChannelOrder, Colour, ImageTensor, Value, ValueType};
