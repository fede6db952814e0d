//! Run command implementation.
//!
//! Invokes any registered node by display name with `key=value` inputs,
//! the way the host would with keyword-matched arguments.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{NodeError, Result};
use crate::imaging::{load_rgb, save_rgb};
use crate::node::{Inputs, NodeSpec};
use crate::output::{display_path, Printer};
use crate::registry::NodeRegistry;
use crate::types::{ImageTensor, Value, ValueType};

/// Run any registered node by name
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Node display name (e.g. "Invert Color")
    pub node: String,

    /// Input as name=value; IMAGE inputs take a file path
    #[arg(long = "input", short = 'i', value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// Where to write IMAGE outputs
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RunArgs, printer: &Printer) -> Result<()> {
    let registry = NodeRegistry::builtin();
    let spec = registry.spec(&args.node)?;

    let mut inputs = Inputs::new();
    for raw in &args.inputs {
        let (name, text) = parse_assignment(raw)?;
        let value = parse_input(&spec, name, text)?;
        inputs.insert(name, value);
    }

    printer.status("Running", &args.node);
    let outputs = registry.execute(&args.node, inputs)?;

    for (value, output) in outputs.iter().zip(&spec.outputs) {
        match value {
            Value::Image(tensor) => {
                let path = args.output.as_deref().ok_or_else(|| NodeError::Input {
                    message: format!("output '{}' is an image", output.name),
                    help: Some("Pass --output <file.png>".to_string()),
                })?;
                for written in write_frames(tensor, path)? {
                    printer.status("Wrote", &display_path(&written));
                }
            }
            other => println!("{}={}", output.name, other),
        }
    }

    Ok(())
}

/// Split `name=value`.
pub fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| NodeError::Input {
            message: format!("expected NAME=VALUE, got '{}'", raw),
            help: None,
        })
}

/// Interpret raw text according to the declared type of input `name`.
pub fn parse_input(spec: &NodeSpec, name: &str, text: &str) -> Result<Value> {
    let input = spec.input(name).ok_or_else(|| NodeError::Input {
        message: format!("{} has no input named '{}'", spec.name, name),
        help: Some(format!(
            "Known inputs: {}",
            spec.inputs.iter().map(|i| i.name).collect::<Vec<_>>().join(", ")
        )),
    })?;

    match input.ty {
        ValueType::Color => Ok(Value::Color(text.to_string())),
        ValueType::String => Ok(Value::String(text.to_string())),
        ValueType::Int => text.trim().parse().map(Value::Int).map_err(|_| NodeError::Input {
            message: format!("input '{}' expects an integer, got '{}'", name, text),
            help: None,
        }),
        ValueType::Image => {
            let image = load_rgb(Path::new(text))?;
            Ok(Value::Image(ImageTensor::from_rgb_image(&image)))
        }
    }
}

/// Write each frame of a batch; frames after the first get a numeric suffix.
fn write_frames(tensor: &ImageTensor, path: &Path) -> Result<Vec<PathBuf>> {
    let frames = tensor.frames()?;
    let mut written = Vec::with_capacity(frames.len());

    for (i, frame) in frames.iter().enumerate() {
        let dest = if i == 0 {
            path.to_path_buf()
        } else {
            numbered(path, i)
        };
        save_rgb(frame, &dest)?;
        written.push(dest);
    }

    Ok(written)
}

fn numbered(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-{}.{}", stem, index, ext),
        None => format!("{}-{}", stem, index),
    };
    path.with_file_name(name)
}
