//! Replace command implementation.
//!
//! Runs the Image Replace Color node over PNG files, or every matching file
//! under a directory, and writes the results to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{NodeError, Result};
use crate::imaging::{load_rgb, save_rgb};
use crate::node::Inputs;
use crate::output::{display_path, plural, Printer};
use crate::registry::{NodeRegistry, IMAGE_REPLACE_COLOR};
use crate::types::{Colour, ImageTensor, Value};

/// Replace a colour in PNG images
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Image files or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Colour to replace
    #[arg(long, default_value = "#ffffff")]
    pub target: String,

    /// Colour to paint over matching pixels
    #[arg(long = "replace", default_value = "#ffffff")]
    pub replacement: String,

    /// Largest grayscale difference still counted as a match
    #[arg(long, short)]
    pub threshold: Option<i64>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// An input image and where its result goes, relative to the output dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub relative: PathBuf,
}

pub fn run(args: ReplaceArgs, config: &Config, printer: &Printer) -> Result<()> {
    let threshold = args.threshold.unwrap_or(config.threshold);
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    // Fail on a bad colour before touching any files
    let target = Colour::from_hex(&args.target)?;
    let replacement = Colour::from_hex(&args.replacement)?;

    let jobs = collect_jobs(&args.inputs, config)?;
    if jobs.is_empty() {
        printer.warning("Skipped", "no matching images found");
        return Ok(());
    }

    let registry = NodeRegistry::builtin();
    printer.info(
        "Replacing",
        &format!(
            "{} with {} (threshold {})",
            printer.swatch(target, &target.to_hex()),
            printer.swatch(replacement, &replacement.to_hex()),
            threshold
        ),
    );

    for job in &jobs {
        let dest = output.join(&job.relative);
        printer.status("Processing", &display_path(&job.source));

        let image = load_rgb(&job.source)?;
        let inputs = Inputs::new()
            .with("image", Value::Image(ImageTensor::from_rgb_image(&image)))
            .with("target_color", Value::Color(target.to_hex()))
            .with("replace_color", Value::Color(replacement.to_hex()))
            .with("clip_threshold", Value::Int(threshold));

        let outputs = registry.execute(IMAGE_REPLACE_COLOR, inputs)?;
        let frame = first_frame(&outputs)?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| NodeError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
        save_rgb(&frame, &dest)?;
    }

    printer.status(
        "Finished",
        &format!("{} -> {}", plural(jobs.len(), "image", "images"), display_path(&output)),
    );
    Ok(())
}

/// Expand files and directories into a sorted list of jobs.
///
/// Files are kept as given; directories are walked for files with a
/// configured image extension, keeping their layout below the directory.
pub fn collect_jobs(inputs: &[PathBuf], config: &Config) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(input).follow_links(true) {
                let entry = entry.map_err(|e| NodeError::Io {
                    path: input.clone(),
                    message: e.to_string(),
                })?;
                let path = entry.path();
                if entry.file_type().is_file() && config.is_image(path) {
                    let relative = path.strip_prefix(input).unwrap_or(path).to_path_buf();
                    found.push(Job {
                        source: path.to_path_buf(),
                        relative,
                    });
                }
            }
            found.sort_by(|a, b| a.source.cmp(&b.source));
            jobs.extend(found);
        } else if input.is_file() {
            jobs.push(Job {
                source: input.clone(),
                relative: file_name(input)?,
            });
        } else {
            return Err(NodeError::Io {
                path: input.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(jobs)
}

fn file_name(path: &Path) -> Result<PathBuf> {
    path.file_name()
        .map(PathBuf::from)
        .ok_or_else(|| NodeError::Io {
            path: path.to_path_buf(),
            message: "Path has no file name".to_string(),
        })
}

fn first_frame(outputs: &[Value]) -> Result<image::RgbImage> {
    let tensor = outputs
        .first()
        .and_then(Value::as_image)
        .ok_or_else(|| NodeError::Shape {
            message: "node returned no image".to_string(),
            help: None,
        })?;

    tensor.frames()?.into_iter().next().ok_or_else(|| NodeError::Shape {
        message: "node returned an empty batch".to_string(),
        help: None,
    })
}
