pub mod completions;
pub mod invert;
pub mod nodes;
pub mod replace;
pub mod rgb;
pub mod run;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// colornodes - colour utility and colour replacement nodes
#[derive(Parser, Debug)]
#[command(name = "colornodes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: nearest colornodes.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Load the config named by `--config`, or the nearest one on disk.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(&std::env::current_dir()?),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered nodes
    Nodes(nodes::NodesArgs),

    /// Split a hex colour into R G B components
    Rgb(rgb::RgbArgs),

    /// Invert a hex colour
    Invert(invert::InvertArgs),

    /// Replace a colour in PNG images
    Replace(replace::ReplaceArgs),

    /// Run any registered node by name
    Run(run::RunArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
