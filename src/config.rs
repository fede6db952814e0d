//! Project configuration (colornodes.yaml) parsing.
//!
//! The config file is optional. It supplies defaults for the CLI; flags
//! given on the command line always win.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NodeError, Result};
use crate::imaging::DEFAULT_THRESHOLD;
use crate::types::ChannelOrder;

/// Config file name looked up from the working directory upwards.
pub const CONFIG_FILENAME: &str = "colornodes.yaml";

/// Project configuration loaded from colornodes.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default clip threshold for colour replacement.
    pub threshold: i64,

    /// Channel order used when printing RGB components.
    pub channel_order: ChannelOrder,

    /// Output directory for replaced images.
    pub output: PathBuf,

    /// File extensions picked up when a directory is given as input.
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            channel_order: ChannelOrder::Rgb,
            output: PathBuf::from("out"),
            extensions: vec!["png".to_string()],
        }
    }
}

impl Config {
    /// Load config from a colornodes.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NodeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| NodeError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Find the nearest colornodes.yaml at or above `start`.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config, or defaults when there is none.
    pub fn discover(start: &Path) -> Result<Self> {
        match Self::find(start) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Check whether a path has one of the configured image extensions.
    pub fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("threshold: 32").unwrap();

        assert_eq!(config.threshold, 32);
        assert_eq!(config.channel_order, ChannelOrder::Rgb);
        assert_eq!(config.output, PathBuf::from("out"));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
threshold: 0
channel_order: bgr
output: build/replaced
extensions:
  - png
  - jpg
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(
            config,
            Config {
                threshold: 0,
                channel_order: ChannelOrder::Bgr,
                output: PathBuf::from("build/replaced"),
                extensions: vec!["png".to_string(), "jpg".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("channel_order: grb").unwrap_err();
        assert!(matches!(err, NodeError::Parse { .. }));
    }

    #[test]
    fn test_is_image() {
        let config = Config::default();
        assert!(config.is_image(Path::new("a/b.png")));
        assert!(config.is_image(Path::new("B.PNG")));
        assert!(!config.is_image(Path::new("b.jpg")));
        assert!(!config.is_image(Path::new("png")));
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "threshold: 99\n").unwrap();

        assert_eq!(Config::find(&nested), Some(dir.path().join(CONFIG_FILENAME)));
        assert_eq!(Config::discover(&nested).unwrap().threshold, 99);
    }
}
