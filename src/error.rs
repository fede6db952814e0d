use miette::Diagnostic;
use thiserror::Error;

/// Main error type for colornodes operations
#[derive(Error, Diagnostic, Debug)]
pub enum NodeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(colornodes::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(colornodes::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(colornodes::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Input error: {message}")]
    #[diagnostic(code(colornodes::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Shape error: {message}")]
    #[diagnostic(code(colornodes::shape))]
    Shape {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Registry error: {message}")]
    #[diagnostic(code(colornodes::registry))]
    Registry {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, NodeError>;
