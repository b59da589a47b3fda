use miette::Diagnostic;
use thiserror::Error;

/// Main error type for slider operations
#[derive(Error, Diagnostic, Debug)]
pub enum SliderError {
    #[error("IO error: {0}")]
    #[diagnostic(code(slider::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(slider::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(slider::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(slider::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SliderError>;
