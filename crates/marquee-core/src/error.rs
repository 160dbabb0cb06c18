use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
