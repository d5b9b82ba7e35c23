use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error for {path:?}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("No image files found in directory: {0:?}")]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
