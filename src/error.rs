use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid server url {0:?}")]
    InvalidUrl(String),

    #[error("invalid video name {0:?}")]
    InvalidName(String),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("{} is not a supported video (expected .mp4, .webm or .mov)", .0.display())]
    UnsupportedFile(PathBuf),
}
