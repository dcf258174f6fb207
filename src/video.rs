use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    Mp4,
    Webm,
    Mov,
}

fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\.(mp4|webm|mov)$").expect("static pattern"))
}

impl VideoKind {
    pub fn from_name(name: &str) -> Option<VideoKind> {
        let caps = extension_pattern().captures(name)?;
        match caps[1].to_ascii_lowercase().as_str() {
            "mp4" => Some(VideoKind::Mp4),
            "webm" => Some(VideoKind::Webm),
            "mov" => Some(VideoKind::Mov),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            VideoKind::Mp4 => "video/mp4",
            VideoKind::Webm => "video/webm",
            VideoKind::Mov => "video/quicktime",
        }
    }
}

/// A video as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub name: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Video {
    pub fn new(name: impl Into<String>) -> Video {
        Video {
            name: name.into(),
            last_modified: None,
        }
    }

    pub fn modified_at(name: impl Into<String>, last_modified: DateTime<Utc>) -> Video {
        Video {
            name: name.into(),
            last_modified: Some(last_modified),
        }
    }

    pub fn kind(&self) -> Option<VideoKind> {
        VideoKind::from_name(&self.name)
    }

    pub fn is_video(&self) -> bool {
        self.kind().is_some()
    }
}

/// A video file on disk, selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVideo {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub kind: VideoKind,
}

impl LocalVideo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LocalVideo> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::UnsupportedFile(path.to_path_buf()))?
            .to_string();
        let kind =
            VideoKind::from_name(&name).ok_or_else(|| Error::UnsupportedFile(path.to_path_buf()))?;

        Ok(LocalVideo {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            kind,
        })
    }
}
