mod client;
mod config;
mod download;
mod error;
mod grouping;
mod listing;
mod screen;
mod upload;
mod video;

pub use client::GalleryClient;
pub use config::{Config, DEFAULT_SERVER, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use grouping::{day_label, group_by_date, DateGroup, TODAY, UNDATED, YESTERDAY};
pub use listing::{filter_videos, parse_listing};
pub use screen::{Gallery, Screen, NO_FILE_SELECTED, UPLOAD_SUCCESSFUL};
pub use video::{LocalVideo, Video, VideoKind};
