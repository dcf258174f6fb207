//! View state of the upload-and-browse screen.
//!
//! Every failure here degrades to an empty list or a message for the user;
//! nothing is propagated or retried.

use crate::client::GalleryClient;
use crate::error::{Error, Result};
use crate::grouping::{group_by_date, DateGroup};
use crate::video::{LocalVideo, Video};
use chrono::{DateTime, TimeZone};
use reqwest::Url;
use std::path::Path;
use tracing::{info, warn};

pub const NO_FILE_SELECTED: &str = "No file selected";
pub const UPLOAD_SUCCESSFUL: &str = "Upload successful!";

/// The server operations the screen depends on.
pub trait Gallery {
    fn list_videos(&self) -> Result<Vec<Video>>;
    fn upload(&self, video: &LocalVideo) -> Result<String>;
    fn video_url(&self, name: &str) -> Result<Url>;
}

impl Gallery for GalleryClient {
    fn list_videos(&self) -> Result<Vec<Video>> {
        GalleryClient::list_videos(self)
    }

    fn upload(&self, video: &LocalVideo) -> Result<String> {
        GalleryClient::upload(self, video)
    }

    fn video_url(&self, name: &str) -> Result<Url> {
        GalleryClient::video_url(self, name)
    }
}

pub struct Screen<G> {
    gallery: G,
    pub videos: Vec<Video>,
    pub selected: Option<LocalVideo>,
    pub uploading: bool,
    pub loading: bool,
    pub message: String,
    pub playing: Option<Url>,
}

impl<G: Gallery> Screen<G> {
    pub fn new(gallery: G) -> Screen<G> {
        Screen {
            gallery,
            videos: Vec::new(),
            selected: None,
            uploading: false,
            loading: false,
            message: String::new(),
            playing: None,
        }
    }

    pub fn gallery(&self) -> &G {
        &self.gallery
    }

    pub fn refresh(&mut self) {
        self.loading = true;
        self.videos = match self.gallery.list_videos() {
            Ok(videos) => videos,
            Err(err) => {
                warn!("could not list videos: {}", err);
                Vec::new()
            }
        };
        self.loading = false;
    }

    pub fn select<P: AsRef<Path>>(&mut self, path: P) {
        self.message.clear();
        match LocalVideo::open(path) {
            Ok(video) => {
                info!("selected {}", video.name);
                self.selected = Some(video);
            }
            Err(err) => {
                self.selected = None;
                self.message = err.to_string();
            }
        }
    }

    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.uploading
    }

    pub fn upload(&mut self) {
        let video = match &self.selected {
            Some(video) => video.clone(),
            None => {
                self.message = NO_FILE_SELECTED.to_string();
                return;
            }
        };
        if self.uploading {
            return;
        }

        self.uploading = true;
        self.message.clear();
        match self.gallery.upload(&video) {
            Ok(reply) => {
                info!("server replied: {}", reply);
                self.message = UPLOAD_SUCCESSFUL.to_string();
                self.refresh();
            }
            Err(err) => {
                warn!("upload of {} failed: {}", video.name, err);
                self.message = match err {
                    Error::Status(status) => format!("Upload failed: HTTP {}", status.as_u16()),
                    other => format!("Upload failed: {}", other),
                };
            }
        }
        self.uploading = false;
    }

    pub fn play(&mut self, name: &str) {
        match self.gallery.video_url(name) {
            Ok(url) => self.playing = Some(url),
            Err(err) => {
                self.playing = None;
                self.message = err.to_string();
            }
        }
    }

    pub fn close(&mut self) {
        self.playing = None;
    }

    pub fn groups<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<DateGroup> {
        group_by_date(&self.videos, now)
    }
}
