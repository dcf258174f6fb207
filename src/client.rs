use crate::config::Config;
use crate::error::{Error, Result};
use crate::listing::parse_listing;
use crate::video::Video;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

/// Blocking client for the upload server.
pub struct GalleryClient {
    base: Url,
    timeout: Duration,
    pub(crate) client: Client,
}

impl GalleryClient {
    pub fn new(config: &Config) -> Result<GalleryClient> {
        let base = Url::parse(&config.base_url)
            .map_err(|_| Error::InvalidUrl(config.base_url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(config.base_url.clone()));
        }

        // Per-request timeouts only; transfers of large videos must not be cut off.
        let client = Client::builder().timeout(None).build()?;

        Ok(GalleryClient {
            base,
            timeout: config.timeout,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// The URL a player can stream `name` from.
    pub fn video_url(&self, name: &str) -> Result<Url> {
        self.endpoint(&["download", name])
    }

    pub fn health(&self) -> Result<()> {
        let url = self.endpoint(&["health"])?;
        debug!("GET {}", url);
        let res = self.client.get(url).timeout(self.timeout).send()?;
        check_status(res)?;
        Ok(())
    }

    pub fn list_videos(&self) -> Result<Vec<Video>> {
        let url = self.endpoint(&["files"])?;
        debug!("GET {}", url);
        let res = self.client.get(url).timeout(self.timeout).send()?;
        let body = check_status(res)?.text()?;

        let videos = parse_listing(&body);
        info!("listed {} videos", videos.len());
        Ok(videos)
    }
}

pub(crate) fn check_status(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        debug!("{} answered {}", res.url(), status);
        Err(Error::Status(status))
    }
}
