use crate::client::{check_status, GalleryClient};
use crate::error::Result;
use crate::video::LocalVideo;
use reqwest::blocking::multipart::{Form, Part};
use tracing::info;

impl GalleryClient {
    /// Posts `video` as the multipart field `file` and returns the server's
    /// message.
    pub fn upload(&self, video: &LocalVideo) -> Result<String> {
        let url = self.endpoint(&["upload"])?;
        info!(
            "uploading {} ({} bytes) to {}",
            video.name, video.size, url
        );

        let part = Part::file(&video.path)?
            .file_name(video.name.clone())
            .mime_str(video.kind.mime())?;
        let form = Form::new().part("file", part);

        let res = self.client.post(url).multipart(form).send()?;
        let message = check_status(res)?.text()?;

        info!("upload of {} finished", video.name);
        Ok(message.trim().to_string())
    }
}
