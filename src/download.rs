use crate::client::{check_status, GalleryClient};
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Names are written straight into the target directory, so anything that
/// could escape it is refused.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

impl GalleryClient {
    /// Streams the video `name` into `save_folder/name`.
    pub fn download<P: AsRef<Path>>(&self, name: &str, save_folder: P) -> Result<PathBuf> {
        validate_name(name)?;
        let url = self.video_url(name)?;
        info!("downloading {}", url);

        let mut res = check_status(self.client.get(url).send()?)?;

        fs::create_dir_all(save_folder.as_ref())?;
        let path = save_folder.as_ref().join(name);
        let mut file = File::create(&path)?;

        match res.copy_to(&mut file) {
            Ok(size) => {
                info!("saved {} bytes to {}", size, path.display());
                Ok(path)
            }
            Err(err) => {
                warn!("download of {} interrupted: {}", name, err);
                drop(file);
                let _ = fs::remove_file(&path);
                Err(err.into())
            }
        }
    }
}
