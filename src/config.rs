use std::time::Duration;

pub const DEFAULT_SERVER: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// Applies to listing and health checks. Uploads and downloads run
    /// without a deadline since video files can be large.
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Config {
        Config {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Config {
        self.timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new(DEFAULT_SERVER)
    }
}
