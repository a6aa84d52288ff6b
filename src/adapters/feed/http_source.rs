//! HTTP feed source. Implements ShowtimeSource with a single reqwest GET.

use crate::domain::DomainError;
use crate::ports::ShowtimeSource;
use reqwest::Client;
use tracing::debug;

/// Downloads the feed from `url`. No retry; a non-2xx status is a feed error.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Resolve `location` against `base_url` (`"https://host/site/"` + `"updated_file.csv"`).
    /// Absolute URLs are kept as they are.
    pub fn resolve(base_url: &str, location: &str) -> String {
        if is_url(location) {
            return location.to_string();
        }
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            location.trim_start_matches("./").trim_start_matches('/')
        )
    }
}

/// True for `http://` and `https://` locations.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[async_trait::async_trait]
impl ShowtimeSource for HttpSource {
    async fn fetch(&self) -> Result<String, DomainError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Feed(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            return Err(DomainError::Feed(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| DomainError::Feed(format!("read body: {}", e)))?;
        debug!(url = %self.url, bytes = body.len(), "feed downloaded");
        Ok(body)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
