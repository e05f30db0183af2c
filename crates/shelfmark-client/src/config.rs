use std::time::Duration;

use reqwest::Url;
use shelfmark_core::{DEFAULT_BASE_URL, DEFAULT_LOGIN_PATH};

use crate::ApiError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin plus API prefix, e.g. `https://books.example.com/api`.
    pub base_url: String,
    /// Carried by [`crate::SessionEvent::Expired`] when the session is lost.
    pub login_path: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: format!("shelfmark/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base URL.
    ///
    /// Absolute URLs (pagination links) are accepted only when they share the
    /// base URL's scheme, host and port, since the access token goes with them.
    pub fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            self.ensure_same_origin(path)?;
            return Ok(path.to_string());
        }
        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    fn ensure_same_origin(&self, absolute: &str) -> Result<(), ApiError> {
        let base = Url::parse(&self.base_url)
            .map_err(|err| ApiError::InvalidRequest(format!("invalid base url: {err}")))?;
        let target = Url::parse(absolute)
            .map_err(|err| ApiError::InvalidRequest(format!("invalid url {absolute}: {err}")))?;
        if base.origin() != target.origin() {
            return Err(ApiError::InvalidRequest(format!(
                "refusing to send request to {} outside {}",
                target.origin().ascii_serialization(),
                base.origin().ascii_serialization()
            )));
        }
        Ok(())
    }
}
