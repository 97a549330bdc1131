use crate::errors::TrackerError;
use reqwest::Url;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    base_url: String,
}

impl TrackerConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TrackerError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|err| TrackerError::Config(format!("{trimmed:?}: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TrackerError::Config(format!(
                "unsupported scheme `{}` in {trimmed:?}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub fn resolve_config() -> Result<TrackerConfig, TrackerError> {
    if let Ok(url) = env::var("TOURISM_API_URL") {
        return TrackerConfig::new(url);
    }

    Ok(TrackerConfig::default())
}
