use crate::config::TrackerConfig;
use crate::errors::TrackerError;
use reqwest::{header::CONTENT_TYPE, Client, Method};
use serde_json::Value;
use std::future::Future;
use tracing::debug;

pub trait ApiTransport: Send + Sync {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, TrackerError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: TrackerConfig,
    http: Client,
}

impl HttpTransport {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

impl ApiTransport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TrackerError> {
        let url = self.config.endpoint(path);
        debug!("{method} {url}");

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(TrackerError::Status {
                status,
                detail: error_detail(&bytes),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

// The API reports failures as `{"detail": ...}`; fall back to the raw body.
fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => Value::Object(map).to_string(),
        },
        _ => String::from_utf8_lossy(body).trim().to_string(),
    }
}
