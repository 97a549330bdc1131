use crate::errors::TrackerError;
use crate::transport::ApiTransport;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode, &'static str),
    Unreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

// Paths without a scripted reply behave as unreachable.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    sent: Mutex<Vec<SentRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, path: &str, reply: Reply) -> Self {
        self.replies.insert(path.to_string(), reply);
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.path == path)
            .count()
    }

    pub fn healthy() -> Self {
        Self::new()
            .reply("/health", Reply::Json(serde_json::json!({ "status": "healthy" })))
            .reply(
                "/vue-totale",
                Reply::Json(serde_json::json!({ "success": true, "vues_totales": 101 })),
            )
            .reply("/page-vue", Reply::Json(serde_json::json!({ "success": true })))
            .reply("/visiteur", Reply::Json(serde_json::json!({ "success": true })))
            .reply(
                "/stats",
                Reply::Json(serde_json::json!({
                    "vues_totales": 101,
                    "nombre_visiteurs": 12,
                    "nombre_pages": 4,
                    "derniere_activite": "2026-07-14 09:30:00"
                })),
            )
    }
}

impl ApiTransport for ScriptedTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TrackerError> {
        self.sent.lock().unwrap().push(SentRequest {
            method,
            path: path.to_string(),
            body,
        });

        match self.replies.get(path) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(status, detail)) => Err(TrackerError::Status {
                status: *status,
                detail: detail.to_string(),
            }),
            Some(Reply::Unreachable) | None => {
                Err(TrackerError::Network("connection refused".into()))
            }
        }
    }
}
