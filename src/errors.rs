use reqwest::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Application,
    Input,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("api returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("api rejected the request: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    #[error("invalid form field `{field}`")]
    InvalidField { field: &'static str },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TrackerError {
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected { message }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) | Self::Status { .. } | Self::Decode(_) => FailureKind::Transport,
            Self::Rejected { .. } => FailureKind::Application,
            Self::InvalidField { .. } | Self::Config(_) => FailureKind::Input,
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
