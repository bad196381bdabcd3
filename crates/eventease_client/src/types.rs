use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
    pub conversation_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatAnswer {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Response of `POST /ingest`. The service may also report `status` and `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct IngestReceipt {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// A document ready to be sent as the `file` field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ChatCompleted {
        result: Result<ChatAnswer, ApiError>,
    },
    UploadCompleted {
        file_name: String,
        result: Result<IngestReceipt, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
    /// `detail` field of the service's error body, when it is a string.
    pub detail: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Network,
    Decode,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "invalid response body"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}
