//! EventEase client: HTTP access to the assistant service and background request execution.
mod api;
mod engine;
mod settings;
mod types;

pub use api::{AssistantApi, ReqwestAssistant};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use settings::{ClientSettings, SettingsError, DEFAULT_BASE_URL, DEFAULT_CONVERSATION_ID};
pub use types::{
    ApiError, ChatAnswer, ChatRequest, DocumentUpload, EngineEvent, FailureKind, IngestReceipt,
};
