use eventease_logging::{ee_debug, ee_warn};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::{
    ApiError, ChatAnswer, ChatRequest, ClientSettings, DocumentUpload, FailureKind, IngestReceipt,
};

/// Operations offered by the assistant service.
///
/// Both calls are fire-once: no timeout, no cancellation and no retry. Any
/// transport or HTTP failure is returned to the caller unchanged.
#[async_trait::async_trait]
pub trait AssistantApi: Send + Sync {
    async fn send_chat_message(
        &self,
        query: &str,
        conversation_id: &str,
    ) -> Result<ChatAnswer, ApiError>;

    async fn upload_document(
        &self,
        document: DocumentUpload,
        override_existing: bool,
    ) -> Result<IngestReceipt, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAssistant {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestAssistant {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl AssistantApi for ReqwestAssistant {
    async fn send_chat_message(
        &self,
        query: &str,
        conversation_id: &str,
    ) -> Result<ChatAnswer, ApiError> {
        let url = self.settings.endpoint("chat");
        ee_debug!("POST {} query_len={}", url, query.len());

        let response = self
            .client
            .post(url)
            .json(&ChatRequest {
                query,
                conversation_id,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }

    async fn upload_document(
        &self,
        document: DocumentUpload,
        override_existing: bool,
    ) -> Result<IngestReceipt, ApiError> {
        let mut url = self.settings.endpoint("ingest");
        url.query_pairs_mut()
            .append_pair("override", if override_existing { "true" } else { "false" });
        ee_debug!(
            "POST {} file={} bytes={}",
            url,
            document.file_name,
            document.bytes.len()
        );

        let part = Part::bytes(document.bytes).file_name(document.file_name);
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let detail = error_detail(&body);
        ee_warn!(
            "assistant service answered {} (detail present: {})",
            status,
            detail.is_some()
        );
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            format!("Request failed with status code {}", status.as_u16()),
        )
        .with_detail(detail));
    }

    // A 2xx body that is empty or not the expected JSON counts as every
    // optional field being absent; the caller falls back to its literal.
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    match serde_json::from_slice(&body) {
        Ok(value) => Ok(value),
        Err(err) => {
            ee_warn!("ignoring undecodable {} response body: {}", status, err);
            Ok(T::default())
        }
    }
}

/// Extracts a string `detail` from a FastAPI-style error body.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.trim().is_empty())
        .map(str::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
