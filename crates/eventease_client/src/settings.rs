use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Conversation id used by the anonymous session.
pub const DEFAULT_CONVERSATION_ID: &str = "demo_user";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: Url,
    pub conversation_id: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            conversation_id: DEFAULT_CONVERSATION_ID.to_string(),
        }
    }
}

impl ClientSettings {
    pub fn new(base_url: &str, conversation_id: impl Into<String>) -> Result<Self, SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) url".to_string()));
        }
        Ok(Self {
            base_url: parsed,
            conversation_id: conversation_id.into(),
        })
    }

    /// Resolves an endpoint path against the base url, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(None);
        url
    }
}
