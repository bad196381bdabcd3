use crate::{Message, UploadStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub chat: ChatView,
    pub upload: UploadView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatView {
    pub messages: Vec<Message>,
    pub input: String,
    pub input_enabled: bool,
    pub send_enabled: bool,
    pub is_sending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadView {
    pub selected_name: Option<String>,
    pub status: Option<UploadStatus>,
    pub status_revision: u64,
    pub upload_enabled: bool,
    pub is_uploading: bool,
}

impl UploadView {
    pub fn button_label(&self) -> &'static str {
        if self.is_uploading {
            "Uploading..."
        } else {
            "Upload Document"
        }
    }
}
