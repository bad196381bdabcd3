use std::path::{Path, PathBuf};

use crate::view_model::{AppViewModel, ChatView, UploadView};
use crate::{Message, UploadStatus};

/// A file chosen for the next upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    /// Builds a selection from a path; the display name is its final component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    pub(crate) messages: Vec<Message>,
    pub(crate) input: String,
    pub(crate) is_sending: bool,
}

impl ChatState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_sending(&self) -> bool {
        self.is_sending
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    pub(crate) selected: Option<SelectedFile>,
    status: Option<UploadStatus>,
    status_revision: u64,
    pub(crate) is_uploading: bool,
}

impl UploadState {
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> Option<&UploadStatus> {
        self.status.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    /// Replaces the status line. Every call counts as a new status, even with equal text.
    pub(crate) fn set_status(&mut self, status: UploadStatus) {
        self.status = Some(status);
        self.status_revision += 1;
    }
}

/// State of both panels. The panels never read each other's fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    chat: ChatState,
    upload: UploadState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub(crate) fn chat_mut(&mut self) -> &mut ChatState {
        self.dirty = true;
        &mut self.chat
    }

    pub(crate) fn upload_mut(&mut self) -> &mut UploadState {
        self.dirty = true;
        &mut self.upload
    }

    /// True while either panel waits for the assistant service.
    pub fn has_pending_request(&self) -> bool {
        self.chat.is_sending || self.upload.is_uploading
    }

    /// Returns whether state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let chat = ChatView {
            messages: self.chat.messages.clone(),
            input: self.chat.input.clone(),
            input_enabled: !self.chat.is_sending,
            send_enabled: !self.chat.is_sending && !self.chat.input.trim().is_empty(),
            is_sending: self.chat.is_sending,
        };
        let upload = UploadView {
            selected_name: self.upload.selected.as_ref().map(|file| file.name.clone()),
            status: self.upload.status.clone(),
            status_revision: self.upload.status_revision,
            upload_enabled: self.upload.selected.is_some() && !self.upload.is_uploading,
            is_uploading: self.upload.is_uploading,
        };
        AppViewModel {
            chat,
            upload,
            dirty: self.dirty,
        }
    }
}
