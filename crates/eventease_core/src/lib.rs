//! EventEase core: pure chat/upload state machine and view-model helpers.
mod effect;
mod message;
mod msg;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::Effect;
pub use message::{Message, Sender};
pub use msg::Msg;
pub use state::{AppState, ChatState, SelectedFile, UploadState};
pub use status::{
    is_accepted_document, StatusKind, UploadStatus, ACCEPTED_EXTENSIONS, CHAT_FAILURE_TEXT,
    EMPTY_ANSWER_TEXT, NO_FILE_TEXT, UNSUPPORTED_FILE_TEXT, UPLOADING_TEXT, UPLOAD_FAILED_TEXT,
    UPLOAD_SUCCESS_TEXT,
};
pub use update::update;
pub use view_model::{AppViewModel, ChatView, UploadView};
