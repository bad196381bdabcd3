use crate::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the chat input box.
    InputChanged(String),
    /// User pressed Enter or the send control.
    SendClicked,
    /// Assistant answered the outstanding chat request.
    ChatAnswered { answer: Option<String> },
    /// Outstanding chat request failed.
    ChatFailed { message: String },
    /// User picked a file (or cleared the picker with `None`).
    FileSelected(Option<SelectedFile>),
    /// User pressed the upload control.
    UploadClicked,
    /// Outstanding upload finished successfully.
    UploadSucceeded { detail: Option<String> },
    /// Outstanding upload failed. `detail` is the server-provided reason,
    /// `message` the transport error text.
    UploadFailed {
        detail: Option<String>,
        message: Option<String>,
    },
}
