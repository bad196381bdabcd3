use std::path::Path;

pub const EMPTY_ANSWER_TEXT: &str = "No response.";
pub const CHAT_FAILURE_TEXT: &str = "Sorry, something went wrong. Please try again.";
pub const NO_FILE_TEXT: &str = "Please choose a file first.";
pub const UPLOADING_TEXT: &str = "Uploading...";
pub const UPLOAD_SUCCESS_TEXT: &str = "File uploaded and indexed!";
pub const UPLOAD_FAILED_TEXT: &str = "Upload failed.";
pub const UNSUPPORTED_FILE_TEXT: &str =
    "Unsupported file type. Choose a PDF, TXT, DOC, or DOCX file.";

/// Document extensions the upload picker offers.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "txt", "doc", "docx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Status line of the upload panel. Replaced on every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub text: String,
    pub kind: StatusKind,
}

impl UploadStatus {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

pub fn is_accepted_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// First candidate that is present and not blank.
pub(crate) fn first_non_blank(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
        .map(|text| (*text).to_owned())
}
