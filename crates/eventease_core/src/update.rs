use crate::status::first_non_blank;
use crate::{
    is_accepted_document, AppState, Effect, Message, Msg, UploadStatus, CHAT_FAILURE_TEXT,
    EMPTY_ANSWER_TEXT, NO_FILE_TEXT, UNSUPPORTED_FILE_TEXT, UPLOADING_TEXT, UPLOAD_FAILED_TEXT,
    UPLOAD_SUCCESS_TEXT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The input control is disabled while a reply is outstanding.
            if !state.chat().is_sending() && state.chat().input() != text {
                state.chat_mut().input = text;
            }
            Vec::new()
        }
        Msg::SendClicked => {
            if state.chat().is_sending() || state.chat().input().trim().is_empty() {
                return (state, Vec::new());
            }
            let chat = state.chat_mut();
            let query = std::mem::take(&mut chat.input);
            chat.messages.push(Message::user(query.clone()));
            chat.is_sending = true;
            vec![Effect::SendChat { query }]
        }
        Msg::ChatAnswered { answer } => {
            if state.chat().is_sending() {
                let text = first_non_blank(&[answer.as_deref()])
                    .unwrap_or_else(|| EMPTY_ANSWER_TEXT.to_owned());
                let chat = state.chat_mut();
                chat.messages.push(Message::bot(text));
                chat.is_sending = false;
            }
            Vec::new()
        }
        Msg::ChatFailed { .. } => {
            if state.chat().is_sending() {
                let chat = state.chat_mut();
                chat.messages.push(Message::bot(CHAT_FAILURE_TEXT));
                chat.is_sending = false;
            }
            Vec::new()
        }
        Msg::FileSelected(selection) => {
            if state.upload().is_uploading() {
                return (state, Vec::new());
            }
            let upload = state.upload_mut();
            match selection {
                Some(file) if !is_accepted_document(file.path()) => {
                    upload.set_status(UploadStatus::error(UNSUPPORTED_FILE_TEXT));
                }
                selection => upload.selected = selection,
            }
            Vec::new()
        }
        Msg::UploadClicked => {
            if state.upload().is_uploading() {
                return (state, Vec::new());
            }
            let Some(file) = state.upload().selected().cloned() else {
                state.upload_mut().set_status(UploadStatus::info(NO_FILE_TEXT));
                return (state, Vec::new());
            };
            let upload = state.upload_mut();
            upload.is_uploading = true;
            upload.set_status(UploadStatus::info(UPLOADING_TEXT));
            vec![Effect::UploadDocument {
                file,
                override_existing: true,
            }]
        }
        Msg::UploadSucceeded { detail } => {
            if state.upload().is_uploading() {
                let text = first_non_blank(&[detail.as_deref()])
                    .unwrap_or_else(|| UPLOAD_SUCCESS_TEXT.to_owned());
                let upload = state.upload_mut();
                upload.set_status(UploadStatus::success(text));
                upload.selected = None;
                upload.is_uploading = false;
            }
            Vec::new()
        }
        Msg::UploadFailed { detail, message } => {
            if state.upload().is_uploading() {
                let text = first_non_blank(&[detail.as_deref(), message.as_deref()])
                    .unwrap_or_else(|| UPLOAD_FAILED_TEXT.to_owned());
                let upload = state.upload_mut();
                upload.set_status(UploadStatus::error(text));
                upload.is_uploading = false;
            }
            Vec::new()
        }
    };

    (state, effects)
}
