use eventease_core::{AppViewModel, StatusKind, UploadStatus};

use super::bubble::render_bubble;
use super::constants::{APP_TAGLINE, APP_TITLE, TYPING_TEXT};

/// Turns successive view models into the lines that changed since the last render.
///
/// The terminal is append-only, so the renderer remembers what it already
/// printed: the number of conversation messages, the status revision, the
/// selected file and whether the "typing" line was shown.
pub struct TerminalRenderer {
    width: usize,
    printed_messages: usize,
    status_revision: u64,
    selected_name: Option<String>,
    showed_typing: bool,
}

impl TerminalRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            printed_messages: 0,
            status_revision: 0,
            selected_name: None,
            showed_typing: false,
        }
    }

    pub fn banner(&self) -> Vec<String> {
        let rule = "=".repeat(self.width);
        vec![
            rule.clone(),
            center(APP_TITLE, self.width),
            center(APP_TAGLINE, self.width),
            rule,
        ]
    }

    pub fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();

        for message in view.chat.messages.iter().skip(self.printed_messages) {
            lines.extend(render_bubble(message, self.width));
        }
        self.printed_messages = view.chat.messages.len();

        if view.chat.is_sending && !self.showed_typing {
            lines.push(format!("  {TYPING_TEXT}"));
        }
        self.showed_typing = view.chat.is_sending;

        if view.upload.selected_name != self.selected_name {
            if let Some(name) = &view.upload.selected_name {
                lines.push(format!("[upload] Selected: {name}"));
            }
            self.selected_name = view.upload.selected_name.clone();
        }

        if view.upload.status_revision != self.status_revision {
            if let Some(status) = &view.upload.status {
                lines.push(status_line(status));
            }
            self.status_revision = view.upload.status_revision;
        }

        lines
    }
}

pub fn status_line(status: &UploadStatus) -> String {
    let marker = match status.kind {
        StatusKind::Info => "..",
        StatusKind::Success => "ok",
        StatusKind::Error => "!!",
    };
    format!("[upload] {marker} {}", status.text)
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}
