pub const APP_TITLE: &str = "EventEase - Your Smart Event Planning Companion";
pub const APP_TAGLINE: &str =
    "Get instant answers and upload documents to enhance your event planning";

pub const USER_LABEL: &str = "you";
pub const BOT_LABEL: &str = "assistant";

/// Share of the panel width a bubble may occupy, in percent.
pub const BUBBLE_WIDTH_PERCENT: usize = 70;
pub const MIN_BUBBLE_TEXT_WIDTH: usize = 12;

pub const TYPING_TEXT: &str = "assistant is typing...";
pub const BUSY_HINT: &str = "The assistant is still replying; wait for the answer before sending.";
pub const UPLOAD_BUSY_HINT: &str =
    "An upload is in progress; choose another file once it finishes.";
