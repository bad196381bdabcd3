use std::path::PathBuf;

/// One line typed at the prompt, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Chat text to send as typed.
    Say(String),
    SelectFile(PathBuf),
    Unselect,
    Upload,
    Help,
    Quit,
    /// Known command used without its argument.
    Usage(&'static str),
    Unknown(String),
    Empty,
}

pub const HELP_LINES: [&str; 7] = [
    "Type a question and press Enter to ask the assistant.",
    "  /file <path>   choose a document to upload (PDF, TXT, DOC, DOCX)",
    "  /unselect      forget the chosen document",
    "  /upload        upload and index the chosen document",
    "  /help          show this list",
    "  /quit          leave",
    "Start a message with // to send text beginning with a slash.",
];

pub fn parse_line(line: &str) -> InputCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return InputCommand::Empty;
    }

    let trimmed = line.trim_start();
    if let Some(escaped) = trimmed.strip_prefix("//") {
        return InputCommand::Say(format!("/{escaped}"));
    }
    let Some(command_line) = trimmed.strip_prefix('/') else {
        return InputCommand::Say(line.to_string());
    };

    let (command, argument) = match command_line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, unquote(rest.trim())),
        None => (command_line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "file" if argument.is_empty() => InputCommand::Usage("/file <path>"),
        "file" => InputCommand::SelectFile(PathBuf::from(argument)),
        "unselect" => InputCommand::Unselect,
        "upload" => InputCommand::Upload,
        "help" | "?" => InputCommand::Help,
        "quit" | "exit" => InputCommand::Quit,
        other => InputCommand::Unknown(other.to_string()),
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_sent_as_typed() {
        assert_eq!(
            parse_line("  Any vegan caterers?\n"),
            InputCommand::Say("  Any vegan caterers?".to_string())
        );
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_line(""), InputCommand::Empty);
        assert_eq!(parse_line("   \t\r\n"), InputCommand::Empty);
    }

    #[test]
    fn file_command_takes_a_path() {
        assert_eq!(
            parse_line("/file docs/agenda.pdf"),
            InputCommand::SelectFile(PathBuf::from("docs/agenda.pdf"))
        );
        assert_eq!(
            parse_line("/file \"My Docs/run sheet.docx\""),
            InputCommand::SelectFile(PathBuf::from("My Docs/run sheet.docx"))
        );
        assert_eq!(parse_line("/file   "), InputCommand::Usage("/file <path>"));
    }

    #[test]
    fn commands_ignore_case() {
        assert_eq!(parse_line("/UPLOAD"), InputCommand::Upload);
        assert_eq!(parse_line("/Quit"), InputCommand::Quit);
        assert_eq!(parse_line("/unselect"), InputCommand::Unselect);
        assert_eq!(parse_line("/?"), InputCommand::Help);
    }

    #[test]
    fn double_slash_escapes_text() {
        assert_eq!(
            parse_line("//shrug"),
            InputCommand::Say("/shrug".to_string())
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse_line("/venues now"),
            InputCommand::Unknown("venues".to_string())
        );
    }
}
