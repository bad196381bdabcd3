use clap::Parser;
use eventease_client::{ClientSettings, SettingsError, DEFAULT_BASE_URL, DEFAULT_CONVERSATION_ID};

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "eventease",
    author,
    version,
    about = "Chat with the EventEase assistant and upload event documents",
    long_about = None
)]
pub struct Cli {
    /// Base URL of the assistant service
    #[arg(long, env = "EVENTEASE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Conversation id sent with every chat request
    #[arg(long, env = "EVENTEASE_CONVERSATION_ID", default_value = DEFAULT_CONVERSATION_ID)]
    pub conversation_id: String,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log_to: LogDestination,

    /// Width of the chat panel in columns
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(40..=400))]
    pub width: u16,
}

impl Cli {
    pub fn client_settings(&self) -> Result<ClientSettings, SettingsError> {
        ClientSettings::new(&self.api_url, self.conversation_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "eventease",
            "--api-url",
            "https://assistant.example.com",
            "--conversation-id",
            "planner-7",
            "--log-to",
            "both",
            "--width",
            "100",
        ])
        .unwrap();

        let settings = cli.client_settings().unwrap();
        assert_eq!(settings.base_url.as_str(), "https://assistant.example.com/");
        assert_eq!(settings.conversation_id, "planner-7");
        assert_eq!(cli.log_to, LogDestination::Both);
        assert_eq!(cli.width, 100);
    }

    #[test]
    fn rejects_narrow_panel() {
        assert!(Cli::try_parse_from(["eventease", "--width", "10"]).is_err());
    }

    #[test]
    fn invalid_api_url_is_a_settings_error() {
        let cli = Cli::try_parse_from(["eventease", "--api-url", "localhost:8000"]).unwrap();
        assert!(cli.client_settings().is_err());
    }
}
