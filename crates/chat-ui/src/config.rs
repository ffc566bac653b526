//! Widget configuration

/// Settings for the chat widget and its service client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Origin of the chat service; requests go to `{api_base_url}/chat`
    pub api_base_url: String,
    /// How long a submission may run before the loading indicator appears
    pub loading_delay_ms: u32,
    /// Delay between revealed words
    pub reveal_interval_ms: u32,
    pub greeting: String,
    pub starter_followups: Vec<String>,
    /// Bot text shown when a submission fails
    pub error_message: String,
}

impl ChatConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:8000";

    pub const LOADING_DELAY_MS: u32 = 400;

    pub const REVEAL_INTERVAL_MS: u32 = 150;

    pub const GREETING: &'static str =
        "Hello! How can I assist you with IT Helpdesk related queries?";

    pub const STARTER_FOLLOWUPS: [&'static str; 4] = [
        "How do I reset my password?",
        "How do I connect to the VPN?",
        "My laptop is running slow",
        "How do I request new software?",
    ];

    pub const ERROR_MESSAGE: &'static str = "Error processing your request.";

    /// Base URL baked in at build time via `HELPDESK_CHAT_API_URL`, if set
    fn build_time_base_url() -> String {
        option_env!("HELPDESK_CHAT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(Self::DEFAULT_API_BASE_URL)
            .to_string()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::build_time_base_url(),
            loading_delay_ms: Self::LOADING_DELAY_MS,
            reveal_interval_ms: Self::REVEAL_INTERVAL_MS,
            greeting: Self::GREETING.to_string(),
            starter_followups: Self::STARTER_FOLLOWUPS
                .iter()
                .map(ToString::to_string)
                .collect(),
            error_message: Self::ERROR_MESSAGE.to_string(),
        }
    }
}
