/// Where activation hands the user off. Fixed for the life of the process.
pub const CHATBOT_URL: &str =
    "https://huggingface.co/spaces/UniversityAIChatbot/UnivAI_Inquiries_Chatbot";

/// Site-level configuration. The companion core never reads this directly;
/// the app passes the URL down at activation time.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute URL of the externally hosted chatbot.
    pub chatbot_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            chatbot_url: CHATBOT_URL.to_string(),
        }
    }
}
