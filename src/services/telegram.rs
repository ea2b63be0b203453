//! Report delivery to the Telegram Bot API
use crate::config::TelegramCredentials;
use async_trait::async_trait;
use serde::Serialize;

/// Result of a single delivery attempt. None of these are errors for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    SkippedNoConfig,
    Failed(String),
}

impl DeliveryOutcome {
    pub fn telegram_sent(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }

    pub fn message(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered => "Report sent to Telegram",
            DeliveryOutcome::SkippedNoConfig => "Test submitted successfully",
            DeliveryOutcome::Failed(_) => "Report submitted (Telegram failed)",
        }
    }
}

#[async_trait]
pub trait ReportNotifier: Send + Sync {
    /// Whether `deliver` would attempt an outbound call at all.
    fn is_configured(&self) -> bool;

    async fn deliver(&self, report: &str) -> DeliveryOutcome;
}

#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[derive(Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    credentials: Option<TelegramCredentials>,
}

impl TelegramNotifier {
    pub fn new(api_url: impl Into<String>, credentials: Option<TelegramCredentials>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            credentials,
        }
    }

    fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, bot_token)
    }
}

#[async_trait]
impl ReportNotifier for TelegramNotifier {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn deliver(&self, report: &str) -> DeliveryOutcome {
        let Some(credentials) = &self.credentials else {
            tracing::warn!("Telegram credentials not set, skipping report delivery");
            return DeliveryOutcome::SkippedNoConfig;
        };

        let payload = SendMessagePayload {
            chat_id: &credentials.chat_id,
            text: report,
            parse_mode: "Markdown",
            disable_web_page_preview: true,
        };

        // Only transport failures count; the API's verdict is logged, not acted on.
        match self
            .client
            .post(self.send_message_url(&credentials.bot_token))
            .json(&payload)
            .send()
            .await
        {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    tracing::info!("Report sent to Telegram chat {}", credentials.chat_id);
                } else {
                    tracing::warn!(
                        "Telegram answered {} for chat {}",
                        status,
                        credentials.chat_id
                    );
                }
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                let e = e.without_url();
                tracing::error!("Telegram error: {}", e);
                DeliveryOutcome::Failed(e.to_string())
            }
        }
    }
}
