//! # Notifier
//!
//! Relays a formatted order message to an external chat webhook.
//!
//! The [`Notifier`] trait is the seam between the session actor and the
//! outside world: production wires in [`WebhookNotifier`], tests wire in
//! [`MockNotifier`]. Delivery is a single blocking attempt with no retry;
//! every failure is surfaced verbatim to the caller.

pub mod error;
pub mod mock;

pub use error::NotifyError;
pub use mock::MockNotifier;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Display name attached to every webhook message. Fixed at the integration
/// layer, never user data.
const SENDER_NAME: &str = "Kiosk Notifier";
const SENDER_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/3081/3081840.png";

/// Delivers one text message to the external chat channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A single attempt; no retry, no queueing.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// The fixed envelope the chat endpoint expects.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
    username: &'a str,
    avatar_url: &'a str,
}

/// Sends order notifications to a pre-shared chat webhook URL.
///
/// The URL is optional so the system can start without one configured;
/// absence becomes [`NotifyError::NotConfigured`] at send time, without any
/// network attempt.
pub struct WebhookNotifier {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(NotifyError::NotConfigured)?;

        let payload = WebhookPayload {
            content: message,
            username: SENDER_NAME,
            avatar_url: SENDER_AVATAR_URL,
        };

        let response = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            debug!("Notification accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Notification rejected");
        Err(NotifyError::Delivery {
            status: status.as_u16(),
            body,
        })
    }
}

/// Formats the fixed chat envelope around the rendered order text.
pub fn order_message(order_text: &str, total: u64) -> String {
    format!(
        "📢 **[New order]**\n\
         ━━━━━━━━━━━━━━\n\
         🧾 **Order**\n\
         {order_text}\n\
         \n\
         💰 **Total: {total}원**\n\
         ━━━━━━━━━━━━━━"
    )
}
