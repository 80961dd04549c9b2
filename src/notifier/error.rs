//! Error types for outbound notifications.

use thiserror::Error;

/// Failures delivering a notification.
///
/// None of these are fatal: the caller surfaces the message and keeps the
/// cart intact so the operator can retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// No webhook URL was configured; no network attempt was made.
    #[error("webhook URL is not configured")]
    NotConfigured,

    /// The endpoint answered with something other than 204 No Content.
    #[error("webhook rejected the notification: status {status}: {body}")]
    Delivery { status: u16, body: String },

    /// DNS failure, timeout, connection reset and friends.
    #[error("webhook transport error: {0}")]
    Transport(String),
}
