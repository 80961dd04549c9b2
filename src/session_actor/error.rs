//! Error types for the session actor.

use thiserror::Error;

use crate::notifier::NotifyError;

/// Errors surfaced by session operations.
///
/// All of these are recoverable: the session stays interactive and the cart
/// is preserved on every failure path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The candidate password did not match the configured secret.
    #[error("login rejected: wrong password")]
    LoginMismatch,

    /// Adds with quantity 0 are rejected, not stored.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// Cart operations require a logged-in session.
    #[error("not logged in")]
    NotLoggedIn,

    /// Submitting an empty cart is rejected.
    #[error("cart is empty")]
    EmptyCart,

    /// Notification delivery failed; the cart was left untouched.
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// Channel plumbing failure between client and actor.
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}
