//! # Session Client
//!
//! Type-safe async API over the session actor's request channel. Holds only
//! the sender, so it is cheap to clone and share.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::model::{CartLine, DraftQuantities, Receipt, SessionView};
use crate::session_actor::{SessionError, SessionRequest};

#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T, SessionError>>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| SessionError::ActorCommunication("session actor closed".to_string()))?;
        response.await.map_err(|_| {
            SessionError::ActorCommunication("session actor dropped the response".to_string())
        })?
    }

    /// Attempts to log in with the candidate password.
    #[instrument(skip(self, candidate))]
    pub async fn login(&self, candidate: &str) -> Result<(), SessionError> {
        debug!("Sending login request");
        let candidate = candidate.to_string();
        self.request(|respond_to| SessionRequest::Login {
            candidate,
            respond_to,
        })
        .await
    }

    /// Appends a confirmed quantity of one item to the cart.
    #[instrument(skip(self))]
    pub async fn add_line(
        &self,
        name: &str,
        unit_price: u32,
        quantity: u32,
    ) -> Result<CartLine, SessionError> {
        debug!("Sending add_line request");
        let name = name.to_string();
        self.request(|respond_to| SessionRequest::AddLine {
            name,
            unit_price,
            quantity,
            respond_to,
        })
        .await
    }

    /// Reads the pending quantity for `(category, item)` from the
    /// caller-owned draft map, adds it to the cart, and resets the draft to
    /// 0 on success so a repeated click cannot re-add a stale value. On
    /// failure the draft is left as entered.
    #[instrument(skip(self, drafts))]
    pub async fn add_from_draft(
        &self,
        drafts: &mut DraftQuantities,
        category: &str,
        item: &str,
        unit_price: u32,
    ) -> Result<CartLine, SessionError> {
        let quantity = drafts.get(category, item);
        let line = self.add_line(item, unit_price, quantity).await?;
        drafts.reset(category, item);
        Ok(line)
    }

    /// Empties the cart unconditionally.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), SessionError> {
        debug!("Sending clear_cart request");
        self.request(|respond_to| SessionRequest::ClearCart { respond_to })
            .await
    }

    pub async fn total(&self) -> Result<u64, SessionError> {
        self.request(|respond_to| SessionRequest::Total { respond_to })
            .await
    }

    pub async fn order_text(&self) -> Result<String, SessionError> {
        self.request(|respond_to| SessionRequest::OrderText { respond_to })
            .await
    }

    /// Read-only view of the whole session for the presentation layer.
    pub async fn snapshot(&self) -> Result<SessionView, SessionError> {
        self.request(|respond_to| SessionRequest::Snapshot { respond_to })
            .await
    }

    /// Relays the cart as a chat notification. On confirmed delivery the
    /// cart is cleared and the receipt returned; on any failure the cart is
    /// preserved for retry.
    #[instrument(skip(self))]
    pub async fn submit_order(&self) -> Result<Receipt, SessionError> {
        debug!("Sending submit_order request");
        self.request(|respond_to| SessionRequest::SubmitOrder { respond_to })
            .await
    }
}
