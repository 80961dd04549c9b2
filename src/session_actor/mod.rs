//! # Session Actor
//!
//! The server half of the ordering core. One actor owns the [`Session`]
//! (login flag, cart, last receipt) exclusively and processes
//! [`SessionRequest`] messages sequentially, so cart mutations never race
//! and no locks are needed.
//!
//! Dependencies arrive via [`SessionContext`] at `run` time rather than at
//! construction, so tests can swap the notifier for a
//! [`MockNotifier`](crate::notifier::MockNotifier).
//!
//! Order submission is the one multi-step operation: format the message,
//! make a single notification attempt, and clear the cart only on confirmed
//! delivery. Any failure leaves the cart byte-for-byte untouched so the
//! operator can retry without re-entering items.

pub mod error;
pub mod message;

pub use error::SessionError;
pub use message::{Response, SessionRequest};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::clients::SessionClient;
use crate::model::{CartLine, Receipt, Session, SessionView};
use crate::notifier::{self, Notifier};

/// Everything the session actor needs from the outside world, injected at
/// `run` time.
pub struct SessionContext {
    /// The configured shared secret. Plaintext equality only.
    pub password: String,
    pub notifier: Arc<dyn Notifier>,
}

/// Owns the session state and the receiving end of the request channel.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    session: Session,
}

/// Creates a new session actor and its client.
pub fn new(buffer_size: usize) -> (SessionActor, SessionClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let actor = SessionActor {
        receiver,
        session: Session::default(),
    };
    (actor, SessionClient::new(sender))
}

impl SessionActor {
    /// Runs the event loop until every client handle is dropped.
    pub async fn run(mut self, context: SessionContext) {
        info!("Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Login {
                    candidate,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.login(&candidate, &context.password));
                }
                SessionRequest::AddLine {
                    name,
                    unit_price,
                    quantity,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.add_line(name, unit_price, quantity));
                }
                SessionRequest::ClearCart { respond_to } => {
                    debug!("Clearing cart");
                    self.session.cart.clear();
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::Total { respond_to } => {
                    let _ = respond_to.send(Ok(self.session.cart.total()));
                }
                SessionRequest::OrderText { respond_to } => {
                    let _ = respond_to.send(Ok(self.session.cart.order_text()));
                }
                SessionRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                SessionRequest::SubmitOrder { respond_to } => {
                    let result = self.submit_order(context.notifier.as_ref()).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(lines = self.session.cart.len(), "Session actor shutdown");
    }

    fn login(&mut self, candidate: &str, secret: &str) -> Result<(), SessionError> {
        if candidate == secret {
            self.session.logged_in = true;
            info!("Login accepted");
            Ok(())
        } else {
            warn!("Login rejected");
            Err(SessionError::LoginMismatch)
        }
    }

    fn require_login(&self) -> Result<(), SessionError> {
        if self.session.logged_in {
            Ok(())
        } else {
            Err(SessionError::NotLoggedIn)
        }
    }

    fn add_line(
        &mut self,
        name: String,
        unit_price: u32,
        quantity: u32,
    ) -> Result<CartLine, SessionError> {
        self.require_login()?;
        if quantity == 0 {
            warn!(%name, "Rejected zero-quantity add");
            return Err(SessionError::InvalidQuantity);
        }

        let line = CartLine {
            name,
            quantity,
            unit_price,
        };
        self.session.cart.push(line.clone());
        debug!(name = %line.name, quantity, lines = self.session.cart.len(), "Line added");
        Ok(line)
    }

    async fn submit_order(&mut self, notifier: &dyn Notifier) -> Result<Receipt, SessionError> {
        self.require_login()?;
        if self.session.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        let order_text = self.session.cart.order_text();
        let total = self.session.cart.total();
        let message = notifier::order_message(&order_text, total);

        debug!(total, "Sending order notification");
        notifier.send(&message).await?;

        // Confirmed delivery: only now does the cart reset. The receipt
        // stays on the session so the confirmation outlives the cart.
        self.session.cart.clear();
        let receipt = Receipt { order_text, total };
        self.session.last_receipt = Some(receipt.clone());
        info!(total, "Order submitted");
        Ok(receipt)
    }

    fn snapshot(&self) -> SessionView {
        SessionView {
            logged_in: self.session.logged_in,
            lines: self.session.cart.lines().to_vec(),
            total: self.session.cart.total(),
            last_receipt: self.session.last_receipt.clone(),
        }
    }
}
