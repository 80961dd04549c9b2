//! Session state owned by the session actor.

use crate::model::{Cart, CartLine};

/// Confirmation of a delivered order, retained on the session so the
/// presentation layer can keep showing it after the cart resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub order_text: String,
    pub total: u64,
}

/// The single operator session: login flag plus the cart it owns.
///
/// Created logged-out with an empty cart; everything here is in-memory and
/// dropped when the actor shuts down.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub logged_in: bool,
    pub cart: Cart,
    pub last_receipt: Option<Receipt>,
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub logged_in: bool,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub last_receipt: Option<Receipt>,
}
