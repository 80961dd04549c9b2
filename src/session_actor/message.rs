//! Messages understood by the session actor.

use tokio::sync::oneshot;

use crate::model::{CartLine, Receipt, SessionView};
use crate::session_actor::SessionError;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Requests sent from the [`SessionClient`](crate::clients::SessionClient)
/// to the session actor. Each maps to one user action on the ordering page.
#[derive(Debug)]
pub enum SessionRequest {
    Login {
        candidate: String,
        respond_to: Response<()>,
    },
    AddLine {
        name: String,
        unit_price: u32,
        quantity: u32,
        respond_to: Response<CartLine>,
    },
    ClearCart {
        respond_to: Response<()>,
    },
    Total {
        respond_to: Response<u64>,
    },
    OrderText {
        respond_to: Response<String>,
    },
    Snapshot {
        respond_to: Response<SessionView>,
    },
    SubmitOrder {
        respond_to: Response<Receipt>,
    },
}
