//! Pure data structures for the ordering domain.

pub mod cart;
pub mod draft;
pub mod session;

pub use cart::{Cart, CartLine};
pub use draft::{DraftQuantities, MAX_DRAFT_QUANTITY};
pub use session::{Receipt, Session, SessionView};
