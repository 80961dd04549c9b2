//! Client wrappers hiding the message-passing plumbing.

pub mod session_client;

pub use session_client::SessionClient;
