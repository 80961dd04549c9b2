//! # System Lifecycle & Orchestration
//!
//! Individual pieces are simple; wiring them together is where the
//! complexity lives. This module is the conductor: it builds the notifier
//! from config, spawns the session actor with its context injected, hands
//! out the client, and coordinates graceful shutdown (drop the client, let
//! the actor drain its channel, await the task). It also owns the
//! observability setup ([`setup_tracing`]).

pub mod kiosk;
pub mod tracing;

pub use kiosk::Kiosk;
pub use self::tracing::setup_tracing;
