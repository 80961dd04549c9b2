//! # PC-Cafe Kiosk Ordering Core
//!
//! A password-gated, single-operator ordering system: the operator builds a
//! cart from a fixed menu and submits the order, which is relayed as a
//! formatted notification to an external chat webhook.
//!
//! ## Components
//!
//! - **[model]**: Pure data structures — [`Cart`](model::Cart),
//!   [`CartLine`](model::CartLine), [`Session`](model::Session),
//!   [`DraftQuantities`](model::DraftQuantities).
//! - **[menu]**: The fixed category → item → price catalog.
//! - **[session_actor]**: The server half. One actor owns the session state
//!   exclusively and processes requests sequentially over a channel.
//! - **[clients]**: [`SessionClient`](clients::SessionClient), the type-safe
//!   async wrapper hiding the message passing.
//! - **[notifier]**: The webhook seam — production
//!   [`WebhookNotifier`](notifier::WebhookNotifier) and the in-memory
//!   [`MockNotifier`](notifier::MockNotifier) for tests.
//! - **[config]**: Secret-store-then-environment resolution of the password
//!   and webhook URL.
//! - **[lifecycle]**: Orchestration — [`Kiosk`](lifecycle::Kiosk) wires the
//!   actor to its notifier and manages shutdown.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pos_kiosk::config::Config;
//! use pos_kiosk::lifecycle::Kiosk;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), String> {
//!     let config = Config::load();
//!     let kiosk = Kiosk::new(&config);
//!
//!     kiosk.session_client.login(&config.password).await.map_err(|e| e.to_string())?;
//!     kiosk.session_client.add_line("Coke", 1500, 2).await.map_err(|e| e.to_string())?;
//!     let receipt = kiosk.session_client.submit_order().await.map_err(|e| e.to_string())?;
//!     println!("delivered: {}", receipt.order_text);
//!
//!     kiosk.shutdown().await
//! }
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod notifier;
pub mod session_actor;
