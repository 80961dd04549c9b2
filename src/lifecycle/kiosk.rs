//! Wires the session actor to its notifier and manages shutdown.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::clients::SessionClient;
use crate::config::Config;
use crate::notifier::{Notifier, WebhookNotifier};
use crate::session_actor::{self, SessionContext};

const CHANNEL_CAPACITY: usize = 32;

/// The running ordering system: one session actor plus its client.
///
/// Construction follows the late-binding pattern: the actor is created
/// without dependencies, then started with its context injected.
pub struct Kiosk {
    pub session_client: SessionClient,
    handle: JoinHandle<()>,
}

impl Kiosk {
    /// Starts the kiosk with the production webhook notifier.
    pub fn new(config: &Config) -> Self {
        let notifier = Arc::new(WebhookNotifier::new(config.webhook_url.clone()));
        Self::with_notifier(config, notifier)
    }

    /// Starts the kiosk with an injected notifier. Tests use this with
    /// [`MockNotifier`](crate::notifier::MockNotifier).
    pub fn with_notifier(config: &Config, notifier: Arc<dyn Notifier>) -> Self {
        let (actor, session_client) = session_actor::new(CHANNEL_CAPACITY);
        let context = SessionContext {
            password: config.password.clone(),
            notifier,
        };
        let handle = tokio::spawn(actor.run(context));
        info!("Kiosk started");

        Self {
            session_client,
            handle,
        }
    }

    /// Drops the client so the actor drains its channel and exits, then
    /// awaits the task.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.session_client);
        self.handle.await.map_err(|e| e.to_string())?;
        info!("Kiosk stopped");
        Ok(())
    }
}
