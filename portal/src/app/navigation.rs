//! # Navigation Listener
//!
//! Consumes [`SessionEvent`]s from the HTTP layer and moves the
//! [`Navigator`] accordingly. This is the only place a 401 turns into a
//! navigation; the API layer itself never routes.

use std::sync::Arc;

use async_channel::Receiver;
use shared::routes::SIGN_IN_ROUTE;
use tokio::task::JoinHandle;

use crate::core::service::Navigator;
use crate::session::events::SessionEvent;

/// React to one session event.
///
/// Returns the location reached.
pub fn handle_session_event(navigator: &dyn Navigator, event: &SessionEvent) -> String {
    match event {
        SessionEvent::CredentialExpired { url } => {
            tracing::info!(url = %url, "Session expired, redirecting to sign-in");
            navigator.navigate(SIGN_IN_ROUTE)
        }
        SessionEvent::SignedIn | SessionEvent::SignedOut => navigator.refresh(),
    }
}

/// Process events until every sender is gone or the channel is closed.
pub async fn run_listener(receiver: Receiver<SessionEvent>, navigator: Arc<dyn Navigator>) {
    while let Ok(event) = receiver.recv().await {
        let location = handle_session_event(navigator.as_ref(), &event);
        tracing::debug!(event = ?event, location = %location, "Session event handled");
    }
    tracing::debug!("Navigation listener stopped");
}

/// Spawn [`run_listener`] on the current tokio runtime.
pub fn spawn_listener(receiver: Receiver<SessionEvent>, navigator: Arc<dyn Navigator>) -> JoinHandle<()> {
    tokio::spawn(run_listener(receiver, navigator))
}
