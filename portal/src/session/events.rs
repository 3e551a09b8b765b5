//! # Session Events
//!
//! Signals flowing from the HTTP layer to whoever owns navigation.
//!
//! The API layer never navigates. On a 401 it emits
//! [`SessionEvent::CredentialExpired`]; the navigation listener (see
//! [`crate::app::navigation`]) turns that into a move to the sign-in page.
//! With no listener attached (headless use) the events are dropped.

use async_channel::{Receiver, Sender};

/// Authentication signal changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A credential was stored after sign-in or sign-up.
    SignedIn,
    /// The user signed out explicitly.
    SignedOut,
    /// The backend rejected the credential with a 401; it has been cleared.
    CredentialExpired {
        /// URL of the request that was rejected
        url: String,
    },
}

/// Sending half of the session event channel.
///
/// Cheap to clone; every service client holds one.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    tx: Sender<SessionEvent>,
}

/// Create a connected sender/receiver pair.
pub fn channel() -> (SessionEvents, Receiver<SessionEvent>) {
    let (tx, rx) = async_channel::unbounded();
    (SessionEvents { tx }, rx)
}

impl SessionEvents {
    /// A sender with nobody listening.
    pub fn detached() -> Self {
        let (events, _rx) = channel();
        events
    }

    /// Publish an event without waiting.
    ///
    /// Returns whether a listener could receive it.
    pub fn emit(&self, event: SessionEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(event = ?e.into_inner(), "No session listener attached, event dropped");
                false
            }
        }
    }

    /// Close the channel. Already queued events are still delivered.
    pub fn close(&self) {
        self.tx.close();
    }
}
