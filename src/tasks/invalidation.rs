//! Session Invalidation Task
//!
//! Background task that drops the cached identity whenever the auth backend
//! reports a session change.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::sources::IdentityCache;

// == Session Event ==
/// Auth state change pushed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

impl SessionEvent {
    /// Whether this event can change who the current user is.
    pub fn changes_identity(&self) -> bool {
        matches!(
            self,
            SessionEvent::SignedIn | SessionEvent::SignedOut | SessionEvent::UserUpdated
        )
    }
}

/// Spawns a task that invalidates `cache` on identity-changing session events.
///
/// The task exits once every sender for `events` has been dropped. A lagging
/// receiver invalidates as well, since a missed event may have been a
/// sign-out.
///
/// # Returns
/// A JoinHandle that can be used to abort the task during shutdown.
pub fn spawn_invalidation_task(
    cache: Arc<IdentityCache>,
    mut events: broadcast::Receiver<SessionEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting session invalidation task");

        loop {
            match events.recv().await {
                Ok(event) if event.changes_identity() => {
                    debug!(?event, "Session changed, invalidating identity");
                    cache.invalidate().await;
                }
                Ok(event) => {
                    debug!(?event, "Ignoring session event");
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!(missed, "Session events lagged, invalidating identity");
                    cache.invalidate().await;
                }
                Err(RecvError::Closed) => {
                    info!("Session event channel closed, stopping invalidation task");
                    break;
                }
            }
        }
    })
}
