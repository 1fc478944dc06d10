use gift_core::proto::cache_invalidator::{CachePath, InvalidationEvent};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::metrics::track_cache_invalidation;

/// Consumes invalidation events published by the core until the publisher is dropped.
pub(crate) fn spawn_invalidation_consumer(
    mut receiver: Receiver<InvalidationEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => handle_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Cache invalidation consumer lagged, {skipped} events skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }

        tracing::debug!("Cache invalidation consumer stopped");
    })
}

fn handle_event(event: &InvalidationEvent) {
    for path in &event.paths {
        tracing::debug!("Invalidating cached view {path}");
        track_cache_invalidation(path_kind(path));
    }
}

fn path_kind(path: &CachePath) -> &'static str {
    match path {
        CachePath::Campaign(_) => "campaign",
        CachePath::Gift(_) => "gift",
    }
}
