use std::fmt;

use shared_types::{CampaignId, GiftId};
use tokio::sync::broadcast;

/// Logical view that is stale after a committed mutation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CachePath {
    Campaign(CampaignId),
    Gift(GiftId),
}

impl fmt::Display for CachePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Campaign(id) => write!(f, "/campaign/{id}"),
            Self::Gift(id) => write!(f, "/gift/{id}"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidationEvent {
    pub paths: Vec<CachePath>,
}

/// Receives invalidation events. Called only after the mutation has been committed.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, event: InvalidationEvent);
}

pub struct NoCacheInvalidator;

impl CacheInvalidator for NoCacheInvalidator {
    fn invalidate(&self, _event: InvalidationEvent) {}
}

/// Publishes events on a broadcast channel, consumers subscribe with [`Self::subscribe`].
pub struct BroadcastCacheInvalidator {
    sender: broadcast::Sender<InvalidationEvent>,
}

impl BroadcastCacheInvalidator {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InvalidationEvent> {
        self.sender.subscribe()
    }
}

impl CacheInvalidator for BroadcastCacheInvalidator {
    fn invalidate(&self, event: InvalidationEvent) {
        // no subscribers means there is no cache to refresh
        if self.sender.send(event).is_err() {
            tracing::debug!("no cache invalidation subscribers");
        }
    }
}
