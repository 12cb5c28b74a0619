//! Token-change notifier
//!
//! A synchronous observer registry the session dispatches a [`TokenEvent`]
//! through after every token change: login, refresh, and logout. Subscribers
//! are invoked in registration order on the task that performed the change.
//!
//! Handlers must not panic and must not call back into the notifier: a
//! panicking handler aborts delivery to the handlers registered after it,
//! and a re-entrant call would deadlock on the registry lock.

use crate::session::tokens::TokenEvent;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

type Callback = Box<dyn Fn(&TokenEvent) + Send + Sync>;

/// Handle identifying a registered subscriber, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous registry of token-change subscribers
#[derive(Default)]
pub struct TokenNotifier {
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_id: AtomicU64,
}

impl TokenNotifier {
    /// Creates an empty notifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and returns its removal handle
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&TokenEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("notifier lock")
            .push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber
    ///
    /// # Returns
    /// `true` when the subscription existed and was removed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock().expect("notifier lock");
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Dispatches an event to all current subscribers in registration order
    pub fn dispatch(&self, event: &TokenEvent) {
        let subscribers = self.subscribers.lock().expect("notifier lock");
        debug!("dispatching token event to {} subscribers", subscribers.len());
        for (_, callback) in subscribers.iter() {
            callback(event);
        }
    }
}
