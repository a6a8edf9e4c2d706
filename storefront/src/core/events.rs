//! Store change notifications
//!
//! Every mutation broadcasts a [`StoreEvent`] so dependents (views, derived
//! totals, filtered lists) know to recompute. Sending never fails the
//! mutation: with no subscribers the event is dropped.

use tokio::sync::broadcast;

/// Broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Which collection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Product,
    Category,
    Seller,
    Sale,
    PaymentSetting,
    Cart,
    Session,
    /// Every collection (factory reset)
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
    Deleted,
    Cleared,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub resource: Resource,
    pub action: Action,
    /// Affected entity id, when the change targets one entity
    pub id: Option<String>,
}

impl StoreEvent {
    pub fn new(resource: Resource, action: Action, id: Option<String>) -> Self {
        Self {
            resource,
            action,
            id,
        }
    }
}

/// Cloneable handle to the shared broadcast channel
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, resource: Resource, action: Action, id: Option<String>) {
        let event = StoreEvent::new(resource, action, id);
        if self.tx.send(event).is_err() {
            tracing::trace!(?resource, ?action, "No subscribers for store event");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
