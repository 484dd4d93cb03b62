use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
/// Event bus for pub/sub messaging
///
/// Fans stepper and shell events out to every subscriber. Subscribers whose
/// receiver has been dropped are pruned on the next publish.
use std::sync::Arc;

use super::events::Event;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

struct Subscriber {
    id: SubscriberId,
    sender: Sender<Event>,
}

#[derive(Default)]
struct Registry {
    next_id: usize,
    subscribers: Vec<Subscriber>,
}

/// Cloneable handle; clones share one registry
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<RwLock<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<Event>, SubscriberId) {
        let (tx, rx) = unbounded();

        let mut registry = self.registry.write();
        let id = SubscriberId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push(Subscriber { id, sender: tx });

        (rx, id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.registry.write().subscribers.retain(|s| s.id != id);
    }

    /// Publish an event to all live subscribers, returns how many received it
    pub fn publish(&self, event: Event) -> usize {
        let mut delivered = 0;
        let mut closed = Vec::new();

        {
            let registry = self.registry.read();
            for subscriber in registry.subscribers.iter() {
                match subscriber.sender.try_send(event.clone()) {
                    Ok(()) => delivered += 1,
                    Err(_) => closed.push(subscriber.id),
                }
            }
        }

        if !closed.is_empty() {
            tracing::debug!("Pruning {} closed event subscriber(s)", closed.len());
            self.registry
                .write()
                .subscribers
                .retain(|s| !closed.contains(&s.id));
        }

        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.read().subscribers.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
