//! # Event Bus
//!
//! An in-process publish/subscribe channel for components that are not in a
//! parent/child relationship (here: the review form publishes, the product
//! widget subscribes). The bus is an explicit value passed to both sides at
//! construction — never an ambient global — so wiring is visible and tests
//! can build isolated buses.
//!
//! ## Delivery model
//!
//! `publish` fans the message out synchronously, in subscription order, into
//! every live subscriber's queue before it returns. Subscribers drain their
//! queue with [`Subscription::drain`]; the event loop does this once per
//! iteration, so handling happens within the same turn as the publish.
//!
//! ## Lifecycle
//!
//! There is no explicit unsubscribe. Dropping a `Subscription` closes its
//! receiving end, and the bus prunes closed senders on the next publish, so
//! destroyed-and-recreated subscribers do not accumulate registry entries.
//!
//! The widget runs on exactly one thread, so the registry is a `RefCell`,
//! not a mutex.

use std::cell::RefCell;
use std::sync::mpsc;

/// A subscription to a bus. Messages queue here until drained.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: mpsc::Receiver<M>,
}

impl<M> Subscription<M> {
    fn new(receiver: mpsc::Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Take the next queued message, if any.
    pub fn try_recv(&self) -> Option<M> {
        self.receiver.try_recv().ok()
    }

    /// Drain every queued message, in publish order.
    pub fn drain(&self) -> impl Iterator<Item = M> + '_ {
        std::iter::from_fn(|| self.try_recv())
    }
}

/// Single-threaded pub/sub bus with broadcast semantics: every subscriber
/// gets a copy of every message published after it subscribed.
#[derive(Debug, Default)]
pub struct EventBus<M> {
    subscribers: RefCell<Vec<mpsc::Sender<M>>>,
}

impl<M: Clone> EventBus<M> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Fan `message` out to every live subscriber, pruning dead ones.
    pub fn publish(&self, message: M) {
        let mut subs = self.subscribers.borrow_mut();
        subs.retain(|tx| tx.send(message.clone()).is_ok());
    }

    pub fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.borrow_mut().push(tx);
        Subscription::new(rx)
    }

    /// Number of registered senders, including ones not yet pruned.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_receives_in_publish_order() {
        let bus: EventBus<u32> = EventBus::new();
        let sub = bus.subscribe();

        bus.publish(1);
        bus.publish(2);
        bus.publish(3);

        let received: Vec<u32> = sub.drain().collect();
        assert_eq!(received, vec![1, 2, 3]);
    }

    #[test]
    fn test_broadcast_to_every_subscriber() {
        let bus: EventBus<&'static str> = EventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish("hello");

        assert_eq!(first.try_recv(), Some("hello"));
        assert_eq!(second.try_recv(), Some("hello"));
    }

    #[test]
    fn test_late_subscriber_misses_earlier_messages() {
        let bus: EventBus<u32> = EventBus::new();
        bus.publish(1);

        let sub = bus.subscribe();
        bus.publish(2);

        assert_eq!(sub.drain().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_dropped_subscription_is_pruned_on_publish() {
        let bus: EventBus<u32> = EventBus::new();
        let keep = bus.subscribe();
        let drop_me = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(drop_me);
        bus.publish(7);

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(keep.try_recv(), Some(7));
    }

    #[test]
    fn test_drain_on_empty_bus_yields_nothing() {
        let bus: EventBus<u32> = EventBus::new();
        let sub = bus.subscribe();
        assert_eq!(sub.drain().count(), 0);
    }
}
