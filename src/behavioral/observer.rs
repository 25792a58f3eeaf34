// Observer: a video channel notifying its subscribers of uploads.

use crossbeam::channel::{self, Receiver, Sender};

// ============================================================================
// Example: Observer (channel uploads)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub channel: String,
    pub title: String,
}

pub trait Subscriber {
    fn notify(&mut self, upload: &Upload);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Channel {
    name: String,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Notifies every subscriber in subscription order.
    pub fn publish(&mut self, title: impl Into<String>) -> usize {
        let upload = Upload {
            channel: self.name.clone(),
            title: title.into(),
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber.notify(&upload);
        }
        self.subscribers.len()
    }
}

/// Logs each notification under its own name.
pub struct NamedSubscriber {
    name: String,
    seen: usize,
}

impl NamedSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seen: 0,
        }
    }
}

impl Subscriber for NamedSubscriber {
    fn notify(&mut self, upload: &Upload) {
        self.seen += 1;
        log::info!(
            "Subscriber {} notified: '{}' on {} ({} so far)",
            self.name,
            upload.title,
            upload.channel,
            self.seen
        );
    }
}

/// Forwards notifications into a channel for another thread to consume.
pub struct FeedSubscriber {
    tx: Sender<Upload>,
}

impl FeedSubscriber {
    pub fn new() -> (Self, Receiver<Upload>) {
        let (tx, rx) = channel::unbounded();
        (Self { tx }, rx)
    }
}

impl Subscriber for FeedSubscriber {
    fn notify(&mut self, upload: &Upload) {
        // receiver gone: nothing left to feed
        let _ = self.tx.send(upload.clone());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Subscriber for Recorder {
        fn notify(&mut self, upload: &Upload) {
            self.log.lock().unwrap().push(format!("{}:{}", self.label, upload.title));
        }
    }

    fn recorder(label: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Box<dyn Subscriber> {
        Box::new(Recorder {
            label,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn test_notifies_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut channel = Channel::new("rust-weekly");
        channel.subscribe(recorder("a", &log));
        channel.subscribe(recorder("b", &log));
        channel.subscribe(recorder("c", &log));

        assert_eq!(channel.publish("ownership"), 3);
        assert_eq!(*log.lock().unwrap(), vec!["a:ownership", "b:ownership", "c:ownership"]);
    }

    #[test]
    fn test_unsubscribe() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut channel = Channel::new("rust-weekly");
        let a = channel.subscribe(recorder("a", &log));
        channel.subscribe(recorder("b", &log));

        assert!(channel.unsubscribe(a));
        assert!(!channel.unsubscribe(a));
        assert_eq!(channel.subscriber_count(), 1);

        channel.publish("traits");
        assert_eq!(*log.lock().unwrap(), vec!["b:traits"]);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let mut channel = Channel::new("empty");
        assert_eq!(channel.publish("nobody"), 0);
    }

    #[test]
    fn test_feed_subscriber() {
        let (feed, rx) = FeedSubscriber::new();
        let mut channel = Channel::new("rust-weekly");
        channel.subscribe(Box::new(feed));
        channel.subscribe(Box::new(NamedSubscriber::new("anvi")));

        channel.publish("lifetimes");
        channel.publish("macros");

        let titles: Vec<String> = rx.try_iter().map(|upload| upload.title).collect();
        assert_eq!(titles, vec!["lifetimes", "macros"]);
    }

    #[test]
    fn test_feed_survives_dropped_receiver() {
        let (feed, rx) = FeedSubscriber::new();
        drop(rx);
        let mut channel = Channel::new("rust-weekly");
        channel.subscribe(Box::new(feed));
        assert_eq!(channel.publish("still fine"), 1);
    }
}
