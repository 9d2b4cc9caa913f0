//! In-process refresh bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use pricelist_domain::refresh::RefreshEvent;

/// Fan-out for reload notifications using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers (the event
/// is simply dropped). Dropping a receiver unsubscribes it; a dropped
/// receiver can never observe another event.
pub struct RefreshBus {
    sender: broadcast::Sender<RefreshEvent>,
}

impl RefreshBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to refresh events.
    ///
    /// Returns a receiver that will get all events published *after* the
    /// subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers, in publish order.
    pub fn publish(&self, event: RefreshEvent) {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist_domain::dataset::Dataset;
    use pricelist_domain::refresh::RefreshPhase;

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = RefreshBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(RefreshEvent::started(Dataset::Laboratory));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.dataset, Dataset::Laboratory);
        assert_eq!(received.phase, RefreshPhase::Started);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = RefreshBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(RefreshEvent::finished(Dataset::AmbulatoryStationary));

        assert_eq!(rx1.recv().await.unwrap().phase, RefreshPhase::Finished);
        assert_eq!(rx2.recv().await.unwrap().phase, RefreshPhase::Finished);
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = RefreshBus::new(16);
        bus.publish(RefreshEvent::started(Dataset::AmbulatoryStationary));
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = RefreshBus::new(16);

        bus.publish(RefreshEvent::started(Dataset::AmbulatoryStationary));

        let mut rx = bus.subscribe();
        bus.publish(RefreshEvent::finished(Dataset::Laboratory));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.dataset, Dataset::Laboratory);
        assert_eq!(received.phase, RefreshPhase::Finished);
    }

    #[tokio::test]
    async fn should_deliver_events_in_publish_order() {
        let bus = RefreshBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(RefreshEvent::started(Dataset::Laboratory));
        bus.publish(RefreshEvent::finished(Dataset::Laboratory));

        assert_eq!(rx.recv().await.unwrap().phase, RefreshPhase::Started);
        assert_eq!(rx.recv().await.unwrap().phase, RefreshPhase::Finished);
    }
}
