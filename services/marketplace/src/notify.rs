//! New-listing fan-out notification
//!
//! A broadcast channel that every connected `/events` client subscribes to.
//! Publishing never blocks and never fails: with no subscribers the event is
//! simply dropped, and a lagging subscriber loses oldest events first.

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::Product;

/// Event pushed to connected clients when a listing is created
#[derive(Debug, Clone, Serialize)]
pub struct ListingEvent {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub price: f64,
}

impl From<&Product> for ListingEvent {
    fn from(product: &Product) -> Self {
        ListingEvent {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price,
        }
    }
}

/// Fan-out handle shared through the application state
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<ListingEvent>,
}

impl Notifier {
    /// Create a notifier buffering up to `capacity` undelivered events
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: ListingEvent) {
        // send only errors when there are no subscribers
        let _ = self.tx.send(event);
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<ListingEvent> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_published_events() {
        let notifier = Notifier::new(16);
        let mut rx = notifier.subscribe();

        notifier.publish(ListingEvent {
            id: Uuid::new_v4(),
            title: "Lamp".to_string(),
            category: "Home".to_string(),
            price: 12.5,
        });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.title, "Lamp");
        assert_eq!(event.category, "Home");
    }

    #[test]
    fn test_publish_without_subscribers_is_a_no_op() {
        let notifier = Notifier::new(16);
        notifier.publish(ListingEvent {
            id: Uuid::new_v4(),
            title: "Chair".to_string(),
            category: "Home".to_string(),
            price: 30.0,
        });
    }
}
