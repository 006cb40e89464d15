use axum::extract::ws::{Message, Utf8Bytes};
use std::sync::Arc;
use tracing::debug;

use crate::ws::registry::Registry;

/// Fan-out one serialized envelope to every registered connection.
pub struct Broadcaster {
    registry: Arc<Registry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Deliver `payload` as one complete text frame to each connection in
    /// the current registry snapshot. A closed channel means that
    /// connection's writer task died on a socket error: the entry is
    /// unregistered and delivery continues with the rest. One dead peer
    /// never aborts delivery to the others.
    pub fn broadcast(&self, payload: &str) {
        // one shared buffer; cloning the message per recipient is cheap
        let msg = Message::Text(Utf8Bytes::from(payload));
        let mut pruned = 0usize;

        for (id, tx) in self.registry.snapshot() {
            if tx.send(msg.clone()).is_err() {
                self.registry.unregister(&id);
                pruned += 1;
            }
        }

        if pruned > 0 {
            debug!(
                pruned,
                remaining = self.registry.len(),
                "removed dead connections during broadcast"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn delivers_to_every_registered_connection() {
        let registry = Arc::new(Registry::new());
        let broadcaster = Broadcaster::new(Arc::clone(&registry));

        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        registry.register(tx_a);
        registry.register(tx_b);

        broadcaster.broadcast("hello");

        for rx in [&mut rx_a, &mut rx_b] {
            match rx.try_recv().unwrap() {
                Message::Text(text) => assert_eq!(text.as_str(), "hello"),
                other => panic!("expected text frame, got {other:?}"),
            }
        }
    }

    #[test]
    fn dead_connection_is_pruned_and_others_still_receive() {
        let registry = Arc::new(Registry::new());
        let broadcaster = Broadcaster::new(Arc::clone(&registry));

        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        registry.register(tx_dead);
        registry.register(tx_live);
        drop(rx_dead); // writer gone — sends to this connection now fail

        broadcaster.broadcast("payload");

        assert_eq!(registry.len(), 1);
        assert!(matches!(rx_live.try_recv().unwrap(), Message::Text(_)));
    }

    #[test]
    fn broadcast_to_empty_registry_is_a_no_op() {
        let registry = Arc::new(Registry::new());
        let broadcaster = Broadcaster::new(registry);
        broadcaster.broadcast("nobody home");
    }
}
