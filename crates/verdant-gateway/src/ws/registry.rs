use axum::extract::ws::Message;
use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Outbound handle for one connection — feeds its writer task.
pub type ConnTx = mpsc::UnboundedSender<Message>;

/// Live WS connections: conn id -> outbound channel to the writer task.
///
/// DashMap shard locking lets handlers and emitters insert, remove, and
/// iterate concurrently without a single registry-wide lock.
pub struct Registry {
    conns: DashMap<Uuid, ConnTx>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            conns: DashMap::new(),
        }
    }

    /// Insert a connection under a fresh id.
    pub fn register(&self, tx: ConnTx) -> Uuid {
        let id = Uuid::new_v4();
        self.conns.insert(id, tx);
        id
    }

    /// Remove a connection. Idempotent — unknown ids are a no-op.
    pub fn unregister(&self, id: &Uuid) {
        self.conns.remove(id);
    }

    /// Point-in-time view of all connections. Entries are cloned out so
    /// callers never hold shard locks while sending.
    pub fn snapshot(&self) -> Vec<(Uuid, ConnTx)> {
        self.conns
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.conns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
