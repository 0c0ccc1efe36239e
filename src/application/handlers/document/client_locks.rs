//! Per-client async locks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::ClientId;

/// Serializes work per client inside one process.
///
/// Idle entries (no holder, no waiter) are pruned on each acquisition.
#[derive(Debug, Clone, Default)]
pub struct ClientLocks {
    locks: Arc<Mutex<HashMap<ClientId, Arc<AsyncMutex<()>>>>>,
}

impl ClientLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for the client's lock. Released when the guard drops.
    pub async fn acquire(&self, client_id: &ClientId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.retain(|id, lock| id == client_id || Arc::strong_count(lock) > 1);
            locks
                .entry(client_id.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of tracked clients.
    pub fn tracked(&self) -> usize {
        self.locks.lock().map(|l| l.len()).unwrap_or(0)
    }
}
