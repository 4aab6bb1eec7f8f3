//! Per-key in-flight guard.
//!
//! Rapid repeated triggers of the same action (double-tapping "Add to Cart")
//! must not issue independent requests. A caller acquires a [`FlightGuard`]
//! for the key before starting the request; a second acquire for the same key
//! fails until the first guard is dropped.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

/// Set of keys with a request currently in flight.
#[derive(Debug)]
pub struct InFlight<K: Eq + Hash> {
    keys: Arc<Mutex<HashSet<K>>>,
}

impl<K: Eq + Hash> Default for InFlight<K> {
    fn default() -> Self {
        Self {
            keys: Arc::new(Mutex::new(HashSet::new())),
        }
    }
}

impl<K: Eq + Hash + Clone> InFlight<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`. Returns `None` if it is already claimed.
    pub fn try_acquire(&self, key: K) -> Option<FlightGuard<K>> {
        let mut keys = self.keys.lock();
        if !keys.insert(key.clone()) {
            return None;
        }

        Some(FlightGuard {
            keys: Arc::clone(&self.keys),
            key,
        })
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.keys.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.lock().is_empty()
    }
}

/// Releases its key when dropped, whether the request succeeded, failed or was abandoned.
#[derive(Debug)]
pub struct FlightGuard<K: Eq + Hash> {
    keys: Arc<Mutex<HashSet<K>>>,
    key: K,
}

impl<K: Eq + Hash> Drop for FlightGuard<K> {
    fn drop(&mut self) {
        self.keys.lock().remove(&self.key);
    }
}
