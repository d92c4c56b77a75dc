use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// Handle for an item pushed into an `EphemeralList`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EphemeralId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: EphemeralId,
    expires_at: Instant,
    item: T,
}

/// A list of items that each live for a fixed TTL after insertion.
///
/// Every item gets the same TTL, so entries stay ordered by deadline and expiry only ever
/// pops from the front. The list never schedules anything itself: the owner asks for
/// `next_expiry` and calls `expire` when that instant passes. Clearing the list drops
/// every pending deadline with it.
#[derive(Debug, Clone)]
pub struct EphemeralList<T> {
    ttl: Duration,
    next_id: u64,
    entries: VecDeque<Entry<T>>,
}

impl<T> EphemeralList<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: 0,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: T, now: Instant) -> EphemeralId {
        let id = EphemeralId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(Entry {
            id,
            expires_at: now + self.ttl,
            item,
        });
        id
    }

    /// Removes every item whose deadline is at or before `now`, returning how many went
    pub fn expire(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while let Some(front) = self.entries.front() {
            if front.expires_at > now {
                break;
            }
            self.entries.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.entries.front().map(|entry| entry.expires_at)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Live items with their ids, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (EphemeralId, &T)> {
        self.entries.iter().map(|entry| (entry.id, &entry.item))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
