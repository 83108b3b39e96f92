//! Content-addressed cache of tokenized texts with LRU retention.

use std::rc::Rc;
use std::time::Instant;

use bulikit_core::ContentKey;
use indexmap::IndexMap;

use super::Tokens;
use crate::config::CacheLimits;

/// Counters exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

#[derive(Debug)]
struct Entry {
    tokens: Rc<Tokens>,
    last_used: Instant,
}

/// Entries are kept in least-recently-used-first order.
#[derive(Debug)]
pub(crate) struct TokenCache {
    limits: CacheLimits,
    entries: IndexMap<ContentKey, Entry>,
    stats: CacheStats,
}

impl TokenCache {
    pub fn new(limits: CacheLimits) -> Self {
        Self {
            limits,
            entries: IndexMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn limits(&self) -> CacheLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: CacheLimits) {
        self.limits = limits;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            ..self.stats
        }
    }

    /// Look up `text`, refreshing the entry on a hit.
    ///
    /// A key collision with a different text counts as a miss.
    pub fn get(&mut self, key: ContentKey, text: &str, now: Instant) -> Option<Rc<Tokens>> {
        let hit = self
            .entries
            .get(&key)
            .is_some_and(|entry| entry.tokens.text() == text);
        if !hit {
            self.stats.misses += 1;
            return None;
        }

        self.stats.hits += 1;
        let mut entry = self.entries.shift_remove(&key)?;
        entry.last_used = now;
        let tokens = Rc::clone(&entry.tokens);
        self.entries.insert(key, entry);
        self.evict(now);
        Some(tokens)
    }

    pub fn insert(&mut self, key: ContentKey, tokens: Rc<Tokens>, now: Instant) {
        self.entries.shift_remove(&key);
        self.entries.insert(
            key,
            Entry {
                tokens,
                last_used: now,
            },
        );
        self.evict(now);
    }

    /// Drop idle entries outside the protected recent window, then enforce
    /// the size cap.
    pub fn evict(&mut self, now: Instant) {
        let candidates = self.entries.len().saturating_sub(self.limits.min_entries);
        let idle_timeout = self.limits.idle_timeout;
        let before = self.entries.len();

        let mut position = 0;
        self.entries.retain(|_, entry| {
            let is_candidate = position < candidates;
            position += 1;
            !(is_candidate && now.saturating_duration_since(entry.last_used) >= idle_timeout)
        });

        let overflow = self.entries.len().saturating_sub(self.limits.max_entries);
        if overflow > 0 {
            self.entries.drain(..overflow);
        }

        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = self.entries.len(), "token cache eviction");
            self.stats.evictions += evicted as u64;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .get(&ContentKey::of(text))
            .is_some_and(|entry| entry.tokens.text() == text)
    }
}
