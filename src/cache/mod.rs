//! Classification cache - Bounded LRU with per-entry expiry.
//!
//! Adjacent helper for the chat-classification collaborator, not part
//! of the scoring core. Keys are normalized item-plus-cost strings;
//! values are whatever the caller caches (typically an `ItemType`).
//! Recency is an explicit access-order queue with move-to-end on every
//! hit, never implicit map insertion order. Eviction prefers expired
//! entries, then the least recently used.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::debug;

use crate::domain::foundation::Timestamp;

/// Cache sizing and expiry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries before LRU eviction kicks in.
    pub max_entries: usize,
    /// Entry time-to-live in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    /// 100 entries with a 30-minute expiry.
    fn default() -> Self {
        Self {
            max_entries: 100,
            ttl_secs: 1800,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Timestamp,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }
}

#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, Entry<V>>,
    /// Keys from least to most recently used.
    access_order: VecDeque<String>,
}

impl<V> CacheState<V> {
    fn touch(&mut self, key: &str) {
        if let Some(position) = self.access_order.iter().position(|k| k == key) {
            self.access_order.remove(position);
        }
        self.access_order.push_back(key.to_string());
    }

    fn forget(&mut self, key: &str) {
        self.entries.remove(key);
        if let Some(position) = self.access_order.iter().position(|k| k == key) {
            self.access_order.remove(position);
        }
    }
}

/// Thread-safe bounded LRU cache with per-entry TTL.
#[derive(Debug)]
pub struct ClassificationCache<V> {
    config: CacheConfig,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> ClassificationCache<V> {
    /// Creates a cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                access_order: VecDeque::new(),
            }),
        }
    }

    /// Creates a cache with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Builds the canonical cache key for an item and cost.
    pub fn key(item_name: &str, cost: f64) -> String {
        format!("{}::{:.2}", item_name.trim().to_lowercase(), cost)
    }

    /// Looks up a key. An expired entry is removed and reported as a
    /// miss; a hit moves the key to the most-recently-used position.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Timestamp::now();
        let mut state = self.lock_state();

        let expired = match state.entries.get(key) {
            Some(entry) if entry.is_expired(now) => true,
            Some(_) => false,
            None => return None,
        };

        if expired {
            state.forget(key);
            return None;
        }

        state.touch(key);
        state.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Inserts or refreshes an entry with the configured TTL.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.insert_with_ttl(key, value, self.config.ttl_secs);
    }

    /// Inserts or refreshes an entry with an explicit TTL in seconds.
    pub fn insert_with_ttl(&self, key: impl Into<String>, value: V, ttl_secs: u64) {
        let key = key.into();
        let now = Timestamp::now();
        let entry = Entry {
            value,
            expires_at: now.plus_secs(ttl_secs),
        };

        let mut state = self.lock_state();

        if state.entries.contains_key(&key) {
            state.entries.insert(key.clone(), entry);
            state.touch(&key);
            return;
        }

        if state.entries.len() >= self.config.max_entries {
            self.evict_one(&mut state, now);
        }

        state.entries.insert(key.clone(), entry);
        state.access_order.push_back(key);
    }

    /// Number of entries currently held, including not-yet-collected
    /// expired ones.
    pub fn len(&self) -> usize {
        self.lock_state().entries.len()
    }

    /// True when the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.entries.clear();
        state.access_order.clear();
    }

    /// Removes one entry to make room: the first expired entry in
    /// access order if any, otherwise the least recently used.
    fn evict_one(&self, state: &mut CacheState<V>, now: Timestamp) {
        let expired_key = state
            .access_order
            .iter()
            .find(|key| {
                state
                    .entries
                    .get(*key)
                    .map(|entry| entry.is_expired(now))
                    .unwrap_or(true)
            })
            .cloned();

        let victim = expired_key.or_else(|| state.access_order.front().cloned());
        if let Some(key) = victim {
            debug!(key = %key, "Evicting cache entry");
            state.forget(&key);
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CacheState<V>> {
        // A poisoned lock only means another thread panicked mid-update;
        // the map itself is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::ItemType;

    fn small_cache() -> ClassificationCache<ItemType> {
        ClassificationCache::new(CacheConfig {
            max_entries: 3,
            ttl_secs: 1800,
        })
    }

    #[test]
    fn cache_key_normalizes_name_and_cost() {
        assert_eq!(
            ClassificationCache::<ItemType>::key("  Coffee Maker ", 49.5),
            "coffee maker::49.50"
        );
        assert_eq!(
            ClassificationCache::<ItemType>::key("COFFEE MAKER", 49.5),
            "coffee maker::49.50"
        );
    }

    #[test]
    fn cache_hit_within_ttl() {
        let cache = small_cache();
        cache.insert("coffee::4.50", ItemType::Consumable);
        assert_eq!(cache.get("coffee::4.50"), Some(ItemType::Consumable));
    }

    #[test]
    fn cache_miss_for_unknown_key() {
        let cache = small_cache();
        assert_eq!(cache.get("nothing"), None);
    }

    #[test]
    fn cache_miss_after_expiry() {
        let cache = small_cache();
        cache.insert_with_ttl("coffee::4.50", ItemType::Consumable, 0);
        assert_eq!(cache.get("coffee::4.50"), None);
        // The expired entry was collected on lookup.
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_evicts_least_recently_used_at_capacity() {
        let cache = small_cache();
        cache.insert("a", ItemType::Consumable);
        cache.insert("b", ItemType::Service);
        cache.insert("c", ItemType::Digital);

        cache.insert("d", ItemType::Durable);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(ItemType::Service));
        assert_eq!(cache.get("d"), Some(ItemType::Durable));
    }

    #[test]
    fn cache_access_moves_entry_to_end() {
        let cache = small_cache();
        cache.insert("a", ItemType::Consumable);
        cache.insert("b", ItemType::Service);
        cache.insert("c", ItemType::Digital);

        // Touch "a" so "b" becomes the least recently used.
        assert!(cache.get("a").is_some());
        cache.insert("d", ItemType::Durable);

        assert_eq!(cache.get("a"), Some(ItemType::Consumable));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn cache_prefers_evicting_expired_entries() {
        let cache = small_cache();
        cache.insert("a", ItemType::Consumable);
        cache.insert_with_ttl("b", ItemType::Service, 0);
        cache.insert("c", ItemType::Digital);

        // "a" is the LRU candidate, but the expired "b" goes first.
        cache.insert("d", ItemType::Durable);

        assert_eq!(cache.get("a"), Some(ItemType::Consumable));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(ItemType::Digital));
        assert_eq!(cache.get("d"), Some(ItemType::Durable));
    }

    #[test]
    fn cache_reinsert_refreshes_value_and_recency() {
        let cache = small_cache();
        cache.insert("a", ItemType::Consumable);
        cache.insert("b", ItemType::Service);
        cache.insert("c", ItemType::Digital);

        cache.insert("a", ItemType::Durable);
        cache.insert("d", ItemType::Consumable);

        assert_eq!(cache.get("a"), Some(ItemType::Durable));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn cache_capacity_bound_holds() {
        let cache = small_cache();
        for i in 0..20 {
            cache.insert(format!("key-{}", i), ItemType::Durable);
        }
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn cache_clear_empties_everything() {
        let cache = small_cache();
        cache.insert("a", ItemType::Consumable);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
    }
}
