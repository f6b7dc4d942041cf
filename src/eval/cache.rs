//! Evaluation cache
//!
//! Memoizes the static score of a position for both colours at once,
//! keyed by the exact cell contents (the two bitboards). The table is
//! direct-mapped with a fixed number of slots: a colliding position simply
//! replaces the previous occupant, so memory stays bounded for the whole
//! session while lookups stay exact.
//!
//! # Example
//!
//! ```
//! use anti_othello::board::Board;
//! use anti_othello::eval::EvalCache;
//!
//! let mut cache = EvalCache::new(1024);
//! let key = Board::initial().key();
//!
//! cache.store(key, (7, -7));
//! assert_eq!(cache.probe(key), Some((7, -7)));
//! ```

/// Exact position key: `(black bits, white bits)`
pub type CacheKey = (u64, u64);

/// Cached scores: `(black score, white score)`
pub type CachedScores = (i32, i32);

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    key: CacheKey,
    scores: CachedScores,
}

/// Direct-mapped score cache.
pub struct EvalCache {
    entries: Vec<Option<CacheEntry>>,
    size: usize,
    hits: u64,
    misses: u64,
}

impl EvalCache {
    /// Minimum number of slots
    pub const MIN_SLOTS: usize = 64;

    /// Create a cache with `slots` entries (at least [`Self::MIN_SLOTS`]).
    #[must_use]
    pub fn new(slots: usize) -> Self {
        let size = slots.max(Self::MIN_SLOTS);
        Self {
            entries: vec![None; size],
            size,
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    fn slot(&self, key: CacheKey) -> usize {
        // Multiplicative mix of both halves; the full key is still compared on probe
        let mixed = key.0.wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ key.1.rotate_left(29).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
        (mixed >> 16) as usize % self.size
    }

    /// Look up a position. Only an exact key match counts as a hit.
    pub fn probe(&mut self, key: CacheKey) -> Option<CachedScores> {
        let idx = self.slot(key);
        match self.entries[idx] {
            Some(entry) if entry.key == key => {
                self.hits += 1;
                Some(entry.scores)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store scores for a position, replacing whatever occupied the slot.
    pub fn store(&mut self, key: CacheKey, scores: CachedScores) {
        let idx = self.slot(key);
        self.entries[idx] = Some(CacheEntry { key, scores });
    }

    /// Clear all entries and counters.
    ///
    /// Called when a new game starts.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.hits = 0;
        self.misses = 0;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Get statistics about cache usage.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        CacheStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Statistics about evaluation cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total number of slots in the cache
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of cache in use (0-100)
    pub usage_percent: u8,
    /// Probes that found the exact position
    pub hits: u64,
    /// Probes that found nothing or a different position
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        let probes = self.hits + self.misses;
        if probes == 0 {
            0.0
        } else {
            self.hits as f64 / probes as f64 * 100.0
        }
    }
}
