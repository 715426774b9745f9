use std::collections::{BTreeMap, HashMap};

use crate::assets::bitmap::{Bitmap, BitmapId};
use crate::effects::tint::{tint, translucent};
use crate::foundation::core::Rgba8;
use crate::foundation::error::SkinResult;

/// What a cached bitmap was produced from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKey {
    /// A named vector element of the active theme.
    Element(String),
    /// A caller-supplied raster, by content identity.
    Bitmap(BitmapId),
}

/// Post-processing applied to the source before caching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Plain raster.
    #[default]
    None,
    /// Tinted toward `color` by `pct` percent.
    Tint {
        /// Tint color.
        color: Rgba8,
        /// Percentage in `[0, 100]`.
        pct: u8,
    },
    /// Alpha scaled to `pct` percent.
    Translucent {
        /// Percentage in `[0, 100]`.
        pct: u8,
    },
    /// Horizontally flipped.
    Mirrored,
}

/// Full identity of one cache entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Source identity.
    pub source: SourceKey,
    /// Device-pixel width.
    pub width: u32,
    /// Device-pixel height.
    pub height: u32,
    /// Device pixel ratio bits (`f64::to_bits`).
    pub dpr_bits: u64,
    /// Effect parameters.
    pub effect: Effect,
    /// Theme generation the entry belongs to.
    pub generation: u64,
}

impl CacheKey {
    /// Key for a plain element raster.
    pub fn element(id: &str, width: u32, height: u32, dpr: f64, generation: u64) -> Self {
        Self {
            source: SourceKey::Element(id.to_string()),
            width,
            height,
            dpr_bits: dpr.to_bits(),
            effect: Effect::None,
            generation,
        }
    }

    /// Key for an effect applied to `bitmap`.
    pub fn effect(bitmap: &Bitmap, effect: Effect, dpr: f64, generation: u64) -> Self {
        Self {
            source: SourceKey::Bitmap(bitmap.id()),
            width: bitmap.width(),
            height: bitmap.height(),
            dpr_bits: dpr.to_bits(),
            effect,
            generation,
        }
    }

    /// Same key with a different effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}

/// Hit/miss and occupancy counters of a [`PixmapCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixmapCacheStats {
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries stored.
    pub inserted: u64,
    /// Inserts refused because the bitmap alone exceeds the byte budget.
    pub dropped: u64,
    /// Entries evicted to make room for newer ones.
    pub evicted: u64,
    /// Live entries.
    pub entries: usize,
    /// Live pixel bytes.
    pub bytes: usize,
}

/// Byte-bounded bitmap cache with least-recently-used eviction.
///
/// At most one entry exists per [`CacheKey`]. An insert that would exceed the budget evicts the
/// least recently used entries until it fits; a bitmap larger than the whole budget is dropped
/// and counted. The whole cache is cleared on theme changes.
#[derive(Debug)]
pub struct PixmapCache {
    max_bytes: usize,
    map: HashMap<CacheKey, CacheEntry>,
    recency: BTreeMap<u64, CacheKey>,
    clock: u64,
    stats: PixmapCacheStats,
}

#[derive(Debug)]
struct CacheEntry {
    bitmap: Bitmap,
    last_used: u64,
}

impl PixmapCache {
    /// Create an empty cache holding at most `max_bytes` of pixel data.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            map: HashMap::new(),
            recency: BTreeMap::new(),
            clock: 0,
            stats: PixmapCacheStats::default(),
        }
    }

    /// Counters snapshot.
    pub fn stats(&self) -> PixmapCacheStats {
        self.stats
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Return `true` when `key` is cached, without touching counters or recency.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.map.contains_key(key)
    }

    fn tick(&mut self) -> u64 {
        self.clock = self.clock.wrapping_add(1);
        self.clock
    }

    /// Look up `key`, recording a hit or a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<Bitmap> {
        let now = self.tick();
        match self.map.get_mut(key) {
            Some(entry) => {
                self.recency.remove(&entry.last_used);
                entry.last_used = now;
                self.recency.insert(now, key.clone());
                self.stats.hits = self.stats.hits.saturating_add(1);
                Some(entry.bitmap.clone())
            }
            None => {
                self.stats.misses = self.stats.misses.saturating_add(1);
                None
            }
        }
    }

    /// Store `bitmap` under `key`, evicting least recently used entries to fit.
    ///
    /// Returns `false` when the bitmap alone exceeds the budget.
    pub fn insert(&mut self, key: CacheKey, bitmap: Bitmap) -> bool {
        let bytes = bitmap.data().len();
        if bytes > self.max_bytes {
            self.stats.dropped = self.stats.dropped.saturating_add(1);
            tracing::trace!(bytes, budget = self.max_bytes, "pixmap cache insert dropped");
            return false;
        }
        self.remove(&key);
        while self.stats.bytes + bytes > self.max_bytes {
            let Some((_, oldest)) = self.recency.pop_first() else {
                break;
            };
            if let Some(old) = self.map.remove(&oldest) {
                self.stats.bytes -= old.bitmap.data().len();
                self.stats.evicted = self.stats.evicted.saturating_add(1);
                tracing::trace!(source = ?oldest.source, "pixmap cache entry evicted");
            }
        }
        let now = self.tick();
        self.recency.insert(now, key.clone());
        self.map.insert(
            key,
            CacheEntry {
                bitmap,
                last_used: now,
            },
        );
        self.stats.bytes += bytes;
        self.stats.entries = self.map.len();
        self.stats.inserted = self.stats.inserted.saturating_add(1);
        true
    }

    fn remove(&mut self, key: &CacheKey) {
        if let Some(old) = self.map.remove(key) {
            self.recency.remove(&old.last_used);
            self.stats.bytes -= old.bitmap.data().len();
            self.stats.entries = self.map.len();
        }
    }

    /// Return the cached bitmap for `key`, producing and caching it with `f` on a miss.
    ///
    /// A producer returning `Ok(None)` caches nothing.
    pub fn get_or_try_insert_with(
        &mut self,
        key: CacheKey,
        f: impl FnOnce() -> SkinResult<Option<Bitmap>>,
    ) -> SkinResult<Option<Bitmap>> {
        if let Some(b) = self.get(&key) {
            return Ok(Some(b));
        }
        tracing::trace!(source = ?key.source, w = key.width, h = key.height, "pixmap cache miss");
        let Some(b) = f()? else {
            return Ok(None);
        };
        self.insert(key, b.clone());
        Ok(Some(b))
    }

    /// Apply `effect` to `src`, memoized by source identity and effect parameters.
    pub fn apply_effect(
        &mut self,
        src: &Bitmap,
        effect: Effect,
        dpr: f64,
        generation: u64,
    ) -> Bitmap {
        if effect == Effect::None || src.is_empty() {
            return src.clone();
        }
        let key = CacheKey::effect(src, effect, dpr, generation);
        if let Some(b) = self.get(&key) {
            return b;
        }
        let out = match effect {
            Effect::None => src.clone(),
            Effect::Tint { color, pct } => tint(src, color, pct),
            Effect::Translucent { pct } => translucent(src, pct),
            Effect::Mirrored => src.mirrored(),
        };
        self.insert(key, out.clone());
        out
    }

    /// Drop all entries; counters other than occupancy are kept.
    pub fn clear(&mut self) {
        self.map.clear();
        self.recency.clear();
        self.stats.entries = 0;
        self.stats.bytes = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/cache.rs"]
mod tests;
