use super::*;

fn bmp(w: u32, h: u32) -> Bitmap {
    Bitmap::solid(w, h, Rgba8::opaque(1, 2, 3))
}

#[test]
fn second_identical_request_is_a_hit() {
    let mut c = PixmapCache::new(1 << 20);
    let key = CacheKey::element("button-normal", 4, 4, 1.0, 0);
    let mut calls = 0;
    let a = c
        .get_or_try_insert_with(key.clone(), || {
            calls += 1;
            Ok(Some(bmp(4, 4)))
        })
        .unwrap()
        .unwrap();
    let b = c
        .get_or_try_insert_with(key, || {
            calls += 1;
            Ok(Some(bmp(4, 4)))
        })
        .unwrap()
        .unwrap();
    assert_eq!(calls, 1);
    assert_eq!(a, b);
    let s = c.stats();
    assert_eq!((s.hits, s.misses, s.entries), (1, 1, 1));
}

#[test]
fn keys_differ_by_every_component() {
    let base = CacheKey::element("x", 4, 4, 1.0, 0);
    assert_ne!(base, CacheKey::element("y", 4, 4, 1.0, 0));
    assert_ne!(base, CacheKey::element("x", 5, 4, 1.0, 0));
    assert_ne!(base, CacheKey::element("x", 4, 4, 2.0, 0));
    assert_ne!(base, CacheKey::element("x", 4, 4, 1.0, 1));
    assert_ne!(base, base.clone().with_effect(Effect::Mirrored));
}

#[test]
fn full_budget_evicts_least_recently_used() {
    let mut c = PixmapCache::new(128);
    let a = CacheKey::element("a", 4, 4, 1.0, 0);
    let b = CacheKey::element("b", 4, 4, 1.0, 0);
    let d = CacheKey::element("d", 4, 4, 1.0, 0);
    assert!(c.insert(a.clone(), bmp(4, 4)));
    assert!(c.insert(b.clone(), bmp(4, 4)));
    assert!(c.get(&a).is_some());

    assert!(c.insert(d.clone(), bmp(4, 4)));
    assert!(c.contains(&a));
    assert!(!c.contains(&b));
    assert!(c.contains(&d));
    let s = c.stats();
    assert_eq!((s.entries, s.bytes, s.evicted, s.dropped), (2, 128, 1, 0));
}

#[test]
fn stale_entries_make_room_for_repeated_requests() {
    let mut c = PixmapCache::new(1024);
    assert!(c.insert(CacheKey::element("old", 16, 16, 1.0, 0), bmp(16, 16)));

    let key = CacheKey::element("button-normal", 8, 8, 1.0, 0);
    for _ in 0..5 {
        c.get_or_try_insert_with(key.clone(), || Ok(Some(bmp(8, 8))))
            .unwrap()
            .unwrap();
    }
    let s = c.stats();
    assert_eq!((s.hits, s.misses, s.dropped, s.evicted), (4, 1, 0, 1));
    assert_eq!(s.bytes, 256);
}

#[test]
fn bitmap_larger_than_budget_is_dropped_and_counted() {
    let mut c = PixmapCache::new(100);
    assert!(c.insert(CacheKey::element("a", 4, 4, 1.0, 0), bmp(4, 4)));
    assert!(!c.insert(CacheKey::element("big", 8, 8, 1.0, 0), bmp(8, 8)));
    let s = c.stats();
    assert_eq!((s.entries, s.bytes, s.dropped, s.evicted), (1, 64, 1, 0));
}

#[test]
fn replacing_an_entry_does_not_double_count() {
    let mut c = PixmapCache::new(100);
    let key = CacheKey::element("a", 4, 4, 1.0, 0);
    assert!(c.insert(key.clone(), bmp(4, 4)));
    assert!(c.insert(key, bmp(4, 4)));
    assert_eq!(c.stats().bytes, 64);
    assert_eq!(c.len(), 1);
}

#[test]
fn producer_returning_none_caches_nothing() {
    let mut c = PixmapCache::new(1 << 20);
    let key = CacheKey::element("missing", 4, 4, 1.0, 0);
    assert!(c.get_or_try_insert_with(key, || Ok(None)).unwrap().is_none());
    assert!(c.is_empty());
}

#[test]
fn clear_resets_occupancy_only() {
    let mut c = PixmapCache::new(1 << 20);
    let key = CacheKey::element("a", 2, 2, 1.0, 0);
    c.insert(key.clone(), bmp(2, 2));
    let _ = c.get(&key);
    c.clear();
    let s = c.stats();
    assert_eq!((s.entries, s.bytes, s.hits), (0, 0, 1));
    assert!(c.get(&key).is_none());
}

#[test]
fn effect_keys_follow_bitmap_content() {
    let a = CacheKey::effect(&bmp(2, 2), Effect::Translucent { pct: 50 }, 1.0, 0);
    let b = CacheKey::effect(&bmp(2, 2), Effect::Translucent { pct: 50 }, 1.0, 0);
    let c = CacheKey::effect(&bmp(2, 2), Effect::Translucent { pct: 40 }, 1.0, 0);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn apply_effect_is_memoized() {
    let mut c = PixmapCache::new(1 << 20);
    let src = bmp(3, 3);
    let a = c.apply_effect(&src, Effect::Translucent { pct: 0 }, 1.0, 0);
    let b = c.apply_effect(&src, Effect::Translucent { pct: 0 }, 1.0, 0);
    assert_eq!(a, b);
    assert!(a.data().iter().all(|&v| v == 0));
    assert_eq!(c.stats().hits, 1);
    assert_eq!(c.apply_effect(&src, Effect::None, 1.0, 0), src);
}
