use std::rc::Rc;
use std::time::{Duration, Instant};

use bulikit_core::ContentKey;

use super::Tokens;
use super::cache::TokenCache;
use crate::config::CacheLimits;
use crate::test_utils::{NUMBER, arith_tokenizer, rule};
use crate::AddPolicy;

fn entry(text: &str) -> (ContentKey, Rc<Tokens>) {
    (ContentKey::of(text), Rc::new(Tokens::empty(text)))
}

#[test]
fn repeated_text_is_shared() {
    let mut tokenizer = arith_tokenizer();

    let first = tokenizer.tokenize("1 + 2").unwrap();
    let second = tokenizer.tokenize("1 + 2").unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    let stats = tokenizer.cache_stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
}

#[test]
fn rule_change_clears_cache() {
    let mut tokenizer = arith_tokenizer();
    let before = tokenizer.tokenize("12").unwrap();
    assert!(tokenizer.is_cached("12"));

    tokenizer.add_rule(rule(NUMBER, r"\d"), AddPolicy::BeforeFirstOfType);
    assert!(!tokenizer.is_cached("12"));

    let after = tokenizer.tokenize("12").unwrap();
    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 2);
}

#[test]
fn size_cap_drops_least_recently_used() {
    let mut tokenizer = arith_tokenizer();
    for i in 0..260 {
        tokenizer.tokenize(&format!("{i} + 1")).unwrap();
    }

    let stats = tokenizer.cache_stats();
    assert_eq!(stats.entries, 250);
    assert_eq!(stats.evictions, 10);
    assert!(!tokenizer.is_cached("0 + 1"));
    assert!(!tokenizer.is_cached("9 + 1"));
    assert!(tokenizer.is_cached("10 + 1"));
    assert!(tokenizer.is_cached("259 + 1"));
}

#[test]
fn hit_refreshes_recency() {
    let limits = CacheLimits {
        min_entries: 0,
        max_entries: 2,
        idle_timeout: Duration::from_secs(60),
    };
    let mut cache = TokenCache::new(limits);
    let now = Instant::now();

    let (a_key, a) = entry("a");
    let (b_key, b) = entry("b");
    let (c_key, c) = entry("c");
    cache.insert(a_key, a, now);
    cache.insert(b_key, b, now);
    assert!(cache.get(a_key, "a", now).is_some());
    cache.insert(c_key, c, now);

    assert!(cache.contains("a"));
    assert!(!cache.contains("b"));
    assert!(cache.contains("c"));
}

#[test]
fn idle_entries_outside_recent_window_expire() {
    let limits = CacheLimits {
        min_entries: 2,
        max_entries: 10,
        idle_timeout: Duration::from_secs(10),
    };
    let mut cache = TokenCache::new(limits);
    let start = Instant::now();

    for text in ["a", "b", "c", "d"] {
        let (key, tokens) = entry(text);
        cache.insert(key, tokens, start);
    }
    cache.evict(start + Duration::from_secs(5));
    assert_eq!(cache.len(), 4);

    cache.evict(start + Duration::from_secs(11));
    assert_eq!(cache.len(), 2);
    assert!(cache.contains("c"));
    assert!(cache.contains("d"));
    assert_eq!(cache.stats().evictions, 2);
}

#[test]
fn key_hit_with_other_text_is_a_miss() {
    let mut cache = TokenCache::new(CacheLimits::default());
    let now = Instant::now();
    let (key, tokens) = entry("abc");
    cache.insert(key, tokens, now);

    assert!(cache.get(key, "xyz", now).is_none());
    assert_eq!(cache.stats().misses, 1);
}

#[test]
fn disabled_cache_keeps_nothing() {
    let mut tokenizer = arith_tokenizer();
    tokenizer.set_cache_limits(CacheLimits::disabled());

    let first = tokenizer.tokenize("1").unwrap();
    let second = tokenizer.tokenize("1").unwrap();

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert_eq!(tokenizer.cache_stats().entries, 0);
}

#[test]
fn shrinking_limits_evicts_immediately() {
    let mut tokenizer = arith_tokenizer();
    for text in ["1", "2", "3"] {
        tokenizer.tokenize(text).unwrap();
    }

    tokenizer.set_cache_limits(CacheLimits {
        max_entries: 1,
        ..CacheLimits::default()
    });

    assert_eq!(tokenizer.cache_stats().entries, 1);
    assert!(tokenizer.is_cached("3"));
}
