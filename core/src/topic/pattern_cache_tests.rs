//! Tests for PatternCache population and retention

use std::sync::Arc;

use super::{CompiledRule, PatternCache};
use crate::config::{CacheStrategy, MatcherSettings, RuleEngine};

fn cache_with(strategy: CacheStrategy) -> PatternCache {
	PatternCache::new(MatcherSettings::default().with_cache(strategy))
}

#[test]
fn test_lookup_miss_then_hit() {
	let cache = PatternCache::default();
	assert!(cache.lookup("orders.*").is_none());

	let rule = cache.get_or_compile("orders.*");
	let cached = cache.lookup("orders.*").expect("Rule should be cached");

	assert!(Arc::ptr_eq(&rule, &cached));
	let stats = cache.stats();
	assert_eq!(stats.compilations, 1);
	assert_eq!(stats.hits, 1);
	assert_eq!(stats.misses, 2);
}

#[test]
fn test_get_or_compile_reuses_rule() {
	let cache = PatternCache::default();
	let first = cache.get_or_compile("logs.#");
	let second = cache.get_or_compile("logs.#");

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(cache.len(), 1);
	assert_eq!(cache.stats().compilations, 1);
}

#[test]
fn test_store_keeps_existing_entry() {
	let cache = PatternCache::default();
	let original = cache.store(Arc::new(CompiledRule::compile(
		"a.*",
		RuleEngine::Segments,
	)));
	let duplicate = Arc::new(CompiledRule::compile("a.*", RuleEngine::Segments));
	let canonical = cache.store(Arc::clone(&duplicate));

	assert!(Arc::ptr_eq(&original, &canonical));
	assert!(!Arc::ptr_eq(&duplicate, &canonical));
	assert_eq!(cache.len(), 1);
}

#[test]
fn test_cached_rule_agrees_with_fresh_rule() {
	let cache = PatternCache::default();
	let keys = ["a", "a.b", "a.b.c", "x.a.b", "a..b", ""];
	for pattern in ["a.#", "a.*", "#.b", "a.#.b"] {
		cache.get_or_compile(pattern);
		let fresh = CompiledRule::compile(pattern, RuleEngine::Segments);
		for key in keys {
			assert_eq!(
				cache.get_or_compile(pattern).is_match(key),
				fresh.is_match(key),
				"pattern '{pattern}' vs key '{key}'"
			);
		}
	}
}

#[test]
fn test_bounded_cache_evicts_oldest_insert() {
	let cache = cache_with(CacheStrategy::new(2));
	cache.get_or_compile("a.*");
	cache.get_or_compile("b.*");
	// Reads do not refresh recency
	cache.get_or_compile("a.*");
	cache.get_or_compile("c.*");

	assert_eq!(cache.len(), 2);
	assert!(cache.lookup("a.*").is_none());
	assert!(cache.lookup("b.*").is_some());
	assert!(cache.lookup("c.*").is_some());
	assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn test_no_cache_compiles_every_time() {
	let cache = cache_with(CacheStrategy::NoCache);
	let first = cache.get_or_compile("a.*");
	let second = cache.get_or_compile("a.*");

	assert!(!Arc::ptr_eq(&first, &second));
	assert!(cache.is_empty());
	assert_eq!(cache.stats().compilations, 2);
	assert!(first.is_match("a.b"));
}

#[test]
fn test_clear_keeps_borrowed_rules_valid() {
	let cache = PatternCache::default();
	let rule = cache.get_or_compile("orders.#");
	cache.clear();

	assert!(cache.is_empty());
	assert!(rule.is_match("orders.eu"));
}

#[test]
fn test_engine_follows_settings() {
	let cache = PatternCache::new(
		MatcherSettings::default().with_engine(RuleEngine::Regex),
	);
	assert_eq!(cache.engine(), RuleEngine::Regex);
	assert_eq!(cache.get_or_compile("a.#").engine(), RuleEngine::Regex);
	assert_eq!(cache.strategy(), CacheStrategy::Unbounded);
}
