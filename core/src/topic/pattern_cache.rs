//! Shared cache of compiled binding patterns

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arcstr::ArcStr;
use lru::LruCache;
use parking_lot::RwLock;
use tracing::{debug, trace};

use super::compiled_rule::CompiledRule;
use crate::config::{CacheStrategy, MatcherSettings, RuleEngine};

enum Entries {
	Unbounded(HashMap<ArcStr, Arc<CompiledRule>>),
	/// Only `peek` and `push` are used, so eviction follows insertion order.
	Bounded(LruCache<ArcStr, Arc<CompiledRule>>),
	Disabled,
}

impl Entries {
	fn new(strategy: CacheStrategy) -> Self {
		match strategy {
			| CacheStrategy::Unbounded => Entries::Unbounded(HashMap::new()),
			| CacheStrategy::Bounded(capacity) => {
				Entries::Bounded(LruCache::new(capacity))
			}
			| CacheStrategy::NoCache => Entries::Disabled,
		}
	}

	fn get(&self, pattern: &str) -> Option<&Arc<CompiledRule>> {
		match self {
			| Entries::Unbounded(map) => map.get(pattern),
			| Entries::Bounded(lru) => lru.peek(pattern),
			| Entries::Disabled => None,
		}
	}

	/// Inserts `rule` unless the pattern is already present.
	///
	/// Returns the canonical rule and the pattern evicted to make room, if any.
	fn insert(
		&mut self,
		rule: Arc<CompiledRule>,
	) -> (Arc<CompiledRule>, Option<ArcStr>) {
		let pattern = rule.pattern().clone();
		match self {
			| Entries::Unbounded(map) => {
				(Arc::clone(map.entry(pattern).or_insert(rule)), None)
			}
			| Entries::Bounded(lru) => {
				if let Some(existing) = lru.peek(&pattern) {
					return (Arc::clone(existing), None);
				}
				let evicted = lru.push(pattern, Arc::clone(&rule));
				(rule, evicted.map(|(key, _)| key))
			}
			| Entries::Disabled => (rule, None),
		}
	}

	fn len(&self) -> usize {
		match self {
			| Entries::Unbounded(map) => map.len(),
			| Entries::Bounded(lru) => lru.len(),
			| Entries::Disabled => 0,
		}
	}

	fn clear(&mut self) {
		match self {
			| Entries::Unbounded(map) => map.clear(),
			| Entries::Bounded(lru) => lru.clear(),
			| Entries::Disabled => {}
		}
	}
}

/// Point-in-time counters of a [`PatternCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
	/// Lookups answered from the cache
	pub hits: u64,
	/// Lookups that found no entry
	pub misses: u64,
	/// Patterns compiled through [`PatternCache::get_or_compile`]
	pub compilations: u64,
	/// Entries dropped by a bounded cache
	pub evictions: u64,
}

#[derive(Default)]
struct Counters {
	hits: AtomicU64,
	misses: AtomicU64,
	compilations: AtomicU64,
	evictions: AtomicU64,
}

/// Map from binding pattern to compiled rule, shared by concurrent matchers.
///
/// Presence is decided under the read lock; inserts take the write lock. A
/// miss in [`get_or_compile`](Self::get_or_compile) compiles under the write
/// lock after a second lookup, so concurrent first evaluations of a new
/// pattern compile it once.
pub struct PatternCache {
	entries: RwLock<Entries>,
	engine: RuleEngine,
	strategy: CacheStrategy,
	counters: Counters,
}

impl Default for PatternCache {
	fn default() -> Self {
		Self::new(MatcherSettings::default())
	}
}

impl PatternCache {
	/// Creates an empty cache compiling rules with `settings.engine`.
	pub fn new(settings: MatcherSettings) -> Self {
		Self {
			entries: RwLock::new(Entries::new(settings.cache)),
			engine: settings.engine,
			strategy: settings.cache,
			counters: Counters::default(),
		}
	}

	/// Returns the engine used for rules compiled by this cache.
	pub fn engine(&self) -> RuleEngine {
		self.engine
	}

	/// Returns the retention strategy.
	pub fn strategy(&self) -> CacheStrategy {
		self.strategy
	}

	/// Looks up the rule cached for `pattern`.
	pub fn lookup(&self, pattern: &str) -> Option<Arc<CompiledRule>> {
		let found = self.entries.read().get(pattern).cloned();
		match found {
			| Some(rule) => {
				self.counters.hits.fetch_add(1, Ordering::Relaxed);
				trace!(pattern, "pattern cache hit");
				Some(rule)
			}
			| None => {
				self.counters.misses.fetch_add(1, Ordering::Relaxed);
				None
			}
		}
	}

	/// Stores `rule` under its own pattern.
	///
	/// An entry already present for the pattern is kept; the returned rule is
	/// the one later lookups will see.
	pub fn store(&self, rule: Arc<CompiledRule>) -> Arc<CompiledRule> {
		let (canonical, evicted) = self.entries.write().insert(rule);
		if let Some(evicted) = evicted {
			self.counters.evictions.fetch_add(1, Ordering::Relaxed);
			debug!(pattern = %evicted, "evicted binding pattern from cache");
		}
		canonical
	}

	/// Returns the cached rule for `pattern`, compiling and storing it on a
	/// miss.
	///
	/// # Panics
	///
	/// Panics if `pattern` cannot be compiled, see [`CompiledRule::compile`].
	pub fn get_or_compile(&self, pattern: &str) -> Arc<CompiledRule> {
		if self.strategy == CacheStrategy::NoCache {
			self.counters.compilations.fetch_add(1, Ordering::Relaxed);
			return Arc::new(CompiledRule::compile(pattern, self.engine));
		}
		if let Some(rule) = self.lookup(pattern) {
			return rule;
		}

		let mut entries = self.entries.write();
		if let Some(rule) = entries.get(pattern) {
			return Arc::clone(rule);
		}

		let rule = Arc::new(CompiledRule::compile(pattern, self.engine));
		self.counters.compilations.fetch_add(1, Ordering::Relaxed);
		debug!(pattern, engine = ?self.engine, "compiled binding pattern");

		let (canonical, evicted) = entries.insert(rule);
		drop(entries);
		if let Some(evicted) = evicted {
			self.counters.evictions.fetch_add(1, Ordering::Relaxed);
			debug!(pattern = %evicted, "evicted binding pattern from cache");
		}
		canonical
	}

	/// Number of cached patterns.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns true if no pattern is cached.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops every cached rule. Rules still held by callers stay valid.
	pub fn clear(&self) {
		self.entries.write().clear();
	}

	/// Snapshot of the cache counters.
	pub fn stats(&self) -> CacheStats {
		CacheStats {
			hits: self.counters.hits.load(Ordering::Relaxed),
			misses: self.counters.misses.load(Ordering::Relaxed),
			compilations: self.counters.compilations.load(Ordering::Relaxed),
			evictions: self.counters.evictions.load(Ordering::Relaxed),
		}
	}
}

impl std::fmt::Debug for PatternCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PatternCache")
			.field("engine", &self.engine)
			.field("strategy", &self.strategy)
			.field("len", &self.len())
			.finish()
	}
}
