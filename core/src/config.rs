//! Configuration for topic matching

use std::num::NonZeroUsize;

use serde::Deserialize;
use thiserror::Error;

/// Invalid matcher settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
	/// Invalid configuration parameter value
	#[error("Invalid configuration value: {0}")]
	ConfigurationValue(String),
}

/// Engine used to evaluate compiled topic rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleEngine {
	/// Segment walker over tokenized pattern items
	#[default]
	Segments,
	/// Anchored regular expression built by ordered substitutions
	Regex,
}

/// Retention policy for the pattern cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStrategy {
	/// Keep every compiled pattern for the lifetime of the cache
	#[default]
	Unbounded,
	/// Keep at most N patterns, evicting the oldest inserted one
	Bounded(NonZeroUsize),
	/// Compile on every evaluation
	NoCache,
}

impl CacheStrategy {
	/// Creates a bounded strategy; a zero capacity disables caching.
	pub fn new(capacity: usize) -> Self {
		match NonZeroUsize::new(capacity) {
			| Some(capacity) => CacheStrategy::Bounded(capacity),
			| None => CacheStrategy::NoCache,
		}
	}
}

/// Topic matcher settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
	/// Rule evaluation engine
	pub engine: RuleEngine,
	/// Pattern cache retention
	pub cache: CacheStrategy,
}

impl MatcherSettings {
	/// Settings with a bounded pattern cache (must be > 0)
	pub fn bounded(capacity: usize) -> Result<Self, SettingsError> {
		let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
			SettingsError::ConfigurationValue(
				"pattern cache capacity must be greater than 0".to_string(),
			)
		})?;
		Ok(Self {
			cache: CacheStrategy::Bounded(capacity),
			..Self::default()
		})
	}

	/// Replaces the rule engine.
	pub fn with_engine(mut self, engine: RuleEngine) -> Self {
		self.engine = engine;
		self
	}

	/// Replaces the cache strategy.
	pub fn with_cache(mut self, cache: CacheStrategy) -> Self {
		self.cache = cache;
		self
	}
}
