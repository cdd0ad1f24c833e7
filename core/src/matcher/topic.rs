//! Hierarchical wildcard matching for topic exchanges

use std::sync::Arc;

use super::{Binding, MatchFunction, Message};
use crate::config::MatcherSettings;
use crate::topic::PatternCache;

/// Matches routing keys against `*`/`#` binding patterns.
///
/// Compiled patterns live in an injected [`PatternCache`]; matchers sharing a
/// cache share compiled rules, and separate brokers in one process can keep
/// separate caches.
#[derive(Debug, Clone, Default)]
pub struct Topic {
	cache: Arc<PatternCache>,
}

impl Topic {
	/// Creates a matcher backed by `cache`.
	pub fn new(cache: Arc<PatternCache>) -> Self {
		Self { cache }
	}

	/// Creates a matcher with a private cache built from `settings`.
	pub fn with_settings(settings: MatcherSettings) -> Self {
		Self::new(Arc::new(PatternCache::new(settings)))
	}

	/// Returns the cache backing this matcher.
	pub fn cache(&self) -> &Arc<PatternCache> {
		&self.cache
	}
}

impl MatchFunction for Topic {
	/// # Panics
	///
	/// Panics if the binding key cannot be compiled into a rule.
	fn matches(&self, message: &dyn Message, binding: &dyn Binding) -> bool {
		self.cache
			.get_or_compile(binding.binding_key())
			.is_match(message.routing_key())
	}
}
