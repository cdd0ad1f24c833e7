use std::env;

use amq_routing::{CacheStrategy, MatcherSettings, RoutingError, RuleEngine};

/// Build matcher settings from the environment
///
/// Reads, after the `.env` files loaded by `tracing::setup`:
/// - `AMQ_ENGINE` - `segments` (default) or `regex`
/// - `AMQ_CACHE_CAPACITY` - bounded cache size; unset keeps every pattern,
///   `0` is rejected
/// - `AMQ_CACHE_DISABLED=1` - compile on every evaluation
pub fn matcher_settings() -> Result<MatcherSettings, RoutingError> {
	let engine = match env::var("AMQ_ENGINE").as_deref() {
		| Ok("regex") => RuleEngine::Regex,
		| _ => RuleEngine::Segments,
	};

	let settings = match env::var("AMQ_CACHE_CAPACITY") {
		| Ok(capacity) => {
			let capacity = capacity.trim().parse::<usize>().unwrap_or(0);
			MatcherSettings::bounded(capacity)?
		}
		| Err(_) => MatcherSettings::default(),
	};

	let settings = if env::var("AMQ_CACHE_DISABLED").is_ok() {
		settings.with_cache(CacheStrategy::NoCache)
	} else {
		settings
	};

	Ok(settings.with_engine(engine))
}
