//! # AMQ Routing
//!
//! Routing-key matching for message broker exchanges.
//!
//! ## Features
//!
//! - **Direct exchanges**: exact routing-key equality
//! - **Fanout exchanges**: every message crosses every binding
//! - **Topic exchanges**: dot-separated patterns with `*` and `#` wildcards
//! - **Shared pattern cache**: compiled topic patterns are reused across
//!   concurrent evaluations, with unbounded, bounded or disabled retention
//! - **Pluggable engines**: segment walker (default) or anchored regex
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use amq_routing::prelude::*;
//!
//! struct Publish(String);
//! impl Message for Publish {
//! 	fn routing_key(&self) -> &str {
//! 		&self.0
//! 	}
//! }
//!
//! struct QueueBinding(String);
//! impl Binding for QueueBinding {
//! 	fn binding_key(&self) -> &str {
//! 		&self.0
//! 	}
//! }
//!
//! let cache = Arc::new(PatternCache::new(MatcherSettings::default()));
//! let matcher = "topic".parse::<ExchangeKind>()?.matcher(&cache);
//!
//! let bindings = [
//! 	QueueBinding("orders.*.created".into()),
//! 	QueueBinding("logs.#".into()),
//! ];
//! let message = Publish("orders.eu.created".into());
//! let routed: Vec<_> = route(matcher.as_ref(), &message, &bindings)
//! 	.map(|binding| binding.binding_key())
//! 	.collect();
//!
//! assert_eq!(routed, ["orders.*.created"]);
//! # Ok::<(), amq_routing::RoutingError>(())
//! ```
//!
//! ## Pattern Matching
//!
//! - `*` matches one segment of ASCII letters and digits
//!   (e.g., `orders.*.created`)
//! - `#` matches zero or more segments (e.g., `logs.#`, `#.error`,
//!   `orders.#.created`)

#![warn(missing_docs)]

pub use amq_routing_core::{
	Binding, CacheStats, CacheStrategy, CompiledRule, Direct, ExchangeKind,
	Fanout, MatchFunction, MatcherSettings, Message, ParseExchangeKindError,
	PatternCache, PatternError, Result, RoutingError, RuleEngine,
	SettingsError, Topic, route,
};

/// Prelude module for convenient imports
///
/// Essential types for routing messages across bindings.
///
/// ```rust
/// use amq_routing::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		Binding, ExchangeKind, MatchFunction, MatcherSettings, Message,
		PatternCache, Result, RoutingError, route,
	};
}

/// Advanced types for tuning and inspecting topic matching
///
/// ```rust
/// use amq_routing::advanced::*;
/// ```
pub mod advanced {
	pub use amq_routing_core::topic::{PatternItem, regex_translation};

	pub use crate::{
		CacheStats, CacheStrategy, CompiledRule, Direct, Fanout, RuleEngine,
		Topic,
	};
}

/// Error types used throughout the library
///
/// ```rust
/// use amq_routing::errors::*;
/// ```
pub mod errors {
	pub use crate::{
		ParseExchangeKindError, PatternError, RoutingError, SettingsError,
	};
}
