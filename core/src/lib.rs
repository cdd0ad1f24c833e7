//! # AMQ Routing Core
//!
//! Routing-key matching for the exchange layer of a message broker: given a
//! published message and a binding between an exchange and a queue, decide
//! whether the message is delivered across the binding.
//!
//! ## Disciplines
//!
//! - **Direct**: routing key equals binding key, byte for byte
//! - **Fanout**: every message crosses every binding
//! - **Topic**: dot-separated binding patterns with wildcards
//!
//! ## Topic Patterns
//!
//! - `*` matches exactly one segment of ASCII letters and digits
//!   (e.g., `orders.*.created`)
//! - `#` matches zero or more segments, anywhere in the pattern
//!   (e.g., `logs.#`, `#.error`, `orders.#.created`)
//!
//! Compiled patterns are kept in a [`PatternCache`] that the caller creates
//! and injects, so independent brokers in one process never share state.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use amq_routing_core::{
//! 	Binding, ExchangeKind, MatchFunction, Message, PatternCache,
//! };
//!
//! struct Publish(&'static str);
//! impl Message for Publish {
//! 	fn routing_key(&self) -> &str {
//! 		self.0
//! 	}
//! }
//!
//! struct QueueBinding(&'static str);
//! impl Binding for QueueBinding {
//! 	fn binding_key(&self) -> &str {
//! 		self.0
//! 	}
//! }
//!
//! let cache = Arc::new(PatternCache::default());
//! let topic = ExchangeKind::Topic.matcher(&cache);
//!
//! assert!(topic.matches(&Publish("orders.eu.created"), &QueueBinding("orders.*.created")));
//! assert!(!topic.matches(&Publish("orders.created"), &QueueBinding("orders.*.created")));
//! assert!(topic.matches(&Publish("logs.app.error"), &QueueBinding("logs.#")));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod topic;

// === Core Public API ===
pub use config::{CacheStrategy, MatcherSettings, RuleEngine, SettingsError};
pub use error::RoutingError;
pub use matcher::{
	Binding, Direct, ExchangeKind, Fanout, MatchFunction, Message,
	ParseExchangeKindError, Topic, route,
};
pub use topic::{CacheStats, CompiledRule, PatternCache, PatternError};

/// Result type alias for operations that may fail with RoutingError
pub type Result<T> = std::result::Result<T, RoutingError>;
