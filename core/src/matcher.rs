//! Routing-key match functions
//!
//! A routing component holds a binding and an incoming message and asks a
//! [`MatchFunction`] whether the message is delivered across that binding.
//! The exchange type decides which discipline is used; callers only see the
//! trait.

pub mod direct;
pub mod exchange;
pub mod fanout;
pub mod topic;

use std::sync::Arc;

pub use direct::Direct;
pub use exchange::{ExchangeKind, ParseExchangeKindError, route};
pub use fanout::Fanout;
pub use topic::Topic;

/// A published message, as seen by the matchers.
pub trait Message {
	/// Dot-separated routing key attached by the publisher.
	fn routing_key(&self) -> &str;
}

/// An exchange-to-queue binding, as seen by the matchers.
pub trait Binding {
	/// Binding key; a pattern for topic exchanges.
	fn binding_key(&self) -> &str;
}

/// Decides whether a message is delivered across a binding.
///
/// Implementations are pure predicates: any internal caching must not change
/// the answer. Plain closures with the matching signature implement this
/// trait too.
pub trait MatchFunction: Send + Sync {
	/// Returns true if `message` should be routed across `binding`.
	fn matches(&self, message: &dyn Message, binding: &dyn Binding) -> bool;
}

impl<F> MatchFunction for F
where F: Fn(&dyn Message, &dyn Binding) -> bool + Send + Sync
{
	fn matches(&self, message: &dyn Message, binding: &dyn Binding) -> bool {
		self(message, binding)
	}
}

impl<T: Message + ?Sized> Message for &T {
	fn routing_key(&self) -> &str {
		(**self).routing_key()
	}
}

impl<T: Message + ?Sized> Message for Box<T> {
	fn routing_key(&self) -> &str {
		(**self).routing_key()
	}
}

impl<T: Message + ?Sized> Message for Arc<T> {
	fn routing_key(&self) -> &str {
		(**self).routing_key()
	}
}

impl<T: Binding + ?Sized> Binding for &T {
	fn binding_key(&self) -> &str {
		(**self).binding_key()
	}
}

impl<T: Binding + ?Sized> Binding for Box<T> {
	fn binding_key(&self) -> &str {
		(**self).binding_key()
	}
}

impl<T: Binding + ?Sized> Binding for Arc<T> {
	fn binding_key(&self) -> &str {
		(**self).binding_key()
	}
}
