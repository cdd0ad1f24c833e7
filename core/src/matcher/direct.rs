//! Exact routing-key matching

use super::{Binding, MatchFunction, Message};

/// Matches when the routing key equals the binding key byte for byte.
///
/// No normalization or case folding is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direct;

impl MatchFunction for Direct {
	fn matches(&self, message: &dyn Message, binding: &dyn Binding) -> bool {
		message.routing_key() == binding.binding_key()
	}
}
