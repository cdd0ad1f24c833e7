//! Unconditional matching for broadcast exchanges

use super::{Binding, MatchFunction, Message};

/// Matches every message across every binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fanout;

impl MatchFunction for Fanout {
	fn matches(&self, _message: &dyn Message, _binding: &dyn Binding) -> bool {
		true
	}
}
