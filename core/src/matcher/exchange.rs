//! Exchange types and binding selection

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::{Binding, Direct, Fanout, MatchFunction, Message, Topic};
use crate::topic::PatternCache;

/// Unknown exchange type name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown exchange type '{0}', expected direct, fanout or topic")]
pub struct ParseExchangeKindError(pub String);

/// Exchange type, selecting the matching discipline for its bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeKind {
	/// Exact routing-key equality
	Direct,
	/// Every binding receives every message
	Fanout,
	/// `*`/`#` wildcard patterns
	Topic,
}

impl ExchangeKind {
	/// Returns the exchange type name.
	pub fn as_str(&self) -> &'static str {
		match self {
			| ExchangeKind::Direct => "direct",
			| ExchangeKind::Fanout => "fanout",
			| ExchangeKind::Topic => "topic",
		}
	}

	/// Builds the match function for this exchange type.
	///
	/// Topic matchers share `cache`; the other kinds ignore it.
	pub fn matcher(&self, cache: &Arc<PatternCache>) -> Arc<dyn MatchFunction> {
		match self {
			| ExchangeKind::Direct => Arc::new(Direct),
			| ExchangeKind::Fanout => Arc::new(Fanout),
			| ExchangeKind::Topic => Arc::new(Topic::new(Arc::clone(cache))),
		}
	}
}

impl fmt::Display for ExchangeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for ExchangeKind {
	type Err = ParseExchangeKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			| "direct" => Ok(ExchangeKind::Direct),
			| "fanout" => Ok(ExchangeKind::Fanout),
			| "topic" => Ok(ExchangeKind::Topic),
			| _ => Err(ParseExchangeKindError(s.to_string())),
		}
	}
}

/// Yields the bindings `message` is delivered across, in input order.
pub fn route<'a, B>(
	matcher: &'a dyn MatchFunction,
	message: &'a dyn Message,
	bindings: impl IntoIterator<Item = &'a B> + 'a,
) -> impl Iterator<Item = &'a B> + 'a
where
	B: Binding + 'a,
{
	bindings
		.into_iter()
		.filter(move |binding| matcher.matches(message, *binding))
}
