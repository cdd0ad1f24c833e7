//! Error types used throughout the library

use thiserror::Error;

use crate::config::SettingsError;
use crate::matcher::ParseExchangeKindError;
use crate::topic::PatternError;

/// Comprehensive error type for the routing core
///
/// Aggregates module errors into one type for the public API while keeping
/// the detailed error from each module.
#[derive(Error, Debug, Clone)]
pub enum RoutingError {
	/// Binding pattern could not be compiled
	#[error("Pattern error: {0}")]
	Pattern(#[from] PatternError),

	/// Invalid matcher settings
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),

	/// Unknown exchange type
	#[error("Exchange error: {0}")]
	ExchangeKind(#[from] ParseExchangeKindError),
}
