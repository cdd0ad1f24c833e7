//! Error types for the topic module

use thiserror::Error;

/// Errors raised while compiling a binding pattern into a rule
///
/// Well-formed patterns always compile. Any of these errors means upstream
/// validation let a malformed pattern through.
#[derive(Error, Debug, Clone)]
pub enum PatternError {
	/// The translated rule is not a valid matching expression
	#[error("Binding pattern '{pattern}' produced an invalid rule: {source}")]
	InvalidRule {
		/// The offending binding pattern
		pattern: String,
		/// Underlying regex compilation failure
		#[source]
		source: regex::Error,
	},
}

impl PatternError {
	/// Creates a new InvalidRule error
	pub fn invalid_rule(pattern: impl Into<String>, source: regex::Error) -> Self {
		Self::InvalidRule {
			pattern: pattern.into(),
			source,
		}
	}

	/// Returns the binding pattern that failed to compile.
	pub fn pattern(&self) -> &str {
		match self {
			| PatternError::InvalidRule { pattern, .. } => pattern,
		}
	}
}

/// Convenient Result type for pattern operations
pub type PatternResult<T> = Result<T, PatternError>;
