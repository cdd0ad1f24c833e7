//! Binding pattern segment types

use std::fmt;

use arcstr::Substr;

/// Separator between routing key and binding pattern segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// Single-segment wildcard token.
pub const STAR: &str = "*";

/// Multi-segment wildcard token.
pub const HASH: &str = "#";

/// Returns true if `segment` is a non-empty run of ASCII letters and digits.
///
/// This is the only alphabet accepted by `*`.
pub fn is_word(segment: &str) -> bool {
	!segment.is_empty() && segment.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if `segment` may be swallowed by `#`.
///
/// Empty segments are allowed: `#` consumes runs of letters, digits and dots.
pub fn is_hash_segment(segment: &str) -> bool {
	segment.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Topic binding pattern segment: literal string or wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternItem {
	/// Literal segment, compared byte for byte
	Literal(Substr),
	/// Single-segment wildcard `*`
	Star,
	/// Multi-segment wildcard `#`
	Hash,
}

impl PatternItem {
	/// Returns string representation of the pattern item.
	pub fn as_str(&self) -> &str {
		match self {
			| PatternItem::Literal(s) => s,
			| PatternItem::Star => STAR,
			| PatternItem::Hash => HASH,
		}
	}

	/// Returns true if this item is a wildcard (`*` or `#`).
	pub fn is_wildcard(&self) -> bool {
		matches!(self, PatternItem::Star | PatternItem::Hash)
	}

	/// Tests a single routing key segment against a non-`#` item.
	///
	/// `#` spans segments and is handled by the rule walker, so it never
	/// matches a lone segment here.
	pub fn matches_segment(&self, segment: &str) -> bool {
		match self {
			| PatternItem::Literal(expected) => expected.as_str() == segment,
			| PatternItem::Star => is_word(segment),
			| PatternItem::Hash => false,
		}
	}
}

impl fmt::Display for PatternItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl From<Substr> for PatternItem {
	fn from(item: Substr) -> Self {
		match item.as_str() {
			| STAR => PatternItem::Star,
			| HASH => PatternItem::Hash,
			| _ => PatternItem::Literal(item),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tokens() {
		assert_eq!(PatternItem::from(Substr::from("*")), PatternItem::Star);
		assert_eq!(PatternItem::from(Substr::from("#")), PatternItem::Hash);
		assert_eq!(
			PatternItem::from(Substr::from("orders")),
			PatternItem::Literal(Substr::from("orders"))
		);
		// Tokens only count as wildcards when they fill the whole segment
		assert!(!PatternItem::from(Substr::from("a*")).is_wildcard());
		assert!(PatternItem::Hash.is_wildcard());
		assert_eq!(PatternItem::Star.to_string(), "*");
	}

	#[test]
	fn test_matches_segment() {
		assert!(PatternItem::Star.matches_segment("eu1"));
		assert!(!PatternItem::Star.matches_segment(""));
		assert!(!PatternItem::Star.matches_segment("e_u"));
		assert!(!PatternItem::Hash.matches_segment("eu"));
		assert!(
			PatternItem::Literal(Substr::from("a-b")).matches_segment("a-b")
		);
	}

	#[test]
	fn test_hash_segment_alphabet() {
		assert!(is_hash_segment(""));
		assert!(is_hash_segment("Ab9"));
		assert!(!is_hash_segment("a-b"));
		assert!(!is_word(""));
	}
}
