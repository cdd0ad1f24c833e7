//! Translation of binding patterns into anchored regular expressions
//!
//! The translation is an ordered chain of literal substitutions. Each step
//! runs on the output of the previous one, so the `#` rules rely on the
//! escaped dots produced by the first step still sitting next to `#`.

use regex::Regex;

use super::error::PatternError;
use super::pattern_item::{HASH, SEGMENT_SEPARATOR};

/// One or more ASCII letters or digits, never a dot.
const WORD: &str = "[A-Za-z0-9]+";

/// Any run of ASCII letters, digits and dots, possibly empty.
const WORDS_AND_DOTS: &str = r"[A-Za-z0-9\.]*";

/// Ordered substitutions applied after `.` is escaped and `*` is replaced.
///
/// `.#.` must be rewritten before the one-sided forms, otherwise `\.#`
/// would consume its left dot and leave a dangling `\.`.
fn hash_substitutions() -> [(&'static str, String); 4] {
	[
		(r"\.#\.", format!(r"(\.|\.{WORDS_AND_DOTS}\.)")),
		(r"\.#", format!(r"(\.{WORDS_AND_DOTS})?")),
		(r"#\.", format!(r"({WORDS_AND_DOTS}\.)?")),
		("#", WORDS_AND_DOTS.to_string()),
	]
}

/// Collapses runs of adjacent `#` segments into one.
///
/// `#.#` matches the same keys as `#`, but the substitution chain would
/// rewrite the pair into a rule demanding at least one dot.
fn collapse_hashes(pattern: &str) -> String {
	let mut segments: Vec<&str> = Vec::new();
	for segment in pattern.split(SEGMENT_SEPARATOR) {
		if segment == HASH && segments.last() == Some(&HASH) {
			continue;
		}
		segments.push(segment);
	}
	segments.join(".")
}

/// Translates a binding pattern into regex source anchored at both ends.
pub fn translate(pattern: &str) -> String {
	let mut source = collapse_hashes(pattern).replace('.', r"\.");
	source = source.replace('*', WORD);
	for (from, to) in hash_substitutions() {
		source = source.replace(from, &to);
	}
	format!("^(?:{source})$")
}

/// Translates and compiles a binding pattern.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
	Regex::new(&translate(pattern))
		.map_err(|source| PatternError::invalid_rule(pattern, source))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_translate_literal_escapes_dots() {
		assert_eq!(translate("a.b"), r"^(?:a\.b)$");
	}

	#[test]
	fn test_translate_star() {
		assert_eq!(translate("a.*"), r"^(?:a\.[A-Za-z0-9]+)$");
	}

	#[test]
	fn test_translate_hash_forms() {
		assert_eq!(
			translate("a.#.c"),
			r"^(?:a(\.|\.[A-Za-z0-9\.]*\.)c)$"
		);
		assert_eq!(translate("a.#"), r"^(?:a(\.[A-Za-z0-9\.]*)?)$");
		assert_eq!(translate("#.a"), r"^(?:([A-Za-z0-9\.]*\.)?a)$");
		assert_eq!(translate("#"), r"^(?:[A-Za-z0-9\.]*)$");
	}

	#[test]
	fn test_translate_collapses_adjacent_hashes() {
		assert_eq!(translate("a.#.#"), translate("a.#"));
		assert_eq!(translate("#.#.#"), translate("#"));
		assert_eq!(translate("a.#.#.b.#"), translate("a.#.b.#"));
	}

	#[test]
	fn test_compile_rejects_unbalanced_group() {
		let err = compile("orders.(eu").unwrap_err();
		assert!(matches!(err, PatternError::InvalidRule { .. }));
		assert!(err.to_string().contains("orders.(eu"));
	}
}
