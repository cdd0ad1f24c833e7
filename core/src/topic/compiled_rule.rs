//! Compiled topic binding rules

use std::fmt;

use arcstr::ArcStr;
use regex::Regex;
use smallvec::SmallVec;

use super::error::PatternError;
use super::pattern_item::{PatternItem, SEGMENT_SEPARATOR, is_hash_segment};
use super::regex_translation;
use crate::config::RuleEngine;

type Segments = SmallVec<[PatternItem; 8]>;

enum Program {
	Segments(Segments),
	Regex(Regex),
}

/// Immutable matching rule compiled from exactly one binding pattern.
///
/// Rules are shared as `Arc<CompiledRule>` between the pattern cache and
/// callers; every rule compiled from the same pattern with the same engine
/// accepts exactly the same routing keys.
pub struct CompiledRule {
	pattern: ArcStr,
	program: Program,
}

impl CompiledRule {
	/// Compiles `pattern`, returning an error if the rule is not usable.
	pub fn try_compile(
		pattern: impl Into<ArcStr>,
		engine: RuleEngine,
	) -> Result<Self, PatternError> {
		let pattern = pattern.into();
		let program = match engine {
			| RuleEngine::Segments => Program::Segments(
				pattern
					.split(SEGMENT_SEPARATOR)
					.map(|s| PatternItem::from(pattern.substr_from(s)))
					.collect(),
			),
			| RuleEngine::Regex => {
				Program::Regex(regex_translation::compile(&pattern)?)
			}
		};
		Ok(Self { pattern, program })
	}

	/// Compiles `pattern` on the matching path.
	///
	/// # Panics
	///
	/// Panics if the pattern cannot be compiled. A binding that cannot be
	/// evaluated is a broker configuration error and routing must not
	/// silently skip it.
	pub fn compile(pattern: impl Into<ArcStr>, engine: RuleEngine) -> Self {
		Self::try_compile(pattern, engine)
			.unwrap_or_else(|err| panic!("Unusable binding pattern: {err}"))
	}

	/// Returns the binding pattern this rule was compiled from.
	pub fn pattern(&self) -> &ArcStr {
		&self.pattern
	}

	/// Returns the engine that evaluates this rule.
	pub fn engine(&self) -> RuleEngine {
		match self.program {
			| Program::Segments(_) => RuleEngine::Segments,
			| Program::Regex(_) => RuleEngine::Regex,
		}
	}

	/// Tests whether the whole routing key satisfies the rule.
	pub fn is_match(&self, routing_key: &str) -> bool {
		match &self.program {
			| Program::Segments(items) => walk(items, routing_key),
			| Program::Regex(regex) => regex.is_match(routing_key),
		}
	}
}

/// Walks the key's segments tracking every position the pattern can reach.
///
/// `reachable[k]` is true when the items seen so far can consume exactly the
/// first `k` segments. `#` spreads reachability forward over any run of
/// segments made of letters and digits.
fn walk(items: &[PatternItem], routing_key: &str) -> bool {
	let segments: SmallVec<[&str; 16]> =
		routing_key.split(SEGMENT_SEPARATOR).collect();
	let width = segments.len() + 1;

	let mut reachable: SmallVec<[bool; 16]> = SmallVec::from_elem(false, width);
	let mut next: SmallVec<[bool; 16]> = SmallVec::from_elem(false, width);
	reachable[0] = true;

	for item in items {
		next.iter_mut().for_each(|slot| *slot = false);
		match item {
			| PatternItem::Hash => {
				let mut open = false;
				for k in 0 .. width {
					open |= reachable[k];
					next[k] = open;
					if k < segments.len() && !is_hash_segment(segments[k]) {
						open = false;
					}
				}
			}
			| _ => {
				for k in 0 .. segments.len() {
					next[k + 1] = reachable[k] && item.matches_segment(segments[k]);
				}
			}
		}
		std::mem::swap(&mut reachable, &mut next);
		if !reachable.contains(&true) {
			return false;
		}
	}
	reachable[segments.len()]
}

impl fmt::Debug for CompiledRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CompiledRule")
			.field("pattern", &self.pattern)
			.field("engine", &self.engine())
			.finish()
	}
}

impl fmt::Display for CompiledRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
