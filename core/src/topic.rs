//! Topic pattern handling module
//!
//! This module turns topic binding patterns into compiled rules and caches
//! them. Patterns are dot-separated; `*` matches exactly one segment of
//! ASCII letters and digits, `#` matches zero or more segments.

pub mod compiled_rule;
pub mod error;
pub mod pattern_cache;
pub mod pattern_item;
pub mod regex_translation;

#[cfg(test)]
mod pattern_cache_tests;

pub use compiled_rule::CompiledRule;
pub use error::{PatternError, PatternResult};
pub use pattern_cache::{CacheStats, PatternCache};
pub use pattern_item::PatternItem;
