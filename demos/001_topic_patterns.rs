//! # Topic Patterns
//!
//! Evaluates binding patterns against routing keys with both rule engines.
//!
//! ```bash
//! # Built-in table
//! cargo run --example 001_topic_patterns
//!
//! # Custom pattern and keys
//! cargo run --example 001_topic_patterns -- "orders.#.created" orders.created orders.eu.us.created
//! ```

mod shared;

use amq_routing::advanced::{CompiledRule, RuleEngine, regex_translation};

fn main() {
	shared::tracing::setup(None);

	let mut args = std::env::args().skip(1);
	let table: Vec<(String, Vec<String>)> = match args.next() {
		| Some(pattern) => vec![(pattern, args.collect())],
		| None => [
			("orders.*.created", &["orders.eu.created", "orders.created", "orders.eu.us.created"][..]),
			("logs.#", &["logs", "logs.app.error", "logging"][..]),
			("#.a", &["a", "b.a", "b.c.a", "ab"][..]),
			("a.#.c", &["a.c", "a.b.c", "a.b.d.c", "a.c.d", "ac"][..]),
		]
		.into_iter()
		.map(|(pattern, keys)| {
			(pattern.to_string(), keys.iter().map(|k| k.to_string()).collect())
		})
		.collect(),
	};

	for (pattern, keys) in table {
		println!("{pattern}  (regex: {})", regex_translation::translate(&pattern));
		let rules = [RuleEngine::Segments, RuleEngine::Regex]
			.map(|engine| CompiledRule::try_compile(pattern.as_str(), engine));
		for key in &keys {
			let verdicts: Vec<String> = rules
				.iter()
				.map(|rule| match rule {
					| Ok(rule) => rule.is_match(key).to_string(),
					| Err(err) => format!("error: {err}"),
				})
				.collect();
			println!("  {key:<24} segments={} regex={}", verdicts[0], verdicts[1]);
		}
	}
}
