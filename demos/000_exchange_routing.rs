//! # Exchange Routing
//!
//! Routes a handful of published messages through direct, fanout and topic
//! exchanges that share one pattern cache, printing the queues each message
//! reaches.
//!
//! ```bash
//! RUST_LOG=amq_routing_core=debug cargo run --example 000_exchange_routing
//! ```

mod shared;

use std::sync::Arc;

use amq_routing::prelude::*;

/// Published message
struct Publish {
	routing_key: String,
}

impl Message for Publish {
	fn routing_key(&self) -> &str {
		&self.routing_key
	}
}

/// Queue bound to an exchange
struct QueueBinding {
	queue: &'static str,
	binding_key: &'static str,
}

impl Binding for QueueBinding {
	fn binding_key(&self) -> &str {
		self.binding_key
	}
}

fn main() -> Result<()> {
	shared::tracing::setup(None);

	let cache = Arc::new(PatternCache::new(shared::config::matcher_settings()?));

	let exchanges = [
		("amq.direct", "direct", vec![
			QueueBinding { queue: "billing", binding_key: "orders.eu.created" },
			QueueBinding { queue: "audit", binding_key: "orders" },
		]),
		("amq.fanout", "fanout", vec![
			QueueBinding { queue: "archive", binding_key: "" },
			QueueBinding { queue: "mirror", binding_key: "ignored" },
		]),
		("amq.topic", "topic", vec![
			QueueBinding { queue: "eu-orders", binding_key: "orders.eu.*" },
			QueueBinding { queue: "created", binding_key: "orders.*.created" },
			QueueBinding { queue: "all-logs", binding_key: "logs.#" },
			QueueBinding { queue: "errors", binding_key: "#.error" },
		]),
	];

	let messages = [
		"orders.eu.created",
		"orders.us.created",
		"logs.app.error",
		"logging",
	];

	for (exchange, kind, bindings) in &exchanges {
		let matcher = kind.parse::<ExchangeKind>()?.matcher(&cache);
		println!("{exchange} ({kind})");
		for key in messages {
			let message = Publish { routing_key: key.to_string() };
			let queues: Vec<&str> = route(matcher.as_ref(), &message, bindings)
				.map(|binding| binding.queue)
				.collect();
			println!("  {key:<20} -> {queues:?}");
		}
	}

	println!("pattern cache: {:?} {:?}", cache, cache.stats());
	Ok(())
}
