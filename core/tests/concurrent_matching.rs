//! Concurrent topic matching against a shared pattern cache

use std::sync::Arc;
use std::thread;

use amq_routing_core::{
	Binding, CompiledRule, MatchFunction, MatcherSettings, Message,
	PatternCache, RuleEngine, Topic,
};

struct Publish(String);

impl Message for Publish {
	fn routing_key(&self) -> &str {
		&self.0
	}
}

struct QueueBinding(String);

impl Binding for QueueBinding {
	fn binding_key(&self) -> &str {
		&self.0
	}
}

const THREADS: usize = 16;
const PATTERNS: usize = 64;

fn patterns() -> Vec<String> {
	(0 .. PATTERNS)
		.map(|i| match i % 4 {
			| 0 => format!("svc{i}.*.created"),
			| 1 => format!("svc{i}.#"),
			| 2 => format!("#.svc{i}"),
			| _ => format!("svc{i}.#.done"),
		})
		.collect()
}

fn keys(i: usize) -> Vec<String> {
	vec![
		format!("svc{i}.eu.created"),
		format!("svc{i}"),
		format!("svc{i}.a.b.done"),
		format!("root.svc{i}"),
		format!("svc{i}.eu.us.created"),
		format!("other{i}.eu.created"),
	]
}

fn run_threads(settings: MatcherSettings) -> Arc<PatternCache> {
	let cache = Arc::new(PatternCache::new(settings));
	let patterns = patterns();

	thread::scope(|scope| {
		for worker in 0 .. THREADS {
			let topic = Topic::new(Arc::clone(&cache));
			let patterns = &patterns;
			scope.spawn(move || {
				// Each worker walks the patterns from a different offset
				for n in 0 .. PATTERNS {
					let i = (n + worker) % PATTERNS;
					let pattern = &patterns[i];
					let reference =
						CompiledRule::compile(pattern.as_str(), settings.engine);
					let binding = QueueBinding(pattern.clone());
					for key in keys(i) {
						assert_eq!(
							topic.matches(&Publish(key.clone()), &binding),
							reference.is_match(&key),
							"pattern '{pattern}' vs key '{key}'"
						);
					}
				}
			});
		}
	});
	cache
}

#[test]
fn concurrent_first_misses_compile_once() {
	for engine in [RuleEngine::Segments, RuleEngine::Regex] {
		let cache =
			run_threads(MatcherSettings::default().with_engine(engine));
		assert_eq!(cache.len(), PATTERNS);
		assert_eq!(cache.stats().compilations, PATTERNS as u64);
	}
}

#[test]
fn concurrent_matching_with_bounded_cache() {
	let settings = MatcherSettings::bounded(8).expect("Capacity is non-zero");
	let cache = run_threads(settings);
	assert_eq!(cache.len(), 8);
	assert!(cache.stats().evictions > 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn matching_from_runtime_tasks() {
	let topic = Topic::default();
	let mut tasks = Vec::new();
	for worker in 0 .. 32usize {
		let topic = topic.clone();
		tasks.push(tokio::spawn(async move {
			let binding = QueueBinding(format!("tenant{}.#", worker % 4));
			let hit = Publish(format!("tenant{}.orders.created", worker % 4));
			let miss = Publish(format!("tenant{}x.orders", worker % 4));
			(topic.matches(&hit, &binding), topic.matches(&miss, &binding))
		}));
	}
	for task in tasks {
		assert_eq!(task.await.expect("Task should not panic"), (true, false));
	}
	assert_eq!(topic.cache().len(), 4);
	assert_eq!(topic.cache().stats().compilations, 4);
}
