use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing based on environment or explicit configuration
///
/// Priority (first match wins):
/// 1. If `force_level` provided - use it
/// 2. If RUST_LOG_DISABLE=1 - disable tracing completely
/// 3. If RUST_LOG set - use environment configuration
/// 4. Otherwise - no tracing (silent)
///
/// # Examples
/// ```bash
/// # Show cache compilations and evictions
/// RUST_LOG=amq_routing_core=debug cargo run --example 001_topic_patterns
///
/// # Silent by default
/// cargo run --example 001_topic_patterns
/// ```
pub fn setup(force_level: Option<&str>) {
	load_env_files();

	if std::env::var("RUST_LOG_DISABLE").is_ok() {
		return;
	}

	let filter = if let Some(level) = force_level {
		tracing_subscriber::EnvFilter::new(level)
	} else if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| "info".into())
	} else {
		return;
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_thread_ids(true)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.init();
}

/// Loads `demos/.env`, then `demos/.env.local` when present.
fn load_env_files() {
	dotenv::from_filename("demos/.env").ok();
	if std::path::Path::new("demos/.env.local").exists() {
		dotenv::from_filename("demos/.env.local").ok();
	}
}
