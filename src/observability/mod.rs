pub mod metrics;

use tracing_subscriber::EnvFilter;

/// Subscriber setup for host applications; safe to call more than once
/// (later calls lose and are ignored).
pub fn init_tracing(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .compact()
        .try_init();
}
