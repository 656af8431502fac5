// Re-export helpers so tests can `use helpers::*;`
pub mod fixtures;

pub use fixtures::{builder_with, rev_avgs, series};

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
