use revmerge::MergerBuilder;

/// Builder preloaded with named mock fixtures, labeled by name.
#[must_use]
pub fn builder_with(names: &[&str]) -> MergerBuilder {
    names.iter().fold(revmerge::Merger::builder(), |b, name| {
        b.with_series(*name, revmerge_mock::fixture(name))
    })
}

/// Install a stderr subscriber when `RUST_LOG` is set.
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}
