use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout stays reserved for documents and tables.
pub(crate) fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
