use tracing::level_filters::LevelFilter;

/// Installs the process-wide stderr subscriber. Stdout stays reserved for response bodies.
pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}
