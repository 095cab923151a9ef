use tracing_subscriber::EnvFilter;

// JSON lines without ansi or timestamps, CloudWatch stamps each line itself
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
