use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tracing goes to stderr; stdout belongs to the extraction diagnostics.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orgscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
