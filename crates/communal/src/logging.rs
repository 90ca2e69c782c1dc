use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// Stdout carries the report and the preview, so every log line goes to
/// stderr. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("communal={level},communal_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!("communal logging initialized (level={level})");
    Ok(())
}
