use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber used by the binaries.
///
/// Level comes from `RUST_LOG`, defaulting to `warn` so stdout stays clean for
/// JSON and CSV output.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
