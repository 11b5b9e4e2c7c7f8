use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global JSON subscriber on stderr.
///
/// Quiet mode turns every event off so stdout/stderr carry only the CLI's
/// own output. Otherwise `RUST_LOG` is honored, defaulting to `info`.
pub fn init_logging(quiet: bool) {
    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter(quiet))
        .with(layer)
        .try_init();
}

fn env_filter(quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
