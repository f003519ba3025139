//! tracing subscriber on stderr. `PRIMELENS_LOG` takes an env-filter
//! directive (e.g. `primelens=debug`); otherwise `--debug` picks the level.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PRIMELENS_LOG";

pub fn init(debug: bool) {
    let fallback = if debug { "primelens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
