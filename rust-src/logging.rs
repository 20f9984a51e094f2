//! Logging setup.
//!
//! Filter directives come from `WDASH_LOG` and default to `warn`, so a plain
//! run only reports recovered problems such as a corrupted settings record.
//!
//! ```bash
//! WDASH_LOG=debug wdash list
//! WDASH_LOG=widget_dash::storage=trace,warn wdash show
//! ```

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "WDASH_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";


/// Install the global subscriber, writing to stderr.
///
/// A second call leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
