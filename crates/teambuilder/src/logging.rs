//! Tracing setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g.
/// `TEAMBUILDER_LOG=teambuilder=debug,team_engine=debug`
pub const LOG_ENV: &str = "TEAMBUILDER_LOG";

/// Install the global subscriber. Later calls are no-ops.
///
/// `verbose` switches the fallback filter to debug for both the CLI and the
/// engine; an explicit `TEAMBUILDER_LOG` always wins.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "teambuilder=debug,team_engine=debug"
        } else {
            "teambuilder=info"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
