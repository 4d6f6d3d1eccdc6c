//! Tracing setup
//!
//! Diagnostics go to stderr so they never interleave with the prompts and
//! tables on stdout. Quiet by default; set `RUST_LOG` (e.g.
//! `RUST_LOG=carpool=debug`) to see more.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "carpool=warn";

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // a subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("tracing initialized twice without panicking");
    }
}
