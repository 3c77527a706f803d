//! Tracing subscriber setup for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter directives, in `EnvFilter` syntax (e.g. `casefn_eval=trace`).
pub const LOG_ENV: &str = "CASEFN_LOG";

/// Set to `1` for indented, span-nested output.
pub const LOG_TREE_ENV: &str = "CASEFN_LOG_TREE";

/// Initialize tracing from `CASEFN_LOG`.
///
/// Does nothing when the variable is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var(LOG_ENV) else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
