//! Tracing setup for the `grass` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber writing to stderr.
///
/// Does nothing unless `RUST_LOG` is set. With `GRASS_LOG_TREE=1` the events
/// are printed as an indented span tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if tree_requested() {
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
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn tree_requested() -> bool {
    std::env::var("GRASS_LOG_TREE").is_ok_and(|value| value == "1")
}
