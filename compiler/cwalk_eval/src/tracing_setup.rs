//! Opt-in diagnostic logging.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only ever installs once per
/// process. Call spans nest by interpreted call, so
/// `RUST_LOG=cwalk_eval=debug` prints the program's call tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            // A subscriber installed by the embedding process wins.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tree)
                .try_init();
        }
    });
}
