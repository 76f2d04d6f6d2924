//! Tracing setup for the driver.

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Install the global subscriber when `RUST_LOG` is set.
///
/// Output goes to stderr as an indented span tree, e.g.
/// `RUST_LOG=paren_lexer=trace paren lex file.lisp` shows every state
/// transition nested under the `run` span. Without `RUST_LOG` nothing is
/// installed and all tracing macros stay disabled.
pub fn init() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let filter = EnvFilter::from_default_env();
    let layer = HierarchicalLayer::new(2).with_targets(true);
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
