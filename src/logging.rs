use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Installs the fmt subscriber once. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    INIT.call_once(|| {
        if !tracing::dispatcher::has_been_set() {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .init();
        }
    });
}
