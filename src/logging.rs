/// Console logging setup
///
/// Filter defaults to `image_search=info`; set `RUST_LOG` for finer control,
/// e.g. `RUST_LOG=image_search=debug` to see every fetch and stale response.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "image_search=info";

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
