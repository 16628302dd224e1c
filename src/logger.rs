//! Log output setup for the binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr logger
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug or warn level
/// for this crate.
pub fn init(verbose: bool) {
    let default = if verbose { "lunch_orders=debug,info" } else { "lunch_orders=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
