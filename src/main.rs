//! randvar: an interactive lesson on random variables and sample spaces,
//! with a dice simulator and a uniform spinner.
//!
//! Run with:  `RUST_LOG=debug randvar`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("randvar v{} starting", env!("CARGO_PKG_VERSION"));

    randvar_desktop::run().map_err(Into::into)
}
