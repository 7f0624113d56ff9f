//! Resets the storefront database and seeds the demo tenant.
//!
//! Run with:
//! ```
//! cargo run -p demo-data --bin seed
//! ```
//!
//! Failures are logged and the process still exits normally; the pool is
//! closed either way.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    demo_data::run_from_env().await;
}
