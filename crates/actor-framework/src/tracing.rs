//! # Observability & Tracing
//!
//! Every actor logs its lifecycle and each request with structured fields
//! (`entity_type`, `id`, `size`), and the domain clients open a span per call
//! through `#[instrument]`. [`setup_tracing`] installs the subscriber that
//! prints them.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per stored change
//! RUST_LOG=debug cargo run    # request payloads and lookups too
//! RUST_LOG=storefront=debug,actor_framework=info cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Module paths are hidden; the actors tag every event with `entity_type`
/// instead. Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
