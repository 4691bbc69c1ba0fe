//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for every actor and client built on this
//! crate. The actor loop logs lifecycle events and each operation with structured fields
//! (`entity_type`, `id`, `size`), and `ActorClient` methods open an instrumented span per call.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle + mutations
//! RUST_LOG=debug cargo run     # full payloads and list queries
//! RUST_LOG=resource_actor=debug,info cargo run
//! ```
//!
//! With `RUST_LOG=info` a create/delete round trip looks like:
//!
//! ```text
//! INFO Actor started entity_type="Task"
//! INFO Created entity_type="Task" id=1 size=1
//! INFO Deleted entity_type="Task" id=1 size=0
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Uses `RUST_LOG` when present and falls back to [`DEFAULT_FILTER`]. The compact format hides
/// module paths; actors identify themselves through the `entity_type` field instead.
/// Calling this twice is harmless: the second installation attempt is ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
