//! # System Lifecycle
//!
//! Starting, wiring and stopping the resource actors.
//!
//! [`ApiSystem::new`] creates one actor per resource kind, spawns each on its own Tokio task
//! and keeps the clients. The actors have no dependencies on each other, so every one of them
//! runs with `Context = ()`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests drain
//! 3. **Await completion** - [`ApiSystem::shutdown`] joins every actor task
//!
//! Clones of the clients handed to the HTTP router keep the actors alive until the server
//! itself has stopped, so shut the server down first.

pub mod api_system;
pub mod seed;

pub use api_system::*;
pub use seed::*;
