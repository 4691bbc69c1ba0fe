//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each wrapper only supplies the inner client and the error mapping; the CRUD operations
//! come from [`ActorClient`](resource_actor::ActorClient).

pub mod product_client;
pub mod task_client;
pub mod user_client;

pub use product_client::*;
pub use task_client::*;
pub use user_client::*;
