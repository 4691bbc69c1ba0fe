//! Pure data structures (entities, DTOs, filters, sort fields) for each resource kind.
//!
//! The [`ActorEntity`](resource_actor::ActorEntity) implementations live next to each actor
//! (`user_actor::entity`, ...); this module only holds the shapes.

pub mod product;
pub mod task;
pub mod user;

pub use product::*;
pub use task::*;
pub use user::*;

/// Declares a type-safe numeric identifier.
///
/// Identifiers serialize as bare numbers, display as bare numbers (so messages read
/// "Task with id 7 not found") and parse from path segments via `FromStr`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

pub(crate) use resource_id;
