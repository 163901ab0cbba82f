//! Facet Core
//!
//! Immutable component collections for an ECS-style state model:
//! - Closed, statically typed component schemas
//! - Archetype/state tables that are always updated together
//! - Archetype signatures for grouping collections by shape

pub mod ecs;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
