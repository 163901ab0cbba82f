//! Component collection core types.
//!
//! A schema closes the universe of component ids and fixes the value
//! type of each one. A [`ComponentCollection`] pairs an archetype table
//! (id -> present?) with a state table (id -> value) and only ever
//! changes by producing a new collection.

mod archetype;
mod collection;
mod collection_error;
mod macros;
mod schema;

pub use archetype::{Archetype, ArchetypeId};
pub use collection::ComponentCollection;
pub use collection_error::CollectionError;
pub use schema::{ComponentKey, Schema};
