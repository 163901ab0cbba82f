// schema.rs - Closed component universes
//
// Component ids come from a fixed, caller-declared set. Each id has one
// value type, enforced through the `State` sum type and `ComponentKey`.

use std::fmt::Debug;
use std::hash::Hash;

/// A closed universe of component ids and the values they carry.
///
/// Usually generated with [`define_schema!`](crate::define_schema) rather
/// than implemented by hand.
pub trait Schema: 'static {
    /// Component identifier. Ordered so archetype tables iterate deterministically.
    type Id: Copy + Ord + Hash + Debug + 'static;

    /// Tagged value with exactly one variant per id.
    type State: Clone + Debug + PartialEq;

    /// Every id of the universe, in declaration order.
    const ALL: &'static [Self::Id];

    /// The id a state belongs to.
    fn id_of(state: &Self::State) -> Self::Id;

    /// Human-readable name for debugging.
    fn name_of(id: Self::Id) -> &'static str;
}

/// Statically typed handle for a single component id of schema `S`.
///
/// Binds an id to its value type so callers can read and write values
/// without matching on `S::State` themselves.
pub trait ComponentKey<S: Schema> {
    /// Value type stored for this id.
    type Value;

    /// The id this key stands for.
    const ID: S::Id;

    fn into_state(value: Self::Value) -> S::State;

    /// Returns `None` if `state` belongs to a different id.
    fn from_state(state: &S::State) -> Option<&Self::Value>;
}
