// collection.rs - Immutable archetype/state pair for one entity
//
// Every operation borrows the input and returns a fresh collection.
// Values are shared between versions behind `Arc` and never mutated,
// so older versions stay valid and unaffected.

use crate::ecs::{Archetype, CollectionError, ComponentKey, Schema};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Which components are attached to an entity, and their values.
///
/// Invariant: for every id `k`, `archetype[k] == true` if and only if
/// `states` holds a value for `k`.
pub struct ComponentCollection<S: Schema> {
    /// Presence flag for every id of the universe. Removed ids lose their entry.
    archetype: BTreeMap<S::Id, bool>,
    /// Values of the present components.
    states: BTreeMap<S::Id, Arc<S::State>>,
}

impl<S: Schema> ComponentCollection<S> {
    /// Create a collection over `universe` with the given initial states.
    ///
    /// Ids of the universe without an initial state start absent. Initial
    /// states whose id is not in the universe are dropped with a warning;
    /// use [`try_create`](Self::try_create) to reject them instead. If
    /// several initial states share an id, the last one wins.
    pub fn create<U, T>(universe: U, initial: T) -> Self
    where
        U: IntoIterator<Item = S::Id>,
        T: IntoIterator<Item = S::State>,
    {
        let mut archetype: BTreeMap<S::Id, bool> =
            universe.into_iter().map(|id| (id, false)).collect();
        let mut states = BTreeMap::new();

        for state in initial {
            let id = S::id_of(&state);
            match archetype.get_mut(&id) {
                Some(present) => {
                    *present = true;
                    states.insert(id, Arc::new(state));
                }
                None => {
                    tracing::warn!(
                        component = S::name_of(id),
                        "initial state outside the universe ignored"
                    );
                }
            }
        }

        let collection = Self { archetype, states };
        collection.trace_version("create");
        collection
    }

    /// Like [`create`](Self::create), but fails on an initial state whose
    /// id is not in `universe`.
    pub fn try_create<U, T>(universe: U, initial: T) -> Result<Self, CollectionError<S::Id>>
    where
        U: IntoIterator<Item = S::Id>,
        T: IntoIterator<Item = S::State>,
    {
        let archetype: BTreeMap<S::Id, bool> =
            universe.into_iter().map(|id| (id, false)).collect();
        let initial: Vec<S::State> = initial.into_iter().collect();

        if let Some(state) = initial
            .iter()
            .find(|state| !archetype.contains_key(&S::id_of(state)))
        {
            return Err(CollectionError::UnknownComponent {
                id: S::id_of(state),
            });
        }

        Ok(Self::create(archetype.into_keys(), initial))
    }

    /// Create a collection over the schema's full universe.
    pub fn from_schema<T>(initial: T) -> Self
    where
        T: IntoIterator<Item = S::State>,
    {
        Self::create(S::ALL.iter().copied(), initial)
    }

    /// Whether `id` is present. Ids outside the universe are simply absent.
    #[inline]
    pub fn has_component(&self, id: S::Id) -> bool {
        self.archetype.get(&id).copied().unwrap_or(false)
    }

    /// Whether `id` has an archetype entry, present or not.
    ///
    /// Ids removed with [`remove`](Self::remove) lose their entry.
    #[inline]
    pub fn is_known(&self, id: S::Id) -> bool {
        self.archetype.contains_key(&id)
    }

    /// Return a new collection with `state` attached.
    ///
    /// Fails with [`CollectionError::DuplicateComponent`] if its id is
    /// already present.
    pub fn add(&self, state: S::State) -> Result<Self, CollectionError<S::Id>> {
        let id = S::id_of(&state);
        if self.has_component(id) {
            return Err(CollectionError::DuplicateComponent { id });
        }

        let mut next = self.clone();
        next.archetype.insert(id, true);
        next.states.insert(id, Arc::new(state));
        next.trace_version("add");
        Ok(next)
    }

    /// Return a new collection with `id` deleted from both tables.
    ///
    /// Fails with [`CollectionError::MissingComponent`] if `id` is not present.
    pub fn remove(&self, id: S::Id) -> Result<Self, CollectionError<S::Id>> {
        if !self.has_component(id) {
            return Err(CollectionError::MissingComponent { id });
        }

        let mut next = self.clone();
        next.archetype.remove(&id);
        next.states.remove(&id);
        next.trace_version("remove");
        Ok(next)
    }

    /// Return a new collection with `state` stored, whether or not its id
    /// was present before.
    pub fn set(&self, state: S::State) -> Self {
        let id = S::id_of(&state);
        let mut next = self.clone();
        next.archetype.insert(id, true);
        next.states.insert(id, Arc::new(state));
        next.trace_version("set");
        next
    }

    /// Current state for `id`, if present.
    #[inline]
    pub fn get(&self, id: S::Id) -> Option<&S::State> {
        self.states.get(&id).map(|state| state.as_ref())
    }

    /// Typed value of component `K`, if present.
    pub fn component<K: ComponentKey<S>>(&self) -> Option<&K::Value> {
        self.get(K::ID).and_then(K::from_state)
    }

    /// Typed [`add`](Self::add).
    pub fn add_component<K: ComponentKey<S>>(
        &self,
        value: K::Value,
    ) -> Result<Self, CollectionError<S::Id>> {
        self.add(K::into_state(value))
    }

    /// Typed [`set`](Self::set).
    pub fn set_component<K: ComponentKey<S>>(&self, value: K::Value) -> Self {
        self.set(K::into_state(value))
    }

    /// Typed [`remove`](Self::remove).
    pub fn remove_component<K: ComponentKey<S>>(&self) -> Result<Self, CollectionError<S::Id>> {
        self.remove(K::ID)
    }

    /// Archetype table in id order: every known id with its presence flag.
    pub fn archetype(&self) -> impl Iterator<Item = (S::Id, bool)> + '_ {
        self.archetype.iter().map(|(&id, &present)| (id, present))
    }

    /// Present components and their states, in id order.
    pub fn states(&self) -> impl Iterator<Item = (S::Id, &S::State)> + '_ {
        self.states.iter().map(|(&id, state)| (id, state.as_ref()))
    }

    /// Number of present components.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Signature of the present component set.
    pub fn signature(&self) -> Archetype<S::Id> {
        Archetype::from_components(self.states.keys().copied().collect())
    }

    fn trace_version(&self, op: &'static str) {
        tracing::trace!(
            op,
            present = self.states.len(),
            known = self.archetype.len(),
            "collection version produced"
        );
    }
}

impl<S: Schema> Clone for ComponentCollection<S> {
    fn clone(&self) -> Self {
        Self {
            archetype: self.archetype.clone(),
            states: self.states.clone(),
        }
    }
}

impl<S: Schema> PartialEq for ComponentCollection<S> {
    fn eq(&self, other: &Self) -> bool {
        self.archetype == other.archetype && self.states == other.states
    }
}

impl<S: Schema> fmt::Debug for ComponentCollection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCollection")
            .field("archetype", &self.archetype)
            .field("states", &self.states)
            .finish()
    }
}
