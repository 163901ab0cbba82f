// archetype.rs - Archetype signatures
//
// An archetype is the set of component ids present on a collection.
// Collections with the same present ids share the same signature.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub type ArchetypeId = u64;

/// The set of component ids present on a collection.
///
/// Ids are kept sorted and deduplicated so the signature does not depend
/// on the order in which components were attached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Archetype<I> {
    id: ArchetypeId,
    components: Vec<I>,
}

impl<I: Ord + Hash> Archetype<I> {
    /// Create a signature from a list of component ids.
    ///
    /// The input will be sorted and deduplicated.
    pub fn from_components(mut comps: Vec<I>) -> Self {
        comps.sort_unstable();
        comps.dedup();
        let id = hash_components(&comps);
        Self {
            id,
            components: comps,
        }
    }

    /// Check if this archetype contains a specific component.
    pub fn contains(&self, id: &I) -> bool {
        self.components.binary_search(id).is_ok()
    }
}

impl<I> Archetype<I> {
    /// Hash of the sorted id list.
    pub fn id(&self) -> ArchetypeId {
        self.id
    }

    pub fn components(&self) -> &[I] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Compute a hash for a sorted list of component ids.
fn hash_components<I: Hash>(comps: &[I]) -> ArchetypeId {
    let mut hasher = DefaultHasher::new();
    comps.len().hash(&mut hasher);
    for c in comps {
        c.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent() {
        let a = Archetype::from_components(vec![3u32, 1, 2]);
        let b = Archetype::from_components(vec![2u32, 3, 1]);
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.components(), &[1, 2, 3]);
    }

    #[test]
    fn test_dedup() {
        let a = Archetype::from_components(vec![5u32, 5, 1]);
        assert_eq!(a.components(), &[1, 5]);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_contains() {
        let a = Archetype::from_components(vec![10u32, 20]);
        assert!(a.contains(&10));
        assert!(!a.contains(&15));
    }

    #[test]
    fn test_distinct_sets_distinct_ids() {
        let a = Archetype::from_components(vec![1u32, 2]);
        let b = Archetype::from_components(vec![1u32]);
        let empty = Archetype::<u32>::from_components(Vec::new());
        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), empty.id());
        assert!(empty.is_empty());
    }
}
