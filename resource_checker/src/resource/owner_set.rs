/// Insertion-ordered set of owner identities.
///
/// Membership is checked through an `FxHashSet`, iteration follows first
/// insertion. Order only matters for presentation.

use std::hash::Hash;
use rustc_hash::FxHashSet;

/// Ordered set with O(1) membership
#[derive(Debug, Clone)]
pub struct OwnerSet<T> {
    order: Vec<T>,
    members: FxHashSet<T>,
}

impl<T> Default for OwnerSet<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            members: FxHashSet::default(),
        }
    }
}

impl<T: Copy + Eq + Hash> OwnerSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an owner. Returns false if it was already present.
    pub fn insert(&mut self, owner: T) -> bool {
        if self.members.insert(owner) {
            self.order.push(owner);
            true
        } else {
            false
        }
    }

    /// Insert every owner from an iterator
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, owners: I) {
        for owner in owners {
            self.insert(owner);
        }
    }

    pub fn contains(&self, owner: &T) -> bool {
        self.members.contains(owner)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.order.iter().copied()
    }

    /// Keep only owners matching the predicate. Returns the number removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) -> usize {
        let before = self.order.len();
        let members = &mut self.members;
        self.order.retain(|owner| {
            if keep(owner) {
                true
            } else {
                members.remove(owner);
                false
            }
        });
        before - self.order.len()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

#[cfg(test)]
#[path = "owner_set_tests.rs"]
mod tests;
