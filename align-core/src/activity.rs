//! Opaque activity identifiers and the name-to-id interner.

use std::collections::HashMap;
use std::fmt;

/// An opaque, dense, non-negative integer identifying an activity.
///
/// Two activities are equal iff their ids are equal. `ActivityId` intentionally does not
/// derive `Ord`: the engine imposes no ordering relation on activities, only equality and
/// hashing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityId(u32);

impl ActivityId {
    /// Builds an `ActivityId` from a raw `u32`.
    ///
    /// Collaborators that allocate their own dense ids (e.g. a parser assigning ids in
    /// first-seen order) can use this directly; the engine itself never constructs one from
    /// a bare integer, only through [`Interner::intern`].
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the underlying raw `u32`.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityId({})", self.0)
    }
}

/// A bidirectional `String <-> ActivityId` table.
///
/// The engine never touches this type: it is a convenience for collaborators (notably
/// `align-cli`'s notation parser) that need to go from human-readable activity names to
/// dense ids and back, so printed results and diagnostics can name activities instead of
/// raw integers.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    by_name: HashMap<String, ActivityId>,
    by_id: Vec<String>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, allocating a fresh one if `name` hasn't been seen before.
    pub fn intern(&mut self, name: &str) -> ActivityId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ActivityId::from_raw(self.by_id.len() as u32);
        self.by_name.insert(name.to_owned(), id);
        self.by_id.push(name.to_owned());
        id
    }

    /// Returns the id already assigned to `name`, if any, without allocating one.
    pub fn get(&self, name: &str) -> Option<ActivityId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name an id was interned with.
    ///
    /// Panics if `id` was never produced by this interner; the engine never calls this, only
    /// name-facing collaborators that already hold ids they obtained from `intern`.
    pub fn resolve(&self, id: ActivityId) -> &str {
        &self.by_id[id.raw() as usize]
    }

    /// Returns the number of distinct activities interned so far.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if no activity has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable_and_reversible() {
        let mut interner = Interner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let a_again = interner.intern("a");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), "a");
        assert_eq!(interner.resolve(b), "b");
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn get_does_not_allocate() {
        let mut interner = Interner::new();
        assert_eq!(interner.get("a"), None);
        let a = interner.intern("a");
        assert_eq!(interner.get("a"), Some(a));
        assert_eq!(interner.len(), 1);
    }
}
