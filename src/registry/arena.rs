//! Identifier-indexed lookup of constructed individuals.
//!
//! Replaces a back-pointer from defining records to their individuals:
//! the individual pass fills the arena, the family pass reads it.

use std::collections::HashMap;

/// Map from cross-reference identifier to an index into the parsed
/// individual list.
#[derive(Debug, Clone, Default)]
pub struct IndividualArena {
    indices: HashMap<String, usize>,
}

impl IndividualArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructed individual by its identifier.
    pub fn insert(&mut self, id: impl Into<String>, index: usize) {
        self.indices.insert(id.into(), index);
    }

    /// Index of the individual defined by `id`, when it has been built.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.indices.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut arena = IndividualArena::new();
        arena.insert("@I1@", 0);
        arena.insert("@I2@", 1);

        assert_eq!(arena.get("@I1@"), Some(0));
        assert_eq!(arena.get("@I2@"), Some(1));
        assert_eq!(arena.get("@F1@"), None);
        assert_eq!(arena.len(), 2);
    }
}
