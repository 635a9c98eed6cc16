//! Ordered relation metadata shared by catalogues and items.
//!
//! A store is a plain sequence of `(rel, val)` pairs. Keys may repeat (HyperCat
//! allows, for example, several content types on one resource), so lookups are
//! linear scans and insertion order is what gets serialized.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One `rel`/`val` metadata pair as it appears in `item-metadata`.
pub struct Relation {
    pub rel: String,
    pub val: String,
}

impl Relation {
    pub fn new(rel: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            val: val.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationStore {
    relations: Vec<Relation>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relation. Existing entries with the same key are kept.
    pub fn add(&mut self, rel: impl Into<String>, val: impl Into<String>) {
        self.relations.push(Relation::new(rel, val));
    }

    /// Overwrite the value of every entry keyed by `rel`.
    ///
    /// Missing keys are not an error; the store is left untouched.
    pub fn replace(&mut self, rel: &str, val: &str) {
        for relation in self.relations.iter_mut().filter(|r| r.rel == rel) {
            relation.val = val.to_string();
        }
    }

    /// Values stored under `rel`, in store order.
    pub fn values_for(&self, rel: &str) -> Vec<String> {
        self.relations
            .iter()
            .filter(|r| r.rel == rel)
            .map(|r| r.val.clone())
            .collect()
    }

    /// Every key in store order, duplicates included.
    pub fn all_keys(&self) -> Vec<String> {
        self.relations.iter().map(|r| r.rel.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Relation] {
        &self.relations
    }
}

impl From<Vec<Relation>> for RelationStore {
    fn from(relations: Vec<Relation>) -> Self {
        Self { relations }
    }
}

impl FromIterator<Relation> for RelationStore {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        Self {
            relations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RelationStore {
    type Item = &'a Relation;
    type IntoIter = std::slice::Iter<'a, Relation>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.iter()
    }
}
