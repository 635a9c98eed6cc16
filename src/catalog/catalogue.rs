//! The catalogue document root.
//!
//! A catalogue owns its items in insertion order and guarantees that no two of
//! them share an href. Mutations either fully apply or leave the catalogue as
//! it was. Nothing here is internally synchronized; hosts sharing one
//! catalogue between threads should guard it with a single lock.

use crate::catalog::codec::{self, CodecOptions};
use crate::catalog::item::Item;
use crate::catalog::relation::{Relation, RelationStore};
use crate::error::{CatalogueError, Entity, Result};
use crate::rels::DESCRIPTION_REL;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalogue {
    items: Vec<Item>,
    description: String,
    relations: RelationStore,
}

impl Catalogue {
    /// Create an empty catalogue. The description must be non-empty.
    pub fn new(description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        if description.is_empty() {
            return Err(CatalogueError::EmptyDescription {
                entity: Entity::Catalogue,
            });
        }
        Ok(Self {
            items: Vec::new(),
            description,
            relations: RelationStore::new(),
        })
    }

    pub(crate) fn from_parts(items: Vec<Item>, description: String, relations: RelationStore) -> Self {
        Self {
            items,
            description,
            relations,
        }
    }

    /// Decode a catalogue document with the default codec options.
    pub fn parse(input: &str) -> Result<Self> {
        codec::decode(input)
    }

    /// Decode with explicit options (description policy, schema checks).
    pub fn parse_with(input: &str, options: &CodecOptions) -> Result<Self> {
        codec::decode_with(input, options)
    }

    pub fn to_json(&self) -> Result<String> {
        codec::encode(self)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        codec::encode_pretty(self)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        if description.is_empty() {
            return Err(CatalogueError::EmptyDescription {
                entity: Entity::Catalogue,
            });
        }
        self.description = description;
        Ok(())
    }

    /// Append a relation; duplicate keys are allowed.
    ///
    /// [`DESCRIPTION_REL`] never enters the store: it replaces the
    /// description instead, and fails only when `val` is empty.
    pub fn add_rel(&mut self, rel: impl Into<String>, val: impl Into<String>) -> Result<()> {
        let rel = rel.into();
        if rel == DESCRIPTION_REL {
            return self.set_description(val);
        }
        self.relations.add(rel, val);
        Ok(())
    }

    /// Overwrite every relation keyed by `rel`. No-op when none match.
    ///
    /// [`DESCRIPTION_REL`] replaces the description, as with `add_rel`.
    pub fn replace_rel(&mut self, rel: &str, val: &str) -> Result<()> {
        if rel == DESCRIPTION_REL {
            return self.set_description(val);
        }
        self.relations.replace(rel, val);
        Ok(())
    }

    /// Values attached under `rel`, in order.
    pub fn vals(&self, rel: &str) -> Vec<String> {
        self.relations.values_for(rel)
    }

    /// Every relation key, duplicates included.
    pub fn rels(&self) -> Vec<String> {
        self.relations.all_keys()
    }

    pub fn relations(&self) -> &RelationStore {
        &self.relations
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by exact, case-sensitive href.
    pub fn item(&self, href: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.href() == href)
    }

    /// Append `item`, rejecting an href that is already present.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if self.item(item.href()).is_some() {
            return Err(CatalogueError::DuplicateHref {
                href: item.href().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Swap in `item` for the existing item with the same href, keeping its
    /// position.
    pub fn replace_item(&mut self, item: Item) -> Result<()> {
        match self.items.iter_mut().find(|old| old.href() == item.href()) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(CatalogueError::ItemNotFound {
                href: item.href().to_string(),
            }),
        }
    }

    pub(crate) fn metadata(&self) -> &[Relation] {
        self.relations.as_slice()
    }
}

impl FromStr for Catalogue {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        Catalogue::parse(s)
    }
}
