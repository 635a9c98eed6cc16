use crate::catalog::relation::{Relation, RelationStore};
use crate::error::{CatalogueError, Entity, Result};
use crate::rels::DESCRIPTION_REL;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A catalogue member: an href, its description, and the remaining metadata.
///
/// The description is held apart from `relations`; the codec turns it back
/// into a `hasDescription` relation on the wire.
pub struct Item {
    href: String,
    description: String,
    relations: RelationStore,
}

impl Item {
    /// Build an item with no metadata beyond its description.
    ///
    /// The href is not checked for format; uniqueness is the owning
    /// catalogue's concern. An empty description is rejected so that every
    /// item built here encodes to a decodable document.
    pub fn new(href: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let href = href.into();
        let description = description.into();
        if description.is_empty() {
            return Err(CatalogueError::EmptyDescription {
                entity: Entity::Item(href),
            });
        }
        Ok(Self {
            href,
            description,
            relations: RelationStore::new(),
        })
    }

    pub(crate) fn from_parts(href: String, description: String, relations: RelationStore) -> Self {
        Self {
            href,
            description,
            relations,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        if description.is_empty() {
            return Err(CatalogueError::EmptyDescription {
                entity: Entity::Item(self.href.clone()),
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

    pub fn values_for(&self, rel: &str) -> Vec<String> {
        self.relations.values_for(rel)
    }

    pub fn all_keys(&self) -> Vec<String> {
        self.relations.all_keys()
    }

    pub fn relations(&self) -> &RelationStore {
        &self.relations
    }

    pub(crate) fn metadata(&self) -> &[Relation] {
        self.relations.as_slice()
    }
}
