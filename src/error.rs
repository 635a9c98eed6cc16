use std::fmt;
use thiserror::Error;

/// Which entity of a document an error refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Catalogue,
    Item(String),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Catalogue => f.write_str("catalogue"),
            Entity::Item(href) => write!(f, "item \"{href}\""),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("an item with href \"{href}\" is already defined within the catalogue")]
    DuplicateHref { href: String },

    #[error("an item with href \"{href}\" was not found within the catalogue")]
    ItemNotFound { href: String },

    #[error("{entity} is missing the mandatory \"{rel}\" relation", rel = crate::rels::DESCRIPTION_REL)]
    MissingDescription { entity: Entity },

    #[error("{entity} carries more than one \"{rel}\" relation", rel = crate::rels::DESCRIPTION_REL)]
    DuplicateDescription { entity: Entity },

    #[error("{entity} description must not be empty")]
    EmptyDescription { entity: Entity },

    #[error("malformed catalogue document: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("failed to encode catalogue: {0}")]
    Encode(serde_json::Error),

    #[error("catalogue failed schema validation:\n{0}")]
    SchemaViolation(String),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
