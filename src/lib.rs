//! HyperCat catalogue documents: an in-memory model plus a lossless JSON codec.
//!
//! Build a [`Catalogue`] and its [`Item`]s through the constructors and
//! mutators, then [`encode`] it; or [`decode`] text to get a catalogue back for
//! querying. Relation keys are opaque strings apart from the reserved
//! [`DESCRIPTION_REL`], which the model surfaces as a dedicated field.

pub mod catalog;
pub mod error;
pub mod rels;
pub mod schema;

pub use catalog::{
    Catalogue, CodecOptions, DescriptionPolicy, Item, Relation, RelationStore, decode,
    decode_with, encode, encode_pretty, load_catalogue_from_path,
};
pub use error::{CatalogueError, Entity, Result};
pub use rels::*;
pub use schema::CatalogueSchema;
