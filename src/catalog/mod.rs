//! HyperCat catalogue model.
//!
//! [`Catalogue`] is the document root and owns its [`Item`]s; both carry a
//! description plus an ordered [`RelationStore`]. The [`codec`] module maps the
//! model to and from the `items` / `item-metadata` JSON shape.

pub mod catalogue;
pub mod codec;
pub mod item;
pub mod relation;

pub use catalogue::Catalogue;
pub use codec::{CodecOptions, DescriptionPolicy, decode, decode_with, encode, encode_pretty};
pub use item::Item;
pub use relation::{Relation, RelationStore};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and decode a catalogue file, honouring the `HYPERCAT_*` environment
/// overrides of [`CodecOptions::from_env`].
pub fn load_catalogue_from_path(path: &Path) -> Result<Catalogue> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalogue {}", path.display()))?;
    Catalogue::parse_with(&data, &CodecOptions::from_env())
        .with_context(|| format!("parsing catalogue {}", path.display()))
}
