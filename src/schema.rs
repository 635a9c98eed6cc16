//! JSON Schema for the HyperCat wire shape.
//!
//! The bundled schema (`schema/hypercat.schema.json`) checks structure only:
//! required `items`/`item-metadata` arrays, `href` on every item, and string
//! `rel`/`val` pairs. The description requirement is left to the codec so it
//! keeps reporting `MissingDescription`. Callers can swap in their own schema
//! with [`CatalogueSchema::load`].

use crate::error::{CatalogueError, Result};
use anyhow::Context;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;
use std::sync::OnceLock;

const BUNDLED_SCHEMA: &str = include_str!("../schema/hypercat.schema.json");

/// A compiled catalogue schema.
pub struct CatalogueSchema {
    compiled: JSONSchema,
}

impl CatalogueSchema {
    /// Compile the schema shipped with the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value = serde_json::from_str(BUNDLED_SCHEMA).map_err(|err| {
            CatalogueError::SchemaViolation(format!("bundled schema is not valid JSON: {err}"))
        })?;
        Self::compile(&raw)
    }

    /// The bundled schema, compiled once per process.
    pub fn shared() -> Result<&'static Self> {
        static SHARED: OnceLock<std::result::Result<CatalogueSchema, String>> = OnceLock::new();
        let compiled = SHARED.get_or_init(|| {
            Self::bundled().map_err(|err| match err {
                CatalogueError::SchemaViolation(message) => message,
                other => other.to_string(),
            })
        });
        match compiled {
            Ok(schema) => Ok(schema),
            Err(message) => Err(CatalogueError::SchemaViolation(message.clone())),
        }
    }

    /// Load and compile a schema from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw).with_context(|| format!("compiling schema {}", path.display()))
    }

    fn compile(raw: &Value) -> Result<Self> {
        let compiled = JSONSchema::compile(raw).map_err(|err| {
            CatalogueError::SchemaViolation(format!("schema does not compile: {err}"))
        })?;
        Ok(Self { compiled })
    }

    /// Check a parsed document, collecting every violation into one error.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(CatalogueError::SchemaViolation(details));
        }
        Ok(())
    }
}
