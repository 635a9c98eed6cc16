//! JSON codec for HyperCat documents.
//!
//! In memory, each catalogue and item keeps its description in a dedicated
//! field. On the wire the description is just another entry of
//! `item-metadata`, keyed by [`DESCRIPTION_REL`]. The boundary is crossed by
//! two pure functions: [`split_description`] on decode and
//! [`inject_description`] on encode. Every other relation passes through
//! verbatim and in order.
//!
//! Decoding is all-or-nothing: any failure, in the catalogue or in any of its
//! items (including a repeated href), yields an error and no partially built
//! catalogue.

use crate::catalog::catalogue::Catalogue;
use crate::catalog::item::Item;
use crate::catalog::relation::{Relation, RelationStore};
use crate::error::{CatalogueError, Entity, Result};
use crate::rels::DESCRIPTION_REL;
use crate::schema::CatalogueSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::env;
use std::str::FromStr;
use tracing::{debug, warn};

const ENV_DESCRIPTION_POLICY: &str = "HYPERCAT_DESCRIPTION_POLICY";
const ENV_VALIDATE_SCHEMA: &str = "HYPERCAT_VALIDATE_SCHEMA";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How decode treats an entity carrying several description relations.
pub enum DescriptionPolicy {
    /// Keep the last one, as sequential assignment would.
    #[default]
    LastWins,
    /// Fail with [`CatalogueError::DuplicateDescription`].
    Reject,
}

impl DescriptionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionPolicy::LastWins => "last-wins",
            DescriptionPolicy::Reject => "reject",
        }
    }
}

impl FromStr for DescriptionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "last-wins" => Ok(DescriptionPolicy::LastWins),
            "reject" => Ok(DescriptionPolicy::Reject),
            other => Err(format!(
                "unknown description policy '{other}', expected last-wins or reject"
            )),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub description_policy: DescriptionPolicy,
    /// Check the raw document against the bundled wire schema before decoding.
    ///
    /// Shape errors then surface as [`CatalogueError::SchemaViolation`], with
    /// every violation listed, instead of serde's single `MalformedInput`.
    /// Text that is not JSON at all is still `MalformedInput`.
    pub validate_schema: bool,
}

impl CodecOptions {
    /// Reject duplicate descriptions and validate the wire shape.
    pub fn strict() -> Self {
        Self {
            description_policy: DescriptionPolicy::Reject,
            validate_schema: true,
        }
    }

    /// Defaults, overridden by `HYPERCAT_DESCRIPTION_POLICY` and
    /// `HYPERCAT_VALIDATE_SCHEMA` when they hold recognised values.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(raw) = env::var(ENV_DESCRIPTION_POLICY) {
            match raw.parse() {
                Ok(policy) => options.description_policy = policy,
                Err(message) => warn!("ignoring {ENV_DESCRIPTION_POLICY}: {message}"),
            }
        }
        if let Ok(raw) = env::var(ENV_VALIDATE_SCHEMA) {
            match parse_flag(&raw) {
                Some(enabled) => options.validate_schema = enabled,
                None => warn!(
                    "ignoring {ENV_VALIDATE_SCHEMA}: unknown value '{raw}', expected true or false"
                ),
            }
        }
        options
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

#[derive(Deserialize)]
struct WireCatalogue {
    items: Vec<WireItem>,
    #[serde(rename = "item-metadata")]
    metadata: Vec<Relation>,
}

#[derive(Deserialize)]
struct WireItem {
    href: String,
    #[serde(rename = "item-metadata")]
    metadata: Vec<Relation>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
/// Borrowed relation used on the encode path.
pub(crate) struct RelationRef<'a> {
    rel: &'a str,
    val: &'a str,
}

#[derive(Serialize)]
struct CatalogueOut<'a> {
    items: &'a [Item],
    #[serde(rename = "item-metadata")]
    metadata: Vec<RelationRef<'a>>,
}

#[derive(Serialize)]
struct ItemOut<'a> {
    href: &'a str,
    #[serde(rename = "item-metadata")]
    metadata: Vec<RelationRef<'a>>,
}

/// Lift the description out of a wire metadata array.
///
/// Returns the description and the remaining relations in their original
/// order. Fails when no non-empty description is present, or when the policy
/// is [`DescriptionPolicy::Reject`] and more than one is present.
pub(crate) fn split_description(
    metadata: Vec<Relation>,
    entity: Entity,
    policy: DescriptionPolicy,
) -> Result<(String, RelationStore)> {
    let mut description: Option<String> = None;
    let mut seen = 0usize;
    let mut relations = Vec::with_capacity(metadata.len());

    for relation in metadata {
        if relation.rel == DESCRIPTION_REL {
            seen += 1;
            description = Some(relation.val);
        } else {
            relations.push(relation);
        }
    }

    if seen > 1 {
        match policy {
            DescriptionPolicy::Reject => {
                return Err(CatalogueError::DuplicateDescription { entity });
            }
            DescriptionPolicy::LastWins => {
                warn!(%entity, count = seen, "multiple description relations; keeping the last");
            }
        }
    }

    match description {
        Some(description) if !description.is_empty() => {
            Ok((description, RelationStore::from(relations)))
        }
        _ => Err(CatalogueError::MissingDescription { entity }),
    }
}

/// Build the outgoing metadata array: the store verbatim, then the
/// description relation when the description is non-empty.
pub(crate) fn inject_description<'a>(
    relations: &'a [Relation],
    description: &'a str,
) -> Vec<RelationRef<'a>> {
    let mut metadata: Vec<RelationRef<'a>> = relations
        .iter()
        .map(|r| RelationRef {
            rel: &r.rel,
            val: &r.val,
        })
        .collect();
    if !description.is_empty() {
        metadata.push(RelationRef {
            rel: DESCRIPTION_REL,
            val: description,
        });
    }
    metadata
}

fn item_from_wire(wire: WireItem, policy: DescriptionPolicy) -> Result<Item> {
    let (description, relations) =
        split_description(wire.metadata, Entity::Item(wire.href.clone()), policy)?;
    Ok(Item::from_parts(wire.href, description, relations))
}

fn catalogue_from_wire(wire: WireCatalogue, policy: DescriptionPolicy) -> Result<Catalogue> {
    let (description, relations) = split_description(wire.metadata, Entity::Catalogue, policy)?;
    let mut catalogue =
        Catalogue::from_parts(Vec::with_capacity(wire.items.len()), description, relations);
    // Hrefs stay unique on the decode path too.
    for item in wire.items {
        catalogue.add_item(item_from_wire(item, policy)?)?;
    }
    Ok(catalogue)
}

/// Decode a catalogue using [`CodecOptions::default`].
pub fn decode(input: &str) -> Result<Catalogue> {
    decode_with(input, &CodecOptions::default())
}

pub fn decode_with(input: &str, options: &CodecOptions) -> Result<Catalogue> {
    let wire: WireCatalogue = if options.validate_schema {
        let value: Value = serde_json::from_str(input)?;
        CatalogueSchema::shared()?.validate(&value)?;
        serde_json::from_value(value)?
    } else {
        serde_json::from_str(input)?
    };
    let catalogue = catalogue_from_wire(wire, options.description_policy)?;
    debug!(
        items = catalogue.items().len(),
        relations = catalogue.relations().len(),
        policy = options.description_policy.as_str(),
        "decoded catalogue"
    );
    Ok(catalogue)
}

/// Encode a catalogue as compact JSON.
pub fn encode(catalogue: &Catalogue) -> Result<String> {
    let text = serde_json::to_string(catalogue).map_err(CatalogueError::Encode)?;
    debug!(items = catalogue.items().len(), bytes = text.len(), "encoded catalogue");
    Ok(text)
}

pub fn encode_pretty(catalogue: &Catalogue) -> Result<String> {
    serde_json::to_string_pretty(catalogue).map_err(CatalogueError::Encode)
}

impl Serialize for Catalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        CatalogueOut {
            items: self.items(),
            metadata: inject_description(self.metadata(), self.description()),
        }
        .serialize(serializer)
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ItemOut {
            href: self.href(),
            metadata: inject_description(self.metadata(), self.description()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Catalogue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = WireCatalogue::deserialize(deserializer)?;
        catalogue_from_wire(wire, DescriptionPolicy::default()).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = WireItem::deserialize(deserializer)?;
        item_from_wire(wire, DescriptionPolicy::default()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(rel: &str, val: &str) -> Relation {
        Relation::new(rel, val)
    }

    #[test]
    fn split_pulls_description_and_keeps_order() {
        let metadata = vec![
            rel("a", "1"),
            rel(DESCRIPTION_REL, "desc"),
            rel("b", "2"),
            rel("a", "3"),
        ];
        let (description, store) =
            split_description(metadata, Entity::Catalogue, DescriptionPolicy::LastWins).unwrap();
        assert_eq!(description, "desc");
        assert_eq!(store.all_keys(), vec!["a", "b", "a"]);
        assert_eq!(store.values_for("a"), vec!["1", "3"]);
    }

    #[test]
    fn split_last_description_wins() {
        let metadata = vec![rel(DESCRIPTION_REL, "first"), rel(DESCRIPTION_REL, "second")];
        let (description, store) =
            split_description(metadata, Entity::Catalogue, DescriptionPolicy::LastWins).unwrap();
        assert_eq!(description, "second");
        assert!(store.is_empty());
    }

    #[test]
    fn split_rejects_duplicates_under_reject_policy() {
        let metadata = vec![rel(DESCRIPTION_REL, "first"), rel(DESCRIPTION_REL, "second")];
        let err = split_description(
            metadata,
            Entity::Item("/x".to_string()),
            DescriptionPolicy::Reject,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::DuplicateDescription { entity: Entity::Item(ref href) } if href == "/x"
        ));
    }

    #[test]
    fn split_requires_non_empty_description() {
        let missing =
            split_description(vec![rel("a", "1")], Entity::Catalogue, DescriptionPolicy::LastWins);
        assert!(matches!(
            missing,
            Err(CatalogueError::MissingDescription { entity: Entity::Catalogue })
        ));

        let empty = split_description(
            vec![rel(DESCRIPTION_REL, "")],
            Entity::Catalogue,
            DescriptionPolicy::LastWins,
        );
        assert!(matches!(empty, Err(CatalogueError::MissingDescription { .. })));
    }

    #[test]
    fn inject_appends_description_last() {
        let relations = vec![rel("a", "1"), rel("b", "2")];
        let metadata = inject_description(&relations, "desc");
        assert_eq!(
            metadata,
            vec![
                RelationRef { rel: "a", val: "1" },
                RelationRef { rel: "b", val: "2" },
                RelationRef {
                    rel: DESCRIPTION_REL,
                    val: "desc"
                },
            ]
        );
    }

    #[test]
    fn inject_omits_empty_description() {
        let relations = vec![rel("a", "1")];
        let metadata = inject_description(&relations, "");
        assert_eq!(metadata, vec![RelationRef { rel: "a", val: "1" }]);
    }

    #[test]
    fn schema_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" true "), Some(true));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("enabled"), None);
    }

    #[test]
    fn description_policy_parses_known_values() {
        assert_eq!(
            "reject".parse::<DescriptionPolicy>(),
            Ok(DescriptionPolicy::Reject)
        );
        assert_eq!(
            " last-wins ".parse::<DescriptionPolicy>(),
            Ok(DescriptionPolicy::LastWins)
        );
        assert!("first-wins".parse::<DescriptionPolicy>().is_err());
    }
}
