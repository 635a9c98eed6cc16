//! Well-known HyperCat relation keys and values.
//!
//! Only [`DESCRIPTION_REL`] is interpreted by this crate; everything else is
//! an opaque string that passes through the relation store untouched.

/// HyperCat document version understood by the codec.
pub const HYPERCAT_VERSION: &str = "2.0";

/// Default media type of HyperCat resources.
pub const HYPERCAT_MEDIA_TYPE: &str = "application/vnd.hypercat.catalogue+json";

/// Reserved key of the mandatory description relation.
pub const DESCRIPTION_REL: &str = "urn:X-hypercat:rels:hasDescription:en";

pub const CONTENT_TYPE_REL: &str = "urn:X-hypercat:rels:isContentType";
pub const HOMEPAGE_REL: &str = "urn:X-hypercat:rels:hasHomepage";
pub const CONTAINS_CONTENT_TYPE_REL: &str = "urn:X-hypercat:rels:containsContentType";
pub const SUPPORTS_SEARCH_REL: &str = "urn:X-hypercat:rels:supportsSearch";

/// Values of [`SUPPORTS_SEARCH_REL`] advertising a search capability.
pub const SIMPLE_SEARCH_VAL: &str = "urn:X-hypercat:search:simple";
pub const GEO_BOUND_SEARCH_VAL: &str = "urn:X-hypercat:search:geobound";
pub const LEXICOGRAPHIC_SEARCH_VAL: &str = "urn:X-hypercat:search:lexrange";
pub const MULTI_SEARCH_VAL: &str = "urn:X-hypercat:search:multi";
pub const SUBSTRING_SEARCH_VAL: &str = "urn:X-hypercat:search:substring";
