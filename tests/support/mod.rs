#![allow(dead_code)]

use hypercat::{
    CONTENT_TYPE_REL, Catalogue, DESCRIPTION_REL, Item, SIMPLE_SEARCH_VAL, SUPPORTS_SEARCH_REL,
};
use serde_json::{Value, json};

// Catalogue used across the codec and CLI tests: one search relation and a
// single JSON resource.
pub fn sample_catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new("Catalog Name").expect("valid catalogue");
    catalogue.add_rel(SUPPORTS_SEARCH_REL, SIMPLE_SEARCH_VAL).expect("ordinary relation");

    let mut item = Item::new("/resource1", "Resource 1").expect("valid item");
    item.add_rel(CONTENT_TYPE_REL, "application/json").expect("ordinary relation");
    catalogue.add_item(item).expect("unique href");
    catalogue
}

pub fn item_with_rels(href: &str, description: &str, rels: &[(&str, &str)]) -> Item {
    let mut item = Item::new(href, description).expect("valid item");
    for (rel, val) in rels {
        item.add_rel(*rel, *val).expect("ordinary relation");
    }
    item
}

pub fn description_rel(val: &str) -> Value {
    json!({"rel": DESCRIPTION_REL, "val": val})
}

pub fn wire_document(metadata: Vec<Value>, items: Vec<Value>) -> String {
    json!({"items": items, "item-metadata": metadata}).to_string()
}
