//! Content items as returned by the delivery API.
//!
//! Items are kept close to the wire shape: system attributes are typed, elements stay raw so
//! views can read any field without a generated model per content type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItemSystem {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub language: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub last_modified: String,
}

/// A single element value. `value` is a string for text-like elements and an array of codenames
/// for linked items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub system: ContentItemSystem,
    #[serde(default)]
    pub elements: BTreeMap<String, Element>,
}

impl ContentItem {
    pub fn codename(&self) -> &str {
        &self.system.codename
    }

    pub fn content_type(&self) -> &str {
        &self.system.content_type
    }

    /// Text value of a text, rich text or URL slug element. Empty strings count as absent.
    pub fn text(&self, element: &str) -> Option<&str> {
        self.elements
            .get(element)
            .and_then(|e| e.value.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Codenames referenced by a linked items element, in CMS order.
    pub fn linked_codenames(&self, element: &str) -> Vec<String> {
        self.elements
            .get(element)
            .and_then(|e| e.value.as_array())
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Linked items delivered alongside the requested ones, keyed by codename.
pub type ModularContent = HashMap<String, ContentItem>;

/// Response of a single-item request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemResponse {
    pub item: ContentItem,
    #[serde(default)]
    pub modular_content: ModularContent,
}

/// Response of a listing request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<ContentItem>,
    #[serde(default)]
    pub modular_content: ModularContent,
}
