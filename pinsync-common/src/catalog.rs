use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry in the pin catalog: where the pin art lives, plus the display
/// metadata the map renderer uses when placing markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinStyle {
    /// Image source for the preview and the placed marker.
    pub url: String,
    /// Whether the pin art carries an injected candidate number.
    #[serde(default)]
    pub numbered: bool,
    /// Marker label template shown next to the pin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PinStyle {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            numbered: false,
            label: None,
        }
    }
}

/// Immutable key → style mapping, parsed once from the JSON blob embedded
/// in the page. Only `url` matters for preview lookups; the rest rides along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinCatalog(HashMap<String, PinStyle>);

impl PinCatalog {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn get(&self, key: &str) -> Option<&PinStyle> {
        self.0.get(key)
    }

    /// Preview image URL for a key, or `None` when the key is not cataloged.
    pub fn url_for(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|style| style.url.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, style: PinStyle) {
        self.0.insert(key.into(), style);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PinStyle)> for PinCatalog {
    fn from_iter<T: IntoIterator<Item = (String, PinStyle)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
