// crates/geoshapes-core/src/model.rs

//! Output document types.
//!
//! Field declaration order is the serialization order, so a feature always
//! renders as `type`, `properties`, `geometry`.

use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// GeoJSON `type` markers used in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeoJsonType {
    Feature,
    FeatureCollection,
}

/// The single property kept on every output feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryProperties {
    pub iso_a3: String,
}

/// A stripped-down country feature.
///
/// `geometry` borrows the source geometry when one exists, so nothing is
/// copied until serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFeature<'a> {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    pub properties: CountryProperties,
    pub geometry: Cow<'a, Value>,
}

impl<'a> OutputFeature<'a> {
    /// Build a feature for `code`. A missing source geometry becomes `{}`.
    pub fn new(code: &str, geometry: Option<&'a Value>) -> Self {
        Self {
            kind: GeoJsonType::Feature,
            properties: CountryProperties {
                iso_a3: code.to_string(),
            },
            geometry: geometry
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(Value::Object(Map::new()))),
        }
    }

    pub fn iso_a3(&self) -> &str {
        &self.properties.iso_a3
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputCollection<'a> {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    pub features: Vec<OutputFeature<'a>>,
}

impl<'a> OutputCollection<'a> {
    pub fn new(features: Vec<OutputFeature<'a>>) -> Self {
        Self {
            kind: GeoJsonType::FeatureCollection,
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Codes of the contained features, in output order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(OutputFeature::iso_a3)
    }
}

impl Default for OutputCollection<'_> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
