// crates/geoshapes-core/src/source.rs

//! Read-only views over the fetched dataset.
//!
//! The upstream document is kept as a [`serde_json::Value`] and never
//! deserialized into strict types: a missing or oddly typed field must
//! degrade to "absent", not abort the run.

use serde_json::Value;

/// Property key carrying the ISO 3166-1 alpha-3 code in Natural Earth data.
pub const ISO_A3_KEY: &str = "ISO_A3";

/// The document's `features` array, or an empty slice if the document is
/// not an object or has no array under that key.
pub fn features(doc: &Value) -> &[Value] {
    doc.get("features")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Returns `true` for documents that carry no data at all: `null`, `false`,
/// `0`, `""`, `[]` and `{}`.
pub fn is_empty_document(doc: &Value) -> bool {
    match doc {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// A borrowed feature of the source collection.
#[derive(Debug, Clone, Copy)]
pub struct SourceFeature<'a> {
    raw: &'a Value,
}

impl<'a> SourceFeature<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// The `ISO_A3` property, if it is a non-empty string.
    ///
    /// Natural Earth marks disputed or unassigned entries with `"-99"`; such
    /// values are returned as-is and simply never match a requested code.
    pub fn iso_a3(&self) -> Option<&'a str> {
        self.raw
            .get("properties")
            .and_then(|props| props.get(ISO_A3_KEY))
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
    }

    /// The geometry member. `None` only when the key is missing; an explicit
    /// `null` geometry is returned as `Some(&Value::Null)`.
    pub fn geometry(&self) -> Option<&'a Value> {
        self.raw.get("geometry")
    }
}
