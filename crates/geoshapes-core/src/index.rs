// crates/geoshapes-core/src/index.rs
use crate::source::{self, SourceFeature};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Lookup table from `ISO_A3` code to the source feature carrying it.
///
/// Built once per run and borrowed from the fetched document. When the
/// dataset lists the same code twice the later feature replaces the earlier
/// one (last write wins).
#[derive(Debug, Default)]
pub struct CountryIndex<'a> {
    by_code: HashMap<&'a str, SourceFeature<'a>>,
}

impl<'a> CountryIndex<'a> {
    /// Index every feature of `doc` that has a usable `ISO_A3` code.
    pub fn build(doc: &'a Value) -> Self {
        let mut by_code = HashMap::new();

        for feature in source::features(doc).iter().map(SourceFeature::new) {
            let Some(code) = feature.iso_a3() else {
                continue;
            };
            if by_code.insert(code, feature).is_some() {
                warn!(code, "duplicate ISO_A3 in source; keeping the later feature");
            }
        }

        Self { by_code }
    }

    pub fn get(&self, code: &str) -> Option<&SourceFeature<'a>> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Number of distinct codes indexed.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
