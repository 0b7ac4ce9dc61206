// crates/geoshapes-core/src/transform.rs

//! # Filter/Transform
//!
//! Index the source by `ISO_A3`, then walk the requested codes in order and
//! emit one lean feature per hit. Unknown codes are skipped silently. The
//! transform is total: any JSON value is accepted.

use crate::common::TransformStats;
use crate::index::CountryIndex;
use crate::model::{OutputCollection, OutputFeature};
use crate::source;
use serde_json::Value;

/// Reduce `doc` to the features named in `requested`, in that order.
pub fn transform<'a, S: AsRef<str>>(doc: &'a Value, requested: &[S]) -> OutputCollection<'a> {
    transform_with_stats(doc, requested).0
}

/// Same as [`transform`], also reporting how much of the request matched.
pub fn transform_with_stats<'a, S: AsRef<str>>(
    doc: &'a Value,
    requested: &[S],
) -> (OutputCollection<'a>, TransformStats) {
    let index = CountryIndex::build(doc);
    let collection = project(&index, requested);

    let stats = TransformStats {
        source_features: source::features(doc).len(),
        indexed_codes: index.len(),
        requested: requested.len(),
        matched: collection.len(),
    };
    (collection, stats)
}

/// Projection step over a prebuilt index.
pub fn project<'a, S: AsRef<str>>(
    index: &CountryIndex<'a>,
    requested: &[S],
) -> OutputCollection<'a> {
    let features = requested
        .iter()
        .map(|code| code.as_ref())
        .filter_map(|code| {
            index
                .get(code)
                .map(|feature| OutputFeature::new(code, feature.geometry()))
        })
        .collect();

    OutputCollection::new(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::REQUESTED_CODES;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn world() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"ISO_A3": "USA", "NAME": "United States", "POP_EST": 328239523},
                    "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}
                },
                {
                    "type": "Feature",
                    "properties": {"ISO_A3": "ABW", "NAME": "Aruba"},
                    "geometry": {"type": "Point", "coordinates": [-69.97, 12.52]}
                }
            ]
        })
    }

    #[test]
    fn keeps_requested_order_and_skips_unknown() {
        let doc = world();
        let out = transform(&doc, &["ABW", "USA", "ZZZ"]);

        assert_eq!(out.codes().collect::<Vec<_>>(), vec!["ABW", "USA"]);
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"iso_a3": "ABW"},
                        "geometry": {"type": "Point", "coordinates": [-69.97, 12.52]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"iso_a3": "USA"},
                        "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}
                    }
                ]
            })
        );
    }

    #[test]
    fn geometry_is_borrowed_from_source() {
        let doc = world();
        let out = transform(&doc, &["USA"]);

        let source_geometry = &doc["features"][0]["geometry"];
        match &out.features[0].geometry {
            std::borrow::Cow::Borrowed(g) => assert!(std::ptr::eq(*g, source_geometry)),
            std::borrow::Cow::Owned(_) => panic!("geometry was copied"),
        }
    }

    #[test]
    fn only_iso_a3_property_survives() {
        let doc = world();
        let out = transform(&doc, &["USA"]);
        let props = serde_json::to_value(&out.features[0].properties).unwrap();

        assert_eq!(props, json!({"iso_a3": "USA"}));
    }

    #[test]
    fn missing_features_key_gives_empty_collection() {
        let doc = json!({"type": "FeatureCollection"});
        let out = transform(&doc, REQUESTED_CODES);

        assert!(out.is_empty());
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"type":"FeatureCollection","features":[]}"#
        );
    }

    #[test]
    fn feature_without_geometry_gets_empty_object() {
        let doc = json!({"features": [{"properties": {"ISO_A3": "FJI"}}]});
        let out = transform(&doc, &["FJI"]);

        assert_eq!(*out.features[0].geometry, json!({}));
    }

    #[test]
    fn duplicate_requested_code_is_emitted_twice() {
        let doc = world();
        let out = transform(&doc, &["USA", "USA"]);

        assert_eq!(out.codes().collect::<Vec<_>>(), vec!["USA", "USA"]);
    }

    #[test]
    fn is_idempotent() {
        let doc = world();
        let first = transform(&doc, REQUESTED_CODES);
        let second = transform(&doc, REQUESTED_CODES);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn stats_count_matches() {
        let doc = json!({"features": [
            {"properties": {"ISO_A3": "USA"}, "geometry": null},
            {"properties": {"ISO_A3": "USA"}, "geometry": null},
            {"properties": {"ISO_A3": "-99"}, "geometry": null},
            {"properties": {}, "geometry": null},
        ]});
        let (out, stats) = transform_with_stats(&doc, &["USA", "CAN"]);

        assert_eq!(out.len(), 1);
        assert_eq!(
            stats,
            TransformStats {
                source_features: 4,
                indexed_codes: 2,
                requested: 2,
                matched: 1,
            }
        );
        assert_eq!(stats.missing(), 1);
    }

    #[test]
    fn accepts_owned_code_lists() {
        let doc = world();
        let requested: Vec<String> = vec!["USA".into(), "ABW".into()];
        let out = transform(&doc, &requested);

        assert_eq!(out.codes().collect::<Vec<_>>(), vec!["USA", "ABW"]);
    }
}
