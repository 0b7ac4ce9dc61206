//! Offline demo for geoshapes-rs
//!
//! Runs the filter/transform step over a small inline dataset instead of
//! the Natural Earth download, then prints the resulting FeatureCollection.

use geoshapes_core::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== geoshapes-rs offline demo ===\n");

    let world = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"ISO_A3": "CHE", "ADMIN": "Switzerland", "CONTINENT": "Europe"},
                "geometry": {"type": "Point", "coordinates": [8.23, 46.8]}
            },
            {
                "type": "Feature",
                "properties": {"ISO_A3": "AUT", "ADMIN": "Austria", "CONTINENT": "Europe"},
                "geometry": {"type": "Point", "coordinates": [14.55, 47.52]}
            },
            {
                "type": "Feature",
                "properties": {"ISO_A3": "-99", "ADMIN": "Northern Cyprus"},
                "geometry": {"type": "Point", "coordinates": [33.6, 35.2]}
            }
        ]
    });

    let index = CountryIndex::build(&world);
    for code in ["CHE", "DEU"] {
        if index.contains(code) {
            println!("  {code}: present in source");
        } else {
            println!("  {code}: not in source, will be skipped");
        }
    }
    println!();

    let (collection, stats) = transform_with_stats(&world, REQUESTED_CODES);
    println!(
        "Matched {} of {} requested codes ({} source features)",
        stats.matched, stats.requested, stats.source_features
    );
    for code in collection.codes() {
        println!("  - {code}");
    }
    println!();

    print!("{}", to_pretty_string(&collection)?);
    Ok(())
}
