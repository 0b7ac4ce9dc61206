//! geoshapes-cli
//! =============
//!
//! Command-line front end for [`geoshapes-core`]. The binary downloads the
//! Natural Earth 1:110m admin-0 countries dataset, keeps the countries in
//! the built-in ISO alpha-3 list and prints a FeatureCollection whose
//! features carry nothing but `iso_a3` and the untouched geometry.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geoshapes > countries.geojson
//! RUST_LOG=info geoshapes > countries.geojson
//! ```
//!
//! Exit status is 0 on success and 1 when the dataset cannot be fetched or
//! the output cannot be written. Nothing is printed to stdout on failure.
//!
//! The pipeline itself is exposed as [`run`] so it can be driven against a
//! mock server in tests.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

use anyhow::Context;
use geoshapes_core::{
    fetch_world, transform_with_stats, write_collection, FetchConfig, TransformStats,
    REQUESTED_CODES,
};
use std::io::Write;
use tracing::info;

/// Fetch, filter and write the FeatureCollection to `out`.
///
/// `out` is only touched once the dataset has been fetched, so a fetch
/// failure leaves it empty.
pub fn run<W: Write>(config: &FetchConfig, out: &mut W) -> anyhow::Result<TransformStats> {
    let world = fetch_world(config).context("Failed to fetch world data")?;

    let (collection, stats) = transform_with_stats(&world, REQUESTED_CODES);
    write_collection(out, &collection).context("Failed to write FeatureCollection")?;

    info!(
        source_features = stats.source_features,
        requested = stats.requested,
        matched = stats.matched,
        missing = stats.missing(),
        "wrote FeatureCollection"
    );
    Ok(stats)
}
