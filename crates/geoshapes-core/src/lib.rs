// crates/geoshapes-core/src/lib.rs

//! # geoshapes-core
//!
//! Turns the Natural Earth admin-0 countries dataset into a lean GeoJSON
//! `FeatureCollection`: one feature per requested ISO 3166-1 alpha-3 code,
//! each carrying only its geometry and an `iso_a3` property.
//!
//! The pipeline is fetch → index → project → write:
//!
//! ```rust
//! use geoshapes_core::prelude::*;
//! use serde_json::json;
//!
//! let world = json!({"features": [
//!     {"properties": {"ISO_A3": "USA", "NAME": "United States"}, "geometry": {"type": "Point", "coordinates": [0, 0]}},
//!     {"properties": {"ISO_A3": "ABW", "NAME": "Aruba"}, "geometry": {"type": "Point", "coordinates": [1, 1]}},
//! ]});
//!
//! let out = transform(&world, &["ABW", "USA", "ZZZ"]);
//! assert_eq!(out.codes().collect::<Vec<_>>(), ["ABW", "USA"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codes; // The requested alpha-3 list
pub mod common;
pub mod config;
pub mod error;
pub mod fetch; // Network side (blocking reqwest)
pub mod index;
pub mod model; // Output document types
pub mod prelude;
pub mod source; // Permissive views over the fetched JSON
pub mod transform;
pub mod writer;

// Re-exports
pub use crate::codes::REQUESTED_CODES;
pub use crate::common::TransformStats;
pub use crate::config::FetchConfig;
pub use crate::error::{GeoShapesError, Result};
pub use crate::fetch::fetch_world;
pub use crate::index::CountryIndex;
pub use crate::model::{OutputCollection, OutputFeature};
pub use crate::transform::{transform, transform_with_stats};
pub use crate::writer::write_collection;
