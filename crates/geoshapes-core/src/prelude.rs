//! geoshapes-rs prelude: bring common types and functions into scope for demos.

#![allow(unused_imports)]

pub use crate::codes::{is_alpha3, REQUESTED_CODES};
pub use crate::common::TransformStats;
pub use crate::config::{FetchConfig, DEFAULT_TIMEOUT, NATURAL_EARTH_URL};
pub use crate::error::{GeoShapesError, Result};
pub use crate::fetch::fetch_world;
pub use crate::index::CountryIndex;
pub use crate::model::{OutputCollection, OutputFeature};
pub use crate::transform::{transform, transform_with_stats};
pub use crate::writer::{to_pretty_string, write_collection};
