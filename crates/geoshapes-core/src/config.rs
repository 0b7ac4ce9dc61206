// crates/geoshapes-core/src/config.rs
use std::time::Duration;

/// Natural Earth 1:110m admin-0 countries, served as GeoJSON from the NACIS CDN.
pub const NATURAL_EARTH_URL: &str =
    "https://naciscdn.org/naturalearth/110m/cultural/ne_110m_admin_0_countries.geojson";

/// Upper bound for the whole request, connect to last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Where to download the world dataset from and how long to wait for it.
///
/// The binary always runs with [`FetchConfig::default`]; the builder methods
/// exist so a mock server can be substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: NATURAL_EARTH_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
