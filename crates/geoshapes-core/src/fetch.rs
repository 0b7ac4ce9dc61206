// crates/geoshapes-core/src/fetch.rs

//! # Fetcher
//!
//! One blocking GET against the configured URL. The full body is buffered
//! and parsed as JSON; there is no retry and no partial result.

use crate::config::FetchConfig;
use crate::error::{GeoShapesError, Result};
use crate::source;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error, info};

/// Download and parse the world dataset described by `config`.
///
/// Network errors, the timeout, a non-success status, an unparsable body
/// and an empty document all come back as `Err`. The failure is logged
/// here; deciding whether it is fatal is left to the caller.
pub fn fetch_world(config: &FetchConfig) -> Result<Value> {
    match download(config) {
        Ok(doc) => {
            info!(
                url = %config.url,
                features = source::features(&doc).len(),
                "fetched world dataset"
            );
            Ok(doc)
        }
        Err(e) => {
            error!(url = %config.url, error = %e, "failed to fetch world dataset");
            Err(e)
        }
    }
}

fn download(config: &FetchConfig) -> Result<Value> {
    debug!(url = %config.url, timeout = ?config.timeout, "requesting world dataset");

    let client = Client::builder().timeout(config.timeout).build()?;
    let response = client.get(&config.url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(GeoShapesError::Status {
            url: config.url.clone(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes()?;
    debug!(bytes = body.len(), "response body received");

    let doc: Value = serde_json::from_slice(&body)?;
    if source::is_empty_document(&doc) {
        return Err(GeoShapesError::EmptyDocument {
            url: config.url.clone(),
        });
    }
    Ok(doc)
}
