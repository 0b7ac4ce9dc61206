// crates/geoshapes-core/src/error.rs
use thiserror::Error;

/// Errors raised while fetching the world dataset or writing the result.
///
/// The transform itself is total and never produces one of these; every
/// variant belongs either to the fetch stage or to output serialization.
#[derive(Debug, Error)]
pub enum GeoShapesError {
    /// Transport failure: DNS, connect, TLS, timeout or body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The body parsed but held no data (`null`, `{}`, `[]`, `""`, `0`, `false`).
    #[error("no world data in response from {url}")]
    EmptyDocument { url: String },
}

impl GeoShapesError {
    /// Returns `true` if the error was raised while obtaining the source
    /// document rather than while writing the output.
    pub fn is_fetch_failure(&self) -> bool {
        match self {
            GeoShapesError::Http(_)
            | GeoShapesError::Status { .. }
            | GeoShapesError::Json(_)
            | GeoShapesError::EmptyDocument { .. } => true,
            GeoShapesError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoShapesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_io_errors_are_output_failures() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let fetch_side = [
            GeoShapesError::Status { url: "http://x".into(), status: 500 },
            GeoShapesError::Json(parse),
            GeoShapesError::EmptyDocument { url: "http://x".into() },
        ];
        for err in &fetch_side {
            assert!(err.is_fetch_failure(), "{err}");
        }

        let io = GeoShapesError::Io(std::io::ErrorKind::BrokenPipe.into());
        assert!(!io.is_fetch_failure());
    }
}
