//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum WaymarkError {
    /// Document could not be rendered as JSON text.
    #[error("failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Failed to write the rendered document to the output.
    #[error("failed to write document")]
    Io(#[from] std::io::Error),
    /// An emitted document was rejected by the `geojson` crate.
    #[error("invalid geojson document: {0}")]
    Conversion(String),
}

#[cfg(feature = "geojson")]
impl From<geojson::Error> for WaymarkError {
    fn from(value: geojson::Error) -> Self {
        Self::Conversion(value.to_string())
    }
}

/// Result alias with [`WaymarkError`] as the error type.
pub type Result<T> = std::result::Result<T, WaymarkError>;
