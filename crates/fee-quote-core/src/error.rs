use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeeQuoteError {
    #[error("Unknown entity type: no base price entry for '{entity_type}'")]
    UnknownEntityType { entity_type: String },

    #[error("Invalid rate card: {field} — {reason}")]
    InvalidRateCard { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FeeQuoteError {
    fn from(e: serde_json::Error) -> Self {
        FeeQuoteError::SerializationError(e.to_string())
    }
}
