use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The token was neither `null` nor a valid encoding of the wrapped type.
    #[error("failed to decode optional value: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode optional value: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodecError {
    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::Decode(_))
    }

    /// The underlying `serde_json` error.
    pub fn inner(&self) -> &serde_json::Error {
        match self {
            CodecError::Decode(err) | CodecError::Encode(err) => err,
        }
    }
}
