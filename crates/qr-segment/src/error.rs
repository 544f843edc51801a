//! Errors surfaced by the top-level encoder.

use thiserror::Error;

/// Failure modes for [`crate::QrMinimalEncoder::encode`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriterError {
    /// No encoder in the constructed set could represent the character at
    /// this position.
    #[error("character at position {0} is not encodable by any available charset")]
    Unencodable(usize),

    /// The shortest segmentation still exceeds the largest candidate
    /// version's capacity at the requested error-correction level.
    #[error("minimal segmentation does not fit in any QR version at the requested EC level")]
    DataTooBig,
}
