/// The geometry-detector failure kind shared by `WhiteRectangleDetector` and
/// `Pdf417VertexDetector`.
///
/// There is deliberately one error type for both detectors: neither exposes
/// a recoverable distinction between its failure modes to callers, only a
/// reason string for diagnostics.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    #[error("rectangle search left the image bounds before seeing any black border pixel")]
    NoBlackBorderSeen,

    #[error("rectangle search exceeded the image bounds")]
    SizeExceeded,

    #[error("failed to refine a corner edge point")]
    EdgePointMissing,

    #[error("start or stop guard pattern not found")]
    PatternNotFound,

    #[error("computed codeword width is below the minimum module count")]
    CodewordWidthTooSmall,
}
