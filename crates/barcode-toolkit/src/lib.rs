//! High-level facade crate for the `barcode-*`/`qr-segment` workspace.
//!
//! Re-exports the geometric primitives, the two detectors (white
//! rectangle, PDF417 start/stop vertices), and the QR segmentation
//! encoder under short module names, so downstream crates can depend on
//! one crate instead of five.

pub use barcode_core as core;
pub use barcode_pattern as pattern;
pub use barcode_pdf417 as pdf417;
pub use barcode_whiterect as whiterect;
pub use qr_segment as qr;

pub use barcode_core::{BinaryImage, BitMatrix, NotFound, Point, Rotated180View};
pub use barcode_pdf417::{Pdf417Detection, Pdf417VertexDetector};
pub use barcode_whiterect::WhiteRectangleDetector;
pub use qr_segment::{EcLevel, QrEncodeParams, QrMinimalEncoder, QrMode, ResultList, Segment, WriterError};
