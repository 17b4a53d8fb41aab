// Intake: upload validation and text extraction.
// Validation always runs before any bytes are read or decoded.

pub mod extract;
pub mod validate;

pub use extract::{TextExtractor, WordDecoder};
pub use validate::{validate, MAX_UPLOAD_BYTES};
