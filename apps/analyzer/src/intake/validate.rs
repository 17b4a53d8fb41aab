//! Upload validation — MIME allow-list and size cap.

use crate::errors::AnalysisError;
use crate::models::resume::DocumentKind;

/// Maximum accepted upload size: 5 MiB. A file of exactly this size is
/// accepted; one byte more is rejected.
pub const MAX_UPLOAD_BYTES: u64 = 5_242_880;

/// Validates a candidate upload before anything is read or decoded.
///
/// Pure function: checks the declared MIME type against the allow-list
/// (PDF, legacy Word, OOXML Word, plain text), then the size cap. On
/// rejection the caller surfaces the notice and keeps no partial state.
pub fn validate(mime: &str, size_bytes: u64) -> Result<DocumentKind, AnalysisError> {
    let kind = DocumentKind::from_mime(mime)
        .ok_or_else(|| AnalysisError::InvalidType(mime.to_string()))?;

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(AnalysisError::TooLarge {
            size: size_bytes,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    Ok(kind)
}
