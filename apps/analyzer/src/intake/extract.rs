//! Text extraction — turns an accepted upload into plain UTF-8 text.
//!
//! Plain text is decoded directly. PDF decoding is CPU-bound and runs via
//! `tokio::task::spawn_blocking` so the scheduler stays unblocked; the
//! closure takes owned bytes (required for the 'static bound, and `Bytes`
//! clones are cheap). Word documents are delegated to an injected
//! [`WordDecoder`] — that capability lives outside this crate.
//!
//! Progress is reported as deterministic checkpoints through a
//! [`Progress`] handle: monotonically increasing, ending at exactly 100 on
//! success. On failure reporting stops short of 100 and the error is
//! raised instead.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AnalysisError;
use crate::models::resume::{DocumentKind, ResumeDocument};
use crate::progress::Progress;

/// External decoding capability for .doc/.docx uploads. Given bytes and
/// their declared kind, produce UTF-8 text or fail.
#[async_trait]
pub trait WordDecoder: Send + Sync {
    async fn decode(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, AnalysisError>;
}

/// Converts accepted uploads into plain text.
///
/// At most one extraction per document may be in flight; the session
/// serializes calls by driving the extractor from `&mut self`.
#[derive(Default)]
pub struct TextExtractor {
    word_decoder: Option<Arc<dyn WordDecoder>>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self { word_decoder: None }
    }

    pub fn with_word_decoder(decoder: Arc<dyn WordDecoder>) -> Self {
        Self {
            word_decoder: Some(decoder),
        }
    }

    /// Extracts text from `doc`, reporting progress checkpoints as it goes.
    pub async fn extract(
        &self,
        doc: &ResumeDocument,
        progress: &Progress,
    ) -> Result<String, AnalysisError> {
        progress.set(5);

        let raw = match doc.kind {
            DocumentKind::PlainText => {
                let text = std::str::from_utf8(&doc.bytes).map_err(|e| {
                    AnalysisError::Extraction(format!("file is not valid UTF-8 text: {e}"))
                })?;
                progress.set(70);
                text.to_string()
            }
            DocumentKind::Pdf => {
                progress.set(20);
                let bytes = doc.bytes.clone();
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&bytes)
                })
                .await
                .map_err(|e| {
                    AnalysisError::Internal(anyhow::anyhow!(
                        "spawn_blocking failed in PDF extraction: {e}"
                    ))
                })?
                .map_err(|e| AnalysisError::Extraction(format!("PDF decoding failed: {e}")))?;
                progress.set(70);
                text
            }
            DocumentKind::DocLegacy | DocumentKind::Docx => {
                let decoder = self.word_decoder.as_ref().ok_or_else(|| {
                    AnalysisError::Extraction(
                        "Word decoding is not available in this deployment".to_string(),
                    )
                })?;
                progress.set(20);
                let text = decoder.decode(doc.kind, &doc.bytes).await?;
                progress.set(70);
                text
            }
        };

        let text = normalize(&raw);
        progress.set(90);
        debug!(kind = ?doc.kind, chars = text.len(), "extracted resume text");
        progress.set(100);
        Ok(text)
    }
}

/// Normalizes line endings and strips surrounding whitespace. An empty
/// result is valid — an empty resume is low-confidence input downstream,
/// not an extraction failure.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}
