//! Resume document model and the accepted document kinds.

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;

/// The four accepted upload formats. The MIME type is authoritative;
/// extensions are a convenience for upload surfaces that only know a
/// file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentKind {
    Pdf,
    /// Legacy binary Word (.doc).
    DocLegacy,
    /// OOXML Word (.docx).
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Resolves a declared MIME type against the allow-list.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(DocumentKind::Pdf),
            "application/msword" => Some(DocumentKind::DocLegacy),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentKind::Docx)
            }
            "text/plain" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    /// Guesses the kind from a file extension (.pdf, .doc, .docx, .txt).
    /// Extension alone is not authoritative — callers still validate the
    /// declared MIME type.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::DocLegacy),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::DocLegacy => "application/msword",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::PlainText => "text/plain",
        }
    }
}

/// An accepted upload: raw bytes plus metadata, and the extracted text
/// once extraction has succeeded. `text` is `None` until then; a document
/// whose extraction failed never gets one.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub name: String,
    pub size: u64,
    pub kind: DocumentKind,
    pub bytes: Bytes,
    pub text: Option<String>,
}

impl ResumeDocument {
    pub fn new(name: impl Into<String>, kind: DocumentKind, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            kind,
            bytes,
            text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_round_trip_for_all_kinds() {
        for kind in [
            DocumentKind::Pdf,
            DocumentKind::DocLegacy,
            DocumentKind::Docx,
            DocumentKind::PlainText,
        ] {
            assert_eq!(DocumentKind::from_mime(kind.mime()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_mime_is_none() {
        assert_eq!(DocumentKind::from_mime("application/x-msdownload"), None);
        assert_eq!(DocumentKind::from_mime(""), None);
    }

    #[test]
    fn test_extension_mapping_is_case_insensitive() {
        let path = PathBuf::from("Resume.PDF");
        assert_eq!(DocumentKind::from_extension(&path), Some(DocumentKind::Pdf));
        let path = PathBuf::from("resume.docx");
        assert_eq!(DocumentKind::from_extension(&path), Some(DocumentKind::Docx));
    }

    #[test]
    fn test_unrecognized_extension_is_none() {
        assert_eq!(DocumentKind::from_extension(Path::new("resume.exe")), None);
        assert_eq!(DocumentKind::from_extension(Path::new("resume")), None);
    }

    #[test]
    fn test_new_document_has_no_text_and_correct_size() {
        let doc = ResumeDocument::new(
            "resume.txt",
            DocumentKind::PlainText,
            Bytes::from_static(b"hello"),
        );
        assert_eq!(doc.size, 5);
        assert!(doc.text.is_none());
    }
}
