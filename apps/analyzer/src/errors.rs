use serde::Serialize;
use thiserror::Error;

/// Pipeline-level error type.
/// Every variant maps to a short user-facing [`Notice`] via [`AnalysisError::notice`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid file type: {0}")]
    InvalidType(String),

    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("read error: {0}")]
    Read(String),

    #[error("extraction error: {0}")]
    Extraction(String),

    #[error("scoring unavailable: {0}")]
    ScoringUnavailable(String),

    #[error("suggestions unavailable: {0}")]
    SuggestionUnavailable(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// A short title + description pair, the only shape errors and warnings
/// take on their way to the user. Nothing is silently swallowed; nothing
/// here is fatal to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl AnalysisError {
    /// Maps the error onto the notice the presentation surface shows.
    /// Internal details are logged, not surfaced.
    pub fn notice(&self) -> Notice {
        match self {
            AnalysisError::InvalidType(_) => Notice::new(
                "Invalid File Type",
                "Please upload a PDF, DOC, DOCX, or TXT file.",
            ),
            AnalysisError::TooLarge { .. } => Notice::new(
                "File Too Large",
                "Please upload a file smaller than 5MB.",
            ),
            AnalysisError::Read(_) => Notice::new(
                "Upload Failed",
                "There was an error reading your resume. Please try again.",
            ),
            AnalysisError::Extraction(_) => Notice::new(
                "Extraction Failed",
                "We could not read any text from your resume. Please try another file.",
            ),
            AnalysisError::ScoringUnavailable(_) => Notice::new(
                "Job Matching Unavailable",
                "Job matches could not be computed right now. Your suggestions are unaffected.",
            ),
            AnalysisError::SuggestionUnavailable(_) => Notice::new(
                "Suggestions Unavailable",
                "Resume suggestions could not be generated right now. Your job matches are unaffected.",
            ),
            AnalysisError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                Notice::new(
                    "Something Went Wrong",
                    "An unexpected error occurred. Please try again.",
                )
            }
        }
    }
}
