use serde::{Deserialize, Serialize};

/// A structured before/after/rationale card describing one proposed
/// resume edit. Every field is populated — the generator never emits a
/// partial item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Resume section the edit targets, e.g. "Professional Summary".
    pub section: String,
    /// Excerpt of the resume as it stands.
    pub current: String,
    /// Proposed rewrite.
    pub suggestion: String,
    /// Why the rewrite is better.
    pub reasoning: String,
}

impl SuggestionItem {
    /// True when all four fields carry text.
    pub fn is_complete(&self) -> bool {
        !self.section.is_empty()
            && !self.current.is_empty()
            && !self.suggestion.is_empty()
            && !self.reasoning.is_empty()
    }
}
