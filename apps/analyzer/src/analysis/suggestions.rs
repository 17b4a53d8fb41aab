//! Suggestion Generator — deterministic rewrite recommendations keyed to
//! detected weaknesses in the resume text.
//!
//! Default: [`HeuristicAdvisor`], four detectors run in fixed order (most
//! impactful first): missing professional summary, unquantified
//! experience lines, bare skill lists, weak action verbs. Independent of
//! the matching engine and of any specific job; the session runs it
//! concurrently with scoring as `Arc<dyn SuggestionEngine>`.

use async_trait::async_trait;

use crate::errors::AnalysisError;
use crate::models::suggestion::SuggestionItem;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The suggestion seam. Implementations must be deterministic for a fixed
/// input and must never emit a partial item.
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    async fn suggest(&self, resume_text: &str) -> Result<Vec<SuggestionItem>, AnalysisError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAdvisor — default backend
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicAdvisor;

#[async_trait]
impl SuggestionEngine for HeuristicAdvisor {
    async fn suggest(&self, resume_text: &str) -> Result<Vec<SuggestionItem>, AnalysisError> {
        Ok(detect_weaknesses(resume_text))
    }
}

/// Verbs that state involvement without impact. A line using one of these
/// with no metric gets a quantification suggestion.
const VAGUE_VERBS: &[&str] = &[
    "improved",
    "enhanced",
    "helped",
    "worked on",
    "assisted",
    "supported",
    "participated",
    "involved",
    "responsible for",
];

/// Passive phrases the action-verb detector looks for. No overlapping
/// entries: "was responsible for" is covered by "responsible for".
const WEAK_PHRASES: &[&str] = &[
    "worked on",
    "helped with",
    "responsible for",
    "assisted with",
    "participated in",
    "duties included",
];

const STRONG_VERBS: &str = "Engineered, Spearheaded, Implemented, Streamlined, Orchestrated";

fn detect_weaknesses(resume_text: &str) -> Vec<SuggestionItem> {
    let lower = resume_text.to_lowercase();
    let mut items = Vec::new();

    if let Some(item) = summary_suggestion(resume_text, &lower) {
        items.push(item);
    }
    if let Some(item) = quantification_suggestion(resume_text) {
        items.push(item);
    }
    if let Some(item) = skills_suggestion(resume_text) {
        items.push(item);
    }
    if let Some(item) = action_verb_suggestion(&lower) {
        items.push(item);
    }

    items
}

// ────────────────────────────────────────────────────────────────────────────
// Detectors, most impactful first
// ────────────────────────────────────────────────────────────────────────────

fn summary_suggestion(resume_text: &str, lower: &str) -> Option<SuggestionItem> {
    if lower.contains("summary") || lower.contains("objective") {
        return None;
    }

    let current = resume_text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(excerpt)
        .unwrap_or_else(|| "No professional summary present.".to_string());

    Some(SuggestionItem {
        section: "Professional Summary".to_string(),
        current,
        suggestion: "Open with a results-driven summary, e.g. \"Results-driven software \
                     developer with 5+ years of experience delivering robust applications \
                     that enhance user experience and drive business growth.\""
            .to_string(),
        reasoning: "A summary adds specificity and quantifiable experience up front, and \
                    focuses on business impact rather than just listing generic skills."
            .to_string(),
    })
}

fn quantification_suggestion(resume_text: &str) -> Option<SuggestionItem> {
    let line = resume_text.lines().map(str::trim).find(|l| {
        if l.len() < 12 {
            return false;
        }
        let lower = l.to_lowercase();
        VAGUE_VERBS.iter().any(|v| lower.contains(v)) && !is_quantified(l)
    })?;

    Some(SuggestionItem {
        section: "Work Experience".to_string(),
        current: excerpt(line),
        suggestion: "Led the development of a customer-facing web application that \
                     increased user engagement by 35% through implementing responsive \
                     design and optimizing load times from 5s to 1.2s."
            .to_string(),
        reasoning: "Transforms generic responsibilities into specific achievements with \
                    measurable results and technical details that demonstrate impact."
            .to_string(),
    })
}

fn skills_suggestion(resume_text: &str) -> Option<SuggestionItem> {
    // Locate a skills heading, then inspect the list on the same line
    // (after a colon) or on the next non-empty line.
    let mut lines = resume_text.lines().map(str::trim);
    let mut list: Option<&str> = None;
    while let Some(line) = lines.next() {
        if !line.to_lowercase().contains("skills") {
            continue;
        }
        list = match line.split_once(':') {
            Some((_, rest)) if !rest.trim().is_empty() => Some(rest.trim()),
            _ => lines.find(|l| !l.is_empty()),
        };
        break;
    }
    let list = list?;

    let entries: Vec<&str> = list.split(',').map(str::trim).collect();
    let bare = entries.len() >= 3 && entries.iter().all(|e| !e.contains(' ') && !e.is_empty());
    if !bare {
        return None;
    }

    Some(SuggestionItem {
        section: "Skills Section".to_string(),
        current: excerpt(list),
        suggestion: "Expand each skill with versions and context, e.g. \"React.js, \
                     JavaScript (ES6+), CSS3, Redux, TypeScript, Jest, RESTful APIs, \
                     Agile methodologies\"."
            .to_string(),
        reasoning: "Specific versions and methodologies show deeper expertise and \
                    familiarity with industry standards than a bare keyword list."
            .to_string(),
    })
}

fn action_verb_suggestion(lower: &str) -> Option<SuggestionItem> {
    let found: Vec<&str> = WEAK_PHRASES
        .iter()
        .copied()
        .filter(|p| lower.contains(p))
        .collect();
    if found.is_empty() {
        return None;
    }

    Some(SuggestionItem {
        section: "Action Verbs".to_string(),
        current: found.join(", "),
        suggestion: STRONG_VERBS.to_string(),
        reasoning: "Stronger action verbs convey leadership, initiative and specific \
                    contributions rather than passive involvement."
            .to_string(),
    })
}

fn is_quantified(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit()) || line.contains('%') || line.contains('$')
}

/// First 120 characters of a line, marked when truncated.
fn excerpt(line: &str) -> String {
    const MAX_CHARS: usize = 120;
    if line.chars().count() <= MAX_CHARS {
        line.to_string()
    } else {
        let mut s: String = line.chars().take(MAX_CHARS).collect();
        s.push_str("...");
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEAK_RESUME: &str = "\
John Doe
Experienced software developer with programming skills.

Skills: React, JavaScript, CSS

Experience
- Responsible for developing websites and applications.
- Worked on internal tooling.
";

    const STRONG_RESUME: &str = "\
Jane Doe
Professional Summary: Results-driven engineer with 6 years of experience.

Skills: Rust (tokio, axum), PostgreSQL tuning, Kubernetes operations

Experience
- Engineered a billing pipeline processing $2M/day, cutting failures by 40%.
- Spearheaded a migration that reduced p99 latency from 900ms to 120ms.
";

    fn suggest(text: &str) -> Vec<SuggestionItem> {
        detect_weaknesses(text)
    }

    #[test]
    fn test_weak_resume_triggers_all_four_detectors_in_order() {
        let items = suggest(WEAK_RESUME);
        let sections: Vec<&str> = items.iter().map(|i| i.section.as_str()).collect();
        assert_eq!(
            sections,
            vec![
                "Professional Summary",
                "Work Experience",
                "Skills Section",
                "Action Verbs"
            ]
        );
    }

    #[test]
    fn test_every_item_has_all_four_fields_populated() {
        for item in suggest(WEAK_RESUME) {
            assert!(item.is_complete(), "partial item: {item:?}");
        }
        for item in suggest("") {
            assert!(item.is_complete(), "partial item: {item:?}");
        }
    }

    #[test]
    fn test_strong_resume_yields_no_suggestions() {
        let items = suggest(STRONG_RESUME);
        assert!(items.is_empty(), "unexpected suggestions: {items:?}");
    }

    #[test]
    fn test_empty_resume_still_gets_summary_suggestion() {
        let items = suggest("");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].section, "Professional Summary");
        assert!(!items[0].current.is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(suggest(WEAK_RESUME), suggest(WEAK_RESUME));
    }

    #[test]
    fn test_quantified_vague_verb_line_is_not_flagged() {
        let text = "Summary: engineer.\nImproved checkout conversion by 18% last quarter.";
        assert!(quantification_suggestion(text).is_none());
    }

    #[test]
    fn test_unquantified_line_excerpt_is_the_offending_line() {
        let item = quantification_suggestion(WEAK_RESUME).unwrap();
        assert!(item.current.contains("Responsible for developing"));
    }

    #[test]
    fn test_action_verb_detector_lists_found_phrases() {
        let item = action_verb_suggestion(&WEAK_RESUME.to_lowercase()).unwrap();
        assert!(item.current.contains("responsible for"));
        assert!(item.current.contains("worked on"));
        assert_eq!(item.suggestion, STRONG_VERBS);
    }

    #[test]
    fn test_detailed_skill_list_is_not_flagged() {
        assert!(skills_suggestion(STRONG_RESUME).is_none());
    }

    #[test]
    fn test_skills_list_on_following_line_is_found() {
        let text = "Technical Skills\nGo, Python, SQL\n";
        let item = skills_suggestion(text).unwrap();
        assert_eq!(item.current, "Go, Python, SQL");
    }

    #[test]
    fn test_excerpt_truncates_long_lines_on_char_boundary() {
        let long = "é".repeat(200);
        let cut = excerpt(&long);
        assert!(cut.chars().count() <= 123);
        assert!(cut.ends_with("..."));
    }

    #[tokio::test]
    async fn test_advisor_trait_surface() {
        let advisor = HeuristicAdvisor;
        let items = advisor.suggest(WEAK_RESUME).await.unwrap();
        assert_eq!(items.len(), 4);
    }
}
