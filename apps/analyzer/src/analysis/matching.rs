//! Matching Engine — pluggable, trait-based scorer that ranks a job
//! catalog against one resume.
//!
//! Default: [`TokenOverlapScorer`] (pure-Rust, deterministic, fully
//! testable). A deployment may swap in a scorer backed by a remote
//! service; the session carries the backend as `Arc<dyn MatchScorer>`.
//!
//! Contract, regardless of backend: one integer percentage in [0, 100]
//! per input job, no job dropped or duplicated, output sorted
//! non-increasing with catalog order preserved among equal scores, and
//! the caller's catalog never mutated.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::errors::AnalysisError;
use crate::models::job::{JobPosting, MatchResult};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer seam. Implement this to swap backends without
/// touching the session or any caller.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AnalysisError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TokenOverlapScorer — default deterministic backend
// ────────────────────────────────────────────────────────────────────────────

/// Scores by the fraction of a job description's distinctive tokens that
/// also appear in the resume, scaled linearly into `[floor, ceiling]`.
///
/// An empty resume (or a description with no distinctive tokens) scores
/// the floor — empty input is valid, low-confidence input, not an error.
pub struct TokenOverlapScorer {
    floor: u8,
    ceiling: u8,
}

impl TokenOverlapScorer {
    /// `ceiling` is clamped to 100 and `floor` to `ceiling`.
    pub fn new(floor: u8, ceiling: u8) -> Self {
        let ceiling = ceiling.min(100);
        Self {
            floor: floor.min(ceiling),
            ceiling,
        }
    }

    fn percentage(&self, resume_tokens: &HashSet<String>, description: &str) -> u8 {
        let jd_tokens = token_set(description);
        if jd_tokens.is_empty() {
            return self.floor;
        }

        let matched = jd_tokens
            .iter()
            .filter(|t| resume_tokens.contains(*t))
            .count();
        let ratio = matched as f32 / jd_tokens.len() as f32;
        let span = (self.ceiling - self.floor) as f32;

        self.floor + (ratio * span).round() as u8
    }
}

impl Default for TokenOverlapScorer {
    fn default() -> Self {
        Self::new(40, 95)
    }
}

#[async_trait]
impl MatchScorer for TokenOverlapScorer {
    async fn score(
        &self,
        resume_text: &str,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AnalysisError> {
        let resume_tokens = token_set(resume_text);

        let mut results: Vec<MatchResult> = jobs
            .iter()
            .map(|job| MatchResult {
                job: job.clone(),
                match_percentage: self.percentage(&resume_tokens, &job.description),
            })
            .collect();

        rank(&mut results);
        Ok(results)
    }
}

/// Sorts results non-increasing by percentage. `sort_by` is stable, so
/// catalog order is preserved among equal scores and the ranking is
/// deterministic for a fixed scorer and input order.
pub fn rank(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenization
// ────────────────────────────────────────────────────────────────────────────

/// Connective words carrying no matching signal.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "your", "our", "are", "will", "have", "has", "that",
    "this", "from", "into", "who", "what", "where", "when", "work", "working", "team", "role",
    "job", "about", "join", "looking", "experience", "years", "required", "preferred", "plus",
];

fn token_set(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 3)
        .map(str::to_lowercase)
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect()
}
