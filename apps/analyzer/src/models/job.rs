//! Job catalog data model — postings, scored results, and display strength.

use serde::{Deserialize, Serialize};

/// Employment arrangement for a posting. Serialized with the catalog's
/// kebab-case wire names ("full-time", "part-time", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

/// A catalog entry describing an open role. Owned by the external listing
/// collaborator; the pipeline only ever reads it. A posting carries no
/// score — scores exist only on [`MatchResult`] copies, so a percentage
/// cannot outlive the resume it was computed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Opaque stable identity assigned by the catalog.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-text range, e.g. "$120k – $150k".
    pub salary: String,
    pub employment_type: EmploymentType,
    pub description: String,
    /// Display string as supplied by the catalog ("2 days ago", "2026-08-01").
    pub posted_date: String,
}

/// A posting annotated with its compatibility score against one resume.
/// `job` is a copy; the catalog's canonical record is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobPosting,
    /// Integer percentage in [0, 100].
    pub match_percentage: u8,
}

impl MatchResult {
    /// Display-styling bucket for this result's percentage badge.
    pub fn strength(&self) -> MatchStrength {
        MatchStrength::from_percentage(self.match_percentage)
    }
}

/// Badge styling bucket for a match percentage. Used only for display,
/// never for filtering or exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
}

impl MatchStrength {
    /// >85 is strong, >70 is moderate, everything else is weak.
    pub fn from_percentage(pct: u8) -> Self {
        if pct > 85 {
            MatchStrength::Strong
        } else if pct > 70 {
            MatchStrength::Moderate
        } else {
            MatchStrength::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStrength::Strong => "strong",
            MatchStrength::Moderate => "moderate",
            MatchStrength::Weak => "weak",
        }
    }
}
