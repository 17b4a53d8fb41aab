//! Resume Intake & Matching Pipeline.
//!
//! Takes a candidate's resume upload through validation, text extraction,
//! job-catalog scoring, and rewrite-suggestion generation. The pipeline is
//! sequenced by [`session::AnalysisSession`], a small state machine the
//! presentation layer drives and observes; everything user-visible (lists,
//! cards, progress bars) lives outside this crate.
//!
//! Data flows strictly forward: validator → extractor → orchestrator →
//! {matching engine, suggestion generator} → presentation. The job catalog
//! is read-only input; scored results are annotated copies.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod intake;
pub mod models;
pub mod progress;
pub mod session;

pub use errors::{AnalysisError, Notice};
pub use models::job::{EmploymentType, JobPosting, MatchResult, MatchStrength};
pub use models::resume::{DocumentKind, ResumeDocument};
pub use models::suggestion::SuggestionItem;
pub use session::{AnalysisSession, Phase, ResultsTab, UploadSource};
