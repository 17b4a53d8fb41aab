// Analysis: the two independent result producers the session fans out to.
// Both are trait seams so a deployment can back them with a remote service.

pub mod matching;
pub mod suggestions;

pub use matching::{MatchScorer, TokenOverlapScorer};
pub use suggestions::{HeuristicAdvisor, SuggestionEngine};
