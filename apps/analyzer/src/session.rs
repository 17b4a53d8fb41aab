//! Analysis Orchestrator — the per-user session state machine.
//!
//! Sequences Upload → Extract → (Match + Suggest) → Present:
//! `Idle → Uploading → Extracting → Analyzing → Ready`, with
//! `Error(notice)` reachable from any point and exited only by an
//! explicit [`AnalysisSession::reset`]. Upload and extraction are
//! distinct internal sub-states sharing one external progress bar, so a
//! read failure and an extraction failure stay distinguishable while the
//! observer sees a single 0–100 signal.
//!
//! One session per user interaction. The session exclusively owns its
//! document and result buffers; the job catalog is read-only input.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::analysis::matching;
use crate::analysis::{HeuristicAdvisor, MatchScorer, SuggestionEngine, TokenOverlapScorer};
use crate::errors::{AnalysisError, Notice};
use crate::intake::{validate, TextExtractor};
use crate::models::job::{JobPosting, MatchResult};
use crate::models::resume::ResumeDocument;
use crate::models::suggestion::SuggestionItem;
use crate::progress::Progress;

/// Pipeline phase as seen by the presentation surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No document selected; entry state.
    Idle,
    /// Accepted file is being read.
    Uploading,
    /// Bytes fully read; text extraction done or in flight. A session in
    /// this phase with extracted text is waiting for [`AnalysisSession::analyze`].
    Extracting,
    /// Matching and suggestion generation running concurrently.
    Analyzing,
    /// Both result sets populated; terminal for a completed session.
    Ready,
    /// Unrecoverable failure. Carries the surfaced notice; the only exit
    /// is [`AnalysisSession::reset`].
    Error(Notice),
}

/// Which result list the presentation surface is showing. Local UI state
/// within `Ready`, not a pipeline transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsTab {
    #[default]
    Matches,
    Suggestions,
}

/// Where upload bytes come from.
pub enum UploadSource {
    Path(PathBuf),
    Memory(Bytes),
}

const READ_CHUNK: usize = 64 * 1024;

// The single external progress bar: reading fills 0–55, extraction 55–100.
const READ_WINDOW: (u8, u8) = (0, 55);
const EXTRACT_WINDOW: (u8, u8) = (55, 45);

pub struct AnalysisSession {
    scorer: Arc<dyn MatchScorer>,
    advisor: Arc<dyn SuggestionEngine>,
    extractor: TextExtractor,
    phase: Phase,
    resume: Option<ResumeDocument>,
    matches: Vec<MatchResult>,
    suggestions: Vec<SuggestionItem>,
    warnings: Vec<Notice>,
    active_tab: ResultsTab,
    progress: Progress,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(
            Arc::new(TokenOverlapScorer::default()),
            Arc::new(HeuristicAdvisor),
        )
    }
}

impl AnalysisSession {
    pub fn new(scorer: Arc<dyn MatchScorer>, advisor: Arc<dyn SuggestionEngine>) -> Self {
        let (progress, _) = Progress::channel();
        Self {
            scorer,
            advisor,
            extractor: TextExtractor::new(),
            phase: Phase::Idle,
            resume: None,
            matches: Vec::new(),
            suggestions: Vec::new(),
            warnings: Vec::new(),
            active_tab: ResultsTab::default(),
            progress,
        }
    }

    /// Replaces the extractor, e.g. to inject a Word decoder.
    pub fn with_extractor(mut self, extractor: TextExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    // ── Observers ───────────────────────────────────────────────────────

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn suggestions(&self) -> &[SuggestionItem] {
        &self.suggestions
    }

    /// Non-fatal notices collected during analysis (degraded branches).
    pub fn warnings(&self) -> &[Notice] {
        &self.warnings
    }

    pub fn active_tab(&self) -> ResultsTab {
        self.active_tab
    }

    /// Observer side of the merged upload/extraction progress bar.
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume.as_ref().and_then(|r| r.text.as_deref())
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Validates, reads, and extracts an upload. On success the session
    /// sits in `Extracting` with text available, waiting for `analyze`.
    ///
    /// Validation rejections return immediately and leave the session in
    /// `Idle` with no partial state. Read and extraction failures move it
    /// to `Error`.
    pub async fn upload(
        &mut self,
        name: &str,
        declared_mime: &str,
        source: UploadSource,
    ) -> Result<(), AnalysisError> {
        if self.phase != Phase::Idle {
            return Err(AnalysisError::Internal(anyhow::anyhow!(
                "upload requires an idle session (current phase: {:?})",
                self.phase
            )));
        }

        // Size must be known before validation; for files that means a
        // stat, and a file we cannot stat is a read failure.
        let size = match &source {
            UploadSource::Path(path) => match tokio::fs::metadata(path).await {
                Ok(meta) => meta.len(),
                Err(e) => {
                    return Err(self.fail(AnalysisError::Read(format!(
                        "cannot read {}: {e}",
                        path.display()
                    ))))
                }
            },
            UploadSource::Memory(bytes) => bytes.len() as u64,
        };

        // Validation runs before any byte is read.
        let kind = validate(declared_mime, size)?;

        self.phase = Phase::Uploading;
        info!(name, mime = declared_mime, size, "upload accepted");

        let (base, span) = READ_WINDOW;
        let bytes = match read_source(source, size, &self.progress.window(base, span)).await {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.fail(e)),
        };
        let mut doc = ResumeDocument::new(name, kind, bytes);

        self.phase = Phase::Extracting;
        let (base, span) = EXTRACT_WINDOW;
        let text = match self
            .extractor
            .extract(&doc, &self.progress.window(base, span))
            .await
        {
            Ok(text) => text,
            Err(e) => return Err(self.fail(e)),
        };

        doc.text = Some(text);
        self.resume = Some(doc);
        Ok(())
    }

    /// Fans out the matching engine and the suggestion generator, joins
    /// both, and enters `Ready`.
    ///
    /// Degradation policy: one failed branch becomes a warning notice and
    /// the surviving results are still presented; both branches failing
    /// is a session error.
    pub async fn analyze(&mut self, catalog: &[JobPosting]) -> Result<(), AnalysisError> {
        let text = match (&self.phase, self.resume_text()) {
            (Phase::Extracting, Some(text)) => text.to_string(),
            _ => {
                return Err(AnalysisError::Internal(anyhow::anyhow!(
                    "analyze requires an extracted resume (current phase: {:?})",
                    self.phase
                )))
            }
        };

        self.phase = Phase::Analyzing;
        info!(jobs = catalog.len(), "analysis started");

        // Fan-out/fan-in. The branches are independent, write disjoint
        // fields, and completion order does not affect the result.
        let (scored, suggested) = tokio::join!(
            self.scorer.score(&text, catalog),
            self.advisor.suggest(&text)
        );

        let mut warnings = Vec::new();
        let mut matches = match scored {
            Ok(matches) => matches,
            Err(e) => {
                warn!("scoring branch failed: {e}");
                warnings.push(AnalysisError::ScoringUnavailable(e.to_string()).notice());
                Vec::new()
            }
        };
        let suggestions = match suggested {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("suggestion branch failed: {e}");
                warnings.push(AnalysisError::SuggestionUnavailable(e.to_string()).notice());
                Vec::new()
            }
        };

        if warnings.len() == 2 {
            return Err(self.fail(AnalysisError::ScoringUnavailable(
                "scoring and suggestion backends both failed".to_string(),
            )));
        }

        // Presentation order is part of the contract even for injected
        // backends; rank is stable and idempotent on sorted input.
        matching::rank(&mut matches);

        self.matches = matches;
        self.suggestions = suggestions;
        self.warnings = warnings;
        self.active_tab = ResultsTab::Matches;
        self.phase = Phase::Ready;
        info!(
            matches = self.matches.len(),
            suggestions = self.suggestions.len(),
            warnings = self.warnings.len(),
            "analysis ready"
        );
        Ok(())
    }

    /// Honored only in `Ready`; switching tabs is not a pipeline transition.
    pub fn select_tab(&mut self, tab: ResultsTab) {
        if self.phase == Phase::Ready {
            self.active_tab = tab;
        }
    }

    /// Back to `Idle`, discarding the document, both result sets, all
    /// warnings, and upload progress. The only exit from `Error`, and the
    /// retry path for a fresh upload. Clearing a file mid-flow is this
    /// same discard — nothing is paused or partially kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.resume = None;
        self.matches.clear();
        self.suggestions.clear();
        self.warnings.clear();
        self.active_tab = ResultsTab::default();
        self.progress.reset();
    }

    fn fail(&mut self, err: AnalysisError) -> AnalysisError {
        warn!("session failed: {err}");
        self.phase = Phase::Error(err.notice());
        err
    }
}

/// Reads the upload to completion, driving the read progress window
/// proportionally to bytes seen.
async fn read_source(
    source: UploadSource,
    size: u64,
    progress: &Progress,
) -> Result<Bytes, AnalysisError> {
    match source {
        UploadSource::Memory(bytes) => {
            let total = bytes.len().max(1);
            let mut seen = 0usize;
            for chunk in bytes.chunks(READ_CHUNK) {
                seen += chunk.len();
                progress.set((seen * 100 / total) as u8);
            }
            progress.set(100);
            Ok(bytes)
        }
        UploadSource::Path(path) => {
            let mut file = tokio::fs::File::open(&path).await.map_err(|e| {
                AnalysisError::Read(format!("cannot open {}: {e}", path.display()))
            })?;
            let mut buf = BytesMut::with_capacity(size as usize);
            let mut chunk = vec![0u8; READ_CHUNK];
            loop {
                let n = file.read(&mut chunk).await.map_err(|e| {
                    AnalysisError::Read(format!("read failed on {}: {e}", path.display()))
                })?;
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                progress.set((buf.len() as u64 * 100 / size.max(1)) as u8);
            }
            progress.set(100);
            Ok(buf.freeze())
        }
    }
}
