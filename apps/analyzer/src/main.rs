//! Demo driver for the analysis pipeline. Stands in for the external
//! presentation surface: reads a resume file and a JSON job catalog, runs
//! the session, and prints ranked matches plus suggestion cards.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use analyzer::analysis::{HeuristicAdvisor, TokenOverlapScorer};
use analyzer::config::Config;
use analyzer::models::job::JobPosting;
use analyzer::models::resume::DocumentKind;
use analyzer::session::{AnalysisSession, UploadSource};

/// Scores a resume against a job catalog and prints rewrite suggestions.
#[derive(Parser, Debug)]
#[command(name = "analyzer", version)]
struct Cli {
    /// Resume file (.pdf, .doc, .docx, .txt).
    resume: PathBuf,

    /// Job catalog: a JSON array of postings.
    #[arg(long)]
    catalog: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume analyzer v{}", env!("CARGO_PKG_VERSION"));

    let catalog_json = tokio::fs::read_to_string(&cli.catalog)
        .await
        .with_context(|| format!("cannot read catalog {}", cli.catalog.display()))?;
    let catalog: Vec<JobPosting> = serde_json::from_str(&catalog_json)
        .with_context(|| format!("{} is not a JSON array of job postings", cli.catalog.display()))?;
    info!(jobs = catalog.len(), "job catalog loaded");

    // The upload surface derives the declared MIME type from the file
    // extension; validation inside the session still governs acceptance.
    let mime = DocumentKind::from_extension(&cli.resume)
        .map(|kind| kind.mime())
        .unwrap_or("application/octet-stream");
    let name = cli
        .resume
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();

    let mut session = AnalysisSession::new(
        Arc::new(TokenOverlapScorer::new(
            config.score_floor,
            config.score_ceiling,
        )),
        Arc::new(HeuristicAdvisor),
    );

    let mut progress = session.progress();
    let watcher = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            info!(percent = *progress.borrow(), "processing resume");
        }
    });

    let outcome = async {
        session
            .upload(&name, mime, UploadSource::Path(cli.resume.clone()))
            .await?;
        session.analyze(&catalog).await
    }
    .await;
    watcher.abort();

    if let Err(err) = outcome {
        let notice = err.notice();
        warn!("{}: {}", notice.title, notice.description);
        anyhow::bail!("{}", notice.title);
    }

    print_results(&session);
    Ok(())
}

fn print_results(session: &AnalysisSession) {
    println!("\nJob Matches");
    println!("===========");
    if session.matches().is_empty() {
        println!("(none)");
    }
    for m in session.matches() {
        println!(
            "{:>3}% [{:<8}] {} at {} ({}, {})",
            m.match_percentage,
            m.strength().label(),
            m.job.title,
            m.job.company,
            m.job.location,
            m.job.salary,
        );
    }

    println!("\nImprove Resume");
    println!("==============");
    if session.suggestions().is_empty() {
        println!("(no suggestions)");
    }
    for (i, s) in session.suggestions().iter().enumerate() {
        println!("\n{}. {}", i + 1, s.section);
        println!("   Current:    {}", s.current);
        println!("   Suggestion: {}", s.suggestion);
        println!("   Why:        {}", s.reasoning);
    }

    for w in session.warnings() {
        println!("\nNote: {}: {}", w.title, w.description);
    }
}
