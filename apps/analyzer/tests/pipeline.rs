//! End-to-end pipeline scenarios driven through the public API: a resume
//! file on disk, a four-posting catalog, and a session taken from upload
//! to results.

use std::io::Write;

use analyzer::models::job::{EmploymentType, JobPosting};
use analyzer::session::{AnalysisSession, Phase, ResultsTab, UploadSource};

fn catalog() -> Vec<JobPosting> {
    let mk = |id: &str, title: &str, description: &str| JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        salary: "$120k - $150k".to_string(),
        employment_type: EmploymentType::FullTime,
        description: description.to_string(),
        posted_date: "3 days ago".to_string(),
    };
    vec![
        mk("backend", "Backend Engineer", "Rust services, tokio, PostgreSQL"),
        mk("frontend", "Frontend Engineer", "React, TypeScript, CSS"),
        mk("platform", "Platform Engineer", "Kubernetes, Terraform, Golang"),
        mk("writer", "Technical Writer", "Documentation, developer guides"),
    ]
}

fn write_resume(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn ten_kb_text_resume_yields_four_ranked_matches() {
    // Roughly 10 KB of plain text, well under the 5 MiB cap.
    let body = "Rust engineer. Worked on tokio services and distributed systems.\n".repeat(160);
    let file = write_resume(&body);

    let mut session = AnalysisSession::default();
    session
        .upload(
            "resume.txt",
            "text/plain",
            UploadSource::Path(file.path().to_path_buf()),
        )
        .await
        .unwrap();
    session.analyze(&catalog()).await.unwrap();

    assert_eq!(*session.phase(), Phase::Ready);
    assert_eq!(session.matches().len(), 4);
    for pair in session.matches().windows(2) {
        assert!(pair[0].match_percentage >= pair[1].match_percentage);
    }
    for m in session.matches() {
        assert!(m.match_percentage <= 100);
    }
    assert_eq!(session.active_tab(), ResultsTab::Matches);
}

#[tokio::test]
async fn empty_resume_file_still_scores_every_posting() {
    let file = write_resume("");
    let mut session = AnalysisSession::default();
    session
        .upload(
            "empty.txt",
            "text/plain",
            UploadSource::Path(file.path().to_path_buf()),
        )
        .await
        .unwrap();
    session.analyze(&catalog()).await.unwrap();

    assert_eq!(session.matches().len(), 4);
    assert_eq!(*session.phase(), Phase::Ready);
}

#[tokio::test]
async fn weak_resume_produces_complete_suggestion_cards() {
    let file = write_resume(
        "Experienced developer with programming skills.\n\
         Skills: React, JavaScript, CSS\n\
         - Responsible for developing websites.\n",
    );
    let mut session = AnalysisSession::default();
    session
        .upload(
            "resume.txt",
            "text/plain",
            UploadSource::Path(file.path().to_path_buf()),
        )
        .await
        .unwrap();
    session.analyze(&catalog()).await.unwrap();

    assert!(!session.suggestions().is_empty());
    for item in session.suggestions() {
        assert!(item.is_complete(), "partial suggestion: {item:?}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn observed_progress_is_monotonic_and_ends_at_100() {
    let file = write_resume(&"Rust engineer resume body.\n".repeat(50));

    let mut session = AnalysisSession::default();
    let mut rx = session.progress();
    let recorder = tokio::spawn(async move {
        let mut seen = vec![*rx.borrow()];
        while rx.changed().await.is_ok() {
            seen.push(*rx.borrow());
        }
        seen
    });

    session
        .upload(
            "resume.txt",
            "text/plain",
            UploadSource::Path(file.path().to_path_buf()),
        )
        .await
        .unwrap();
    assert_eq!(*session.progress().borrow(), 100);

    // Dropping the session closes the channel and ends the recorder.
    drop(session);
    let seen = recorder.await.unwrap();
    for pair in seen.windows(2) {
        assert!(pair[0] <= pair[1], "progress went backwards: {seen:?}");
    }
    assert_eq!(*seen.last().unwrap(), 100);
}

#[tokio::test]
async fn retry_after_error_starts_from_a_clean_session() {
    let mut session = AnalysisSession::default();
    session
        .upload(
            "missing.txt",
            "text/plain",
            UploadSource::Path("/nonexistent/missing.txt".into()),
        )
        .await
        .unwrap_err();
    assert!(matches!(session.phase(), Phase::Error(_)));

    session.reset();
    assert_eq!(*session.phase(), Phase::Idle);
    assert!(session.matches().is_empty());
    assert!(session.suggestions().is_empty());

    let file = write_resume("Rust engineer.");
    session
        .upload(
            "resume.txt",
            "text/plain",
            UploadSource::Path(file.path().to_path_buf()),
        )
        .await
        .unwrap();
    session.analyze(&catalog()).await.unwrap();
    assert_eq!(*session.phase(), Phase::Ready);
}
