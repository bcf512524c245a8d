use std::sync::Arc;

use super::common::*;
use crate::workflows::risk_profile::domain::{LikertChoice, RiskBand};
use crate::workflows::risk_profile::intake::QuestionnaireSubmission;
use crate::workflows::risk_profile::scoring::ScoringPolicy;
use crate::workflows::risk_profile::service::{ProfilerServiceError, RiskProfilerService};
use crate::workflows::risk_profile::session::{ProfilerPage, SessionRepository};

#[test]
fn submit_records_results_and_opens_results_page() {
    let (service, repository) = build_service();
    let id = session_id("adviser-1");

    let session = service
        .submit(&id, submission(), submitted_at())
        .expect("submission scores");

    assert_eq!(session.page, ProfilerPage::Results);
    assert_eq!(session.submitted_at, Some(submitted_at()));
    let results = session.results.as_ref().expect("results stored");
    assert_eq!(results.final_band, RiskBand::Adventurous);

    let stored = repository
        .load(&id)
        .expect("store reachable")
        .expect("session persisted");
    assert_eq!(stored, session);
}

#[test]
fn resubmission_replaces_previous_results() {
    let (service, _) = build_service();
    let id = session_id("adviser-1");
    service
        .submit(&id, submission(), submitted_at())
        .expect("first submission");

    let neutral = QuestionnaireSubmission::from(&input(
        uniform(LikertChoice::NoStrongOpinion),
        best_capacity(),
        ungated(),
    ));
    service
        .submit(&id, neutral, submitted_at())
        .expect("second submission");

    let results = service.results(&id).expect("results available");
    assert_eq!(results.final_band, RiskBand::Balanced);
}

#[test]
fn rejected_submission_leaves_session_untouched() {
    let (service, repository) = build_service();
    let id = session_id("adviser-1");
    service
        .submit(&id, submission(), submitted_at())
        .expect("first submission");

    let mut incomplete = submission();
    incomplete.income_stability = None;
    let error = service
        .submit(&id, incomplete, submitted_at())
        .expect_err("incomplete submission");
    assert!(matches!(error, ProfilerServiceError::Profile(_)));

    let stored = repository
        .load(&id)
        .expect("store reachable")
        .expect("session kept");
    assert_eq!(
        stored.results.map(|results| results.final_band),
        Some(RiskBand::Adventurous)
    );
}

#[test]
fn unknown_session_starts_on_questionnaire() {
    let (service, repository) = build_service();
    let id = session_id("fresh");

    let session = service.session(&id).expect("session loads");
    assert_eq!(session.page, ProfilerPage::Questionnaire);
    assert!(session.results.is_none());
    assert!(repository.load(&id).expect("store reachable").is_none());
}

#[test]
fn results_page_requires_a_scored_submission() {
    let (service, _) = build_service();
    let id = session_id("fresh");

    let error = service
        .navigate(&id, ProfilerPage::Results)
        .expect_err("no results yet");
    assert!(matches!(error, ProfilerServiceError::NoResults(ref missing) if *missing == id));
    assert!(matches!(
        service.file_note(&id),
        Err(ProfilerServiceError::NoResults(_))
    ));
    assert!(matches!(
        service.export_report(&id, submitted_at()),
        Err(ProfilerServiceError::NoResults(_))
    ));
}

#[test]
fn navigation_keeps_results_available() {
    let (service, _) = build_service();
    let id = session_id("adviser-1");
    service
        .submit(&id, submission(), submitted_at())
        .expect("submission scores");

    let back = service
        .navigate(&id, ProfilerPage::Questionnaire)
        .expect("back to questionnaire");
    assert_eq!(back.page, ProfilerPage::Questionnaire);
    assert!(back.can_view_results());

    let forward = service
        .navigate(&id, ProfilerPage::Results)
        .expect("results still available");
    assert_eq!(forward.page, ProfilerPage::Results);
}

#[test]
fn file_note_uses_configured_firm_name() {
    let repository = Arc::new(MemorySessions::default());
    let service = RiskProfilerService::new(
        repository,
        ScoringPolicy::default(),
        "Harbour Wealth",
    );
    let id = session_id("adviser-1");
    service
        .submit(&id, submission(), submitted_at())
        .expect("submission scores");

    let note = service.file_note(&id).expect("note renders");
    assert!(note.starts_with("Harbour Wealth – Risk profiling summary\n\n"));
    assert!(note.contains("- Score: 75/100\n"));
    assert!(note.contains("- Adventurous (68–79)\n"));
    assert!(note.contains("- Not gated\n"));
    assert!(note.contains("- Max Alternatives: 10%\n"));
    assert!(note.ends_with("Robustness flags:\n- None"));
}

#[test]
fn export_report_names_file_after_firm_and_time() {
    let (service, _) = build_service();
    let id = session_id("adviser-1");
    service
        .submit(&id, submission(), submitted_at())
        .expect("submission scores");

    let export = service
        .export_report(&id, submitted_at())
        .expect("report renders");
    assert_eq!(export.file_name, "AmberstoneCapital_Risk_Profile_20250602_1430.txt");
    assert_eq!(export.content_type, "text/plain; charset=utf-8");

    let text = String::from_utf8(export.bytes).expect("utf-8 report");
    assert!(text.contains("CLIENT RISK PROFILE SUMMARY"));
    assert!(text.contains("2025-06-02 14:30"));
}

#[test]
fn reset_clears_results() {
    let (service, repository) = build_service();
    let id = session_id("adviser-1");
    service
        .submit(&id, submission(), submitted_at())
        .expect("submission scores");

    service.reset(&id).expect("reset succeeds");

    assert!(repository.load(&id).expect("store reachable").is_none());
    let session = service.session(&id).expect("session loads");
    assert_eq!(session.page, ProfilerPage::Questionnaire);
    assert!(matches!(
        service.results(&id),
        Err(ProfilerServiceError::NoResults(_))
    ));
}

#[test]
fn sessions_are_isolated() {
    let (service, _) = build_service();
    let first = session_id("adviser-1");
    let second = session_id("adviser-2");

    service
        .submit(&first, submission(), submitted_at())
        .expect("submission scores");

    assert!(service.results(&first).is_ok());
    assert!(service.results(&second).is_err());
}

#[test]
fn store_failures_surface_as_store_errors() {
    let service = RiskProfilerService::new(
        Arc::new(UnavailableSessions),
        ScoringPolicy::default(),
        "Amberstone Capital",
    );
    let id = session_id("adviser-1");

    let error = service
        .submit(&id, submission(), submitted_at())
        .expect_err("store offline");
    assert!(matches!(error, ProfilerServiceError::Store(_)));
    assert!(error.to_string().contains("cache offline"));

    // stateless scoring never touches the store
    assert!(service.score(submission()).is_ok());
}
