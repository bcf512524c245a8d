use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::domain::ProfileError;
use super::intake::QuestionnaireSubmission;
use super::report::{file_note, ReportExport};
use super::scoring::{ProfileResults, ScoringEngine, ScoringPolicy};
use super::session::{
    ProfileSession, ProfilerPage, SessionId, SessionRepository, SessionStoreError,
};

pub const DEFAULT_FIRM_NAME: &str = "Amberstone Capital";

/// Service composing intake validation, the scoring engine, and session storage.
pub struct RiskProfilerService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    firm_name: String,
}

impl<R> RiskProfilerService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: ScoringPolicy, firm_name: impl Into<String>) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(policy)),
            firm_name: firm_name.into(),
        }
    }

    pub fn firm_name(&self) -> &str {
        &self.firm_name
    }

    /// Scores a submission without touching any session.
    pub fn score(
        &self,
        submission: QuestionnaireSubmission,
    ) -> Result<ProfileResults, ProfilerServiceError> {
        let input = submission.into_input().map_err(|error| {
            warn!(%error, "questionnaire rejected");
            error
        })?;
        Ok(self.engine.score(&input))
    }

    /// Validates and scores a submission, replacing the session's previous results.
    pub fn submit(
        &self,
        session_id: &SessionId,
        submission: QuestionnaireSubmission,
        submitted_at: NaiveDateTime,
    ) -> Result<ProfileSession, ProfilerServiceError> {
        let results = self.score(submission)?;
        let mut session = self.load_or_new(session_id)?;

        info!(
            session = %session_id,
            final_band = results.final_band.label(),
            override_applied = results.override_applied,
            "questionnaire scored"
        );

        session.record(results, submitted_at);
        self.repository.store(session.clone())?;
        Ok(session)
    }

    /// Current session state; unknown sessions start on the questionnaire page.
    pub fn session(&self, session_id: &SessionId) -> Result<ProfileSession, ProfilerServiceError> {
        self.load_or_new(session_id)
    }

    /// Switches page. The results page is unavailable until a submission is scored.
    pub fn navigate(
        &self,
        session_id: &SessionId,
        page: ProfilerPage,
    ) -> Result<ProfileSession, ProfilerServiceError> {
        let mut session = self.load_or_new(session_id)?;
        if page == ProfilerPage::Results && !session.can_view_results() {
            return Err(ProfilerServiceError::NoResults(session_id.clone()));
        }
        session.page = page;
        self.repository.store(session.clone())?;
        Ok(session)
    }

    pub fn results(&self, session_id: &SessionId) -> Result<ProfileResults, ProfilerServiceError> {
        self.load_or_new(session_id)?
            .results
            .ok_or_else(|| ProfilerServiceError::NoResults(session_id.clone()))
    }

    pub fn file_note(&self, session_id: &SessionId) -> Result<String, ProfilerServiceError> {
        let results = self.results(session_id)?;
        Ok(file_note(&results, &self.firm_name))
    }

    pub fn export_report(
        &self,
        session_id: &SessionId,
        generated_at: NaiveDateTime,
    ) -> Result<ReportExport, ProfilerServiceError> {
        let results = self.results(session_id)?;
        let export = ReportExport::build(&results, &self.firm_name, generated_at);
        info!(session = %session_id, file = %export.file_name, "report exported");
        Ok(export)
    }

    /// Drops any results and returns the session to the questionnaire.
    pub fn reset(&self, session_id: &SessionId) -> Result<(), ProfilerServiceError> {
        self.repository.clear(session_id)?;
        Ok(())
    }

    fn load_or_new(&self, session_id: &SessionId) -> Result<ProfileSession, ProfilerServiceError> {
        let session = self
            .repository
            .load(session_id)?
            .unwrap_or_else(|| ProfileSession::new(session_id.clone()));
        Ok(session)
    }
}

/// Error raised by the profiler service.
#[derive(Debug, thiserror::Error)]
pub enum ProfilerServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("no results found for session {0}; complete the questionnaire first")]
    NoResults(SessionId),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
