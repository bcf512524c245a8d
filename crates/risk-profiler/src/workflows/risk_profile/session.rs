use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::scoring::ProfileResults;

/// Identifier wrapper for a profiling session (one adviser working one client).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfilerPage {
    #[default]
    Questionnaire,
    Results,
}

impl ProfilerPage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Questionnaire => "Questionnaire",
            Self::Results => "Results",
        }
    }
}

/// Per-session state: the page being viewed and the latest scored submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSession {
    pub id: SessionId,
    pub page: ProfilerPage,
    pub results: Option<ProfileResults>,
    pub submitted_at: Option<NaiveDateTime>,
}

impl ProfileSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            page: ProfilerPage::Questionnaire,
            results: None,
            submitted_at: None,
        }
    }

    /// Replaces any earlier results and moves the session to the results page.
    pub fn record(&mut self, results: ProfileResults, submitted_at: NaiveDateTime) {
        self.results = Some(results);
        self.submitted_at = Some(submitted_at);
        self.page = ProfilerPage::Results;
    }

    pub fn can_view_results(&self) -> bool {
        self.results.is_some()
    }
}

/// Storage seam for session state so the service can run against any backend.
pub trait SessionRepository: Send + Sync {
    fn load(&self, id: &SessionId) -> Result<Option<ProfileSession>, SessionStoreError>;
    fn store(&self, session: ProfileSession) -> Result<(), SessionStoreError>;
    fn clear(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
