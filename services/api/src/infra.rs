use metrics_exporter_prometheus::PrometheusHandle;
use risk_profiler::error::AppError;
use risk_profiler::workflows::risk_profile::{
    ProfileSession, QuestionnaireSubmission, SessionId, SessionRepository, SessionStoreError,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store; sessions vanish on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionId, ProfileSession>>>,
}

impl InMemorySessionRepository {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, ProfileSession>>, SessionStoreError>
    {
        self.sessions
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self, id: &SessionId) -> Result<Option<ProfileSession>, SessionStoreError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn store(&self, session: ProfileSession) -> Result<(), SessionStoreError> {
        self.guard()?.insert(session.id.clone(), session);
        Ok(())
    }

    fn clear(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.guard()?.remove(id);
        Ok(())
    }
}

/// Reads a questionnaire submission saved as JSON.
pub(crate) fn read_submission(path: &Path) -> Result<QuestionnaireSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let submission = serde_json::from_str(&raw)?;
    Ok(submission)
}
