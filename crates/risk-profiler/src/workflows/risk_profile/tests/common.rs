use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::workflows::risk_profile::domain::{
    AlternativesSettings, CapacityAnswers, DebtBurden, EmergencyFund, IncomeStability,
    LikertChoice, PortfolioDependence, QuestionnaireInput, StatementScoring, WithdrawalLikelihood,
    ATTITUDE_STATEMENTS, STATEMENT_COUNT,
};
use crate::workflows::risk_profile::intake::QuestionnaireSubmission;
use crate::workflows::risk_profile::scoring::ScoringPolicy;
use crate::workflows::risk_profile::service::RiskProfilerService;
use crate::workflows::risk_profile::session::{
    ProfileSession, SessionId, SessionRepository, SessionStoreError,
};

pub(super) fn uniform(choice: LikertChoice) -> [LikertChoice; STATEMENT_COUNT] {
    [choice; STATEMENT_COUNT]
}

/// Agree with every normal statement and disagree with every reverse one.
pub(super) fn leaning(
    normal: LikertChoice,
    reverse: LikertChoice,
) -> [LikertChoice; STATEMENT_COUNT] {
    let mut choices = uniform(LikertChoice::NoStrongOpinion);
    for (choice, statement) in choices.iter_mut().zip(ATTITUDE_STATEMENTS.iter()) {
        *choice = match statement.scoring {
            StatementScoring::Normal => normal,
            StatementScoring::Reverse => reverse,
        };
    }
    choices
}

pub(super) fn aggressive_choices() -> [LikertChoice; STATEMENT_COUNT] {
    leaning(LikertChoice::Agree, LikertChoice::Disagree)
}

pub(super) fn best_capacity() -> CapacityAnswers {
    CapacityAnswers {
        emergency_months: EmergencyFund::TwelvePlusMonths,
        income_stability: IncomeStability::VeryStable,
        withdrawal_need: WithdrawalLikelihood::VeryUnlikely,
        debt_burden: DebtBurden::None,
        portfolio_dependence: PortfolioDependence::NotDependent,
    }
}

pub(super) fn worst_capacity() -> CapacityAnswers {
    CapacityAnswers {
        emergency_months: EmergencyFund::UnderThreeMonths,
        income_stability: IncomeStability::Unstable,
        withdrawal_need: WithdrawalLikelihood::VeryLikely,
        debt_burden: DebtBurden::High,
        portfolio_dependence: PortfolioDependence::HighlyDependent,
    }
}

pub(super) fn ungated() -> AlternativesSettings {
    AlternativesSettings {
        limited_experience_gate: false,
        ..AlternativesSettings::default()
    }
}

pub(super) fn input(
    attitude_choices: [LikertChoice; STATEMENT_COUNT],
    capacity: CapacityAnswers,
    alternatives: AlternativesSettings,
) -> QuestionnaireInput {
    QuestionnaireInput {
        attitude_choices,
        capacity,
        alternatives,
    }
}

pub(super) fn aggressive_input() -> QuestionnaireInput {
    input(aggressive_choices(), best_capacity(), AlternativesSettings::default())
}

pub(super) fn submission() -> QuestionnaireSubmission {
    QuestionnaireSubmission::from(&aggressive_input())
}

pub(super) fn submitted_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 2)
        .and_then(|date| date.and_hms_opt(14, 30, 0))
        .expect("valid timestamp")
}

pub(super) fn session_id(value: &str) -> SessionId {
    SessionId(value.to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemorySessions {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, ProfileSession>>>,
}

impl SessionRepository for MemorySessions {
    fn load(&self, id: &SessionId) -> Result<Option<ProfileSession>, SessionStoreError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn store(&self, session: ProfileSession) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    fn clear(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.remove(id);
        Ok(())
    }
}

pub(super) struct UnavailableSessions;

impl SessionRepository for UnavailableSessions {
    fn load(&self, _id: &SessionId) -> Result<Option<ProfileSession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn store(&self, _session: ProfileSession) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }

    fn clear(&self, _id: &SessionId) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("cache offline".to_string()))
    }
}

pub(super) fn build_service() -> (RiskProfilerService<MemorySessions>, Arc<MemorySessions>) {
    let repository = Arc::new(MemorySessions::default());
    let service = RiskProfilerService::new(
        repository.clone(),
        ScoringPolicy::default(),
        "Amberstone Capital",
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
