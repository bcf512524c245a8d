use serde::Serialize;

use super::super::domain::{
    AllocationLimits, CapacityBand, CapacityQuestion, RiskBand,
};
use super::super::scoring::ProfileResults;
use super::super::session::{ProfileSession, ProfilerPage, SessionId};

#[derive(Debug, Clone, Serialize)]
pub struct CapacityInputView {
    pub question: CapacityQuestion,
    pub question_label: &'static str,
    pub answer: &'static str,
}

/// Labelled rendering of [`ProfileResults`] for API consumers and renderers.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResultsView {
    pub risk_attitude_score: u8,
    pub risk_attitude_band: RiskBand,
    pub risk_attitude_band_label: &'static str,
    pub neutral_count: u8,
    pub cap_points: u8,
    pub capacity_band: CapacityBand,
    pub capacity_band_label: &'static str,
    pub capacity_max_allowed_band: RiskBand,
    pub capacity_max_allowed_band_label: &'static str,
    pub final_band: RiskBand,
    pub final_band_label: &'static str,
    pub override_applied: bool,
    pub base_limits: AllocationLimits,
    pub final_limits: AllocationLimits,
    pub alt_forced_zero_reasons: Vec<&'static str>,
    pub flags: Vec<&'static str>,
    pub alts_in_scope: Vec<&'static str>,
    pub capacity_inputs: Vec<CapacityInputView>,
}

impl From<&ProfileResults> for ProfileResultsView {
    fn from(results: &ProfileResults) -> Self {
        Self {
            risk_attitude_score: results.risk_attitude.score,
            risk_attitude_band: results.risk_attitude.band,
            risk_attitude_band_label: results.risk_attitude.band.label(),
            neutral_count: results.risk_attitude.neutral_count,
            cap_points: results.capacity.points,
            capacity_band: results.capacity.band,
            capacity_band_label: results.capacity.band.label(),
            capacity_max_allowed_band: results.capacity.max_allowed_band,
            capacity_max_allowed_band_label: results.capacity.max_allowed_band.label(),
            final_band: results.final_band,
            final_band_label: results.final_band.label(),
            override_applied: results.override_applied,
            base_limits: results.base_limits,
            final_limits: results.final_limits,
            alt_forced_zero_reasons: results
                .alt_forced_zero_reasons
                .iter()
                .map(|reason| reason.message())
                .collect(),
            flags: results.flags.iter().map(|flag| flag.message()).collect(),
            alts_in_scope: results
                .alts_in_scope
                .iter()
                .map(|scope| scope.label())
                .collect(),
            capacity_inputs: results
                .capacity_inputs
                .labelled()
                .into_iter()
                .map(|(question, answer)| CapacityInputView {
                    question,
                    question_label: question.label(),
                    answer,
                })
                .collect(),
        }
    }
}

/// What a session currently shows.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub page: ProfilerPage,
    pub page_label: &'static str,
    pub results_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ProfileResultsView>,
}

impl From<&ProfileSession> for SessionView {
    fn from(session: &ProfileSession) -> Self {
        Self {
            session_id: session.id.clone(),
            page: session.page,
            page_label: session.page.label(),
            results_available: session.can_view_results(),
            results: session.results.as_ref().map(ProfileResultsView::from),
        }
    }
}
