mod allocation;
mod attitude;
mod capacity;
mod config;
mod robustness;

pub use attitude::RiskAttitudeResult;
pub use capacity::CapacityResult;
pub use config::ScoringPolicy;

use super::domain::{
    AllocationLimits, AlternativeScope, CapacityAnswers, GateReason, QuestionnaireInput, RiskBand,
    RobustnessFlag, SWING_DISCOMFORT_STATEMENT,
};
use allocation::{alternatives_in_scope, apply_gates, gate_reasons, reconcile_bands, GateSignals};
use robustness::{robustness_flags, FlagSignals};
use serde::Serialize;
use tracing::debug;

/// Stateless engine applying a scoring policy to a completed questionnaire.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Runs attitude, capacity, reconciliation, gating and robustness in that order.
    pub fn score(&self, input: &QuestionnaireInput) -> ProfileResults {
        let risk_attitude = attitude::score_attitude(&input.attitude_choices);
        let capacity = capacity::score_capacity(&input.capacity);

        let (final_band, override_applied) =
            reconcile_bands(risk_attitude.band, capacity.max_allowed_band);

        let limited_experience = self.agrees_with(input, self.policy.experience_statement());
        let swing_discomfort = self.agrees_with(input, SWING_DISCOMFORT_STATEMENT);

        let base_limits = final_band.policy_limits();
        let alt_forced_zero_reasons = gate_reasons(&GateSignals {
            withdrawal_need: input.capacity.withdrawal_need,
            capacity_band: capacity.band,
            limited_experience_gate: input.alternatives.limited_experience_gate,
            limited_experience,
        });
        let final_limits = apply_gates(base_limits, &alt_forced_zero_reasons);

        let flags = robustness_flags(
            &FlagSignals {
                score: risk_attitude.score,
                neutral_count: risk_attitude.neutral_count,
                swing_discomfort,
                limited_experience,
            },
            &self.policy,
        );

        debug!(
            score = risk_attitude.score,
            capacity_points = capacity.points,
            final_band = final_band.label(),
            override_applied,
            gated = !alt_forced_zero_reasons.is_empty(),
            flags = flags.len(),
            "risk profile scored"
        );

        ProfileResults {
            risk_attitude,
            capacity,
            final_band,
            override_applied,
            base_limits,
            final_limits,
            alt_forced_zero_reasons,
            flags,
            alts_in_scope: alternatives_in_scope(&input.alternatives),
            capacity_inputs: input.capacity,
        }
    }

    /// True when the raw (unreversed) answer to `statement` meets the agreement threshold.
    fn agrees_with(&self, input: &QuestionnaireInput, statement: usize) -> bool {
        statement
            .checked_sub(1)
            .and_then(|index| input.attitude_choices.get(index))
            .map(|choice| choice.value() >= self.policy.agreement_threshold)
            .unwrap_or(false)
    }
}

/// Scores `input` under the default policy.
pub fn compute_results(input: &QuestionnaireInput) -> ProfileResults {
    ScoringEngine::default().score(input)
}

/// Complete outcome of one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResults {
    pub risk_attitude: RiskAttitudeResult,
    pub capacity: CapacityResult,
    pub final_band: RiskBand,
    pub override_applied: bool,
    pub base_limits: AllocationLimits,
    pub final_limits: AllocationLimits,
    pub alt_forced_zero_reasons: Vec<GateReason>,
    pub flags: Vec<RobustnessFlag>,
    pub alts_in_scope: Vec<AlternativeScope>,
    pub capacity_inputs: CapacityAnswers,
}

impl ProfileResults {
    pub fn alternatives_gated(&self) -> bool {
        !self.alt_forced_zero_reasons.is_empty()
    }
}
