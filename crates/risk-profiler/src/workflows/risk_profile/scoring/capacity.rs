use super::super::domain::{CapacityAnswers, CapacityBand, CapacityOption, RiskBand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CapacityResult {
    pub points: u8,
    pub band: CapacityBand,
    pub max_allowed_band: RiskBand,
}

pub(crate) fn score_capacity(answers: &CapacityAnswers) -> CapacityResult {
    let points = answers.emergency_months.points()
        + answers.income_stability.points()
        + answers.withdrawal_need.points()
        + answers.debt_burden.points()
        + answers.portfolio_dependence.points();

    let band = CapacityBand::from_points(points);

    CapacityResult {
        points,
        band,
        max_allowed_band: band.max_allowed_band(),
    }
}
