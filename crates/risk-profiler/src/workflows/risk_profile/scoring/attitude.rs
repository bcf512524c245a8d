use super::super::domain::{
    LikertChoice, RiskBand, ATTITUDE_STATEMENTS, STATEMENT_COUNT,
};
use serde::Serialize;

const MIN_RAW_TOTAL: u32 = STATEMENT_COUNT as u32;
const MAX_RAW_TOTAL: u32 = STATEMENT_COUNT as u32 * 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiskAttitudeResult {
    pub raw_total: u8,
    pub score: u8,
    pub band: RiskBand,
    pub neutral_count: u8,
}

pub(crate) fn score_attitude(choices: &[LikertChoice; STATEMENT_COUNT]) -> RiskAttitudeResult {
    let raw_total: u32 = ATTITUDE_STATEMENTS
        .iter()
        .zip(choices)
        .map(|(statement, choice)| u32::from(statement.scored_value(*choice)))
        .sum();

    let neutral_count = choices
        .iter()
        .filter(|choice| **choice == LikertChoice::NoStrongOpinion)
        .count() as u8;

    let score = normalise(raw_total);

    RiskAttitudeResult {
        raw_total: raw_total as u8,
        score,
        band: RiskBand::from_score(score),
        neutral_count,
    }
}

/// Maps a raw total in 12..=60 onto 0..=100, rounding half to even.
pub(crate) fn normalise(raw_total: u32) -> u8 {
    let span = MAX_RAW_TOTAL - MIN_RAW_TOTAL;
    let numerator = raw_total.clamp(MIN_RAW_TOTAL, MAX_RAW_TOTAL).saturating_sub(MIN_RAW_TOTAL) * 100;
    let quotient = numerator / span;
    let remainder = numerator % span;

    let rounded = match (remainder * 2).cmp(&span) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    };

    u8::try_from(rounded).unwrap_or(100)
}
