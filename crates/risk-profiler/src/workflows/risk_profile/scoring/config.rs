use super::super::domain::{ProfileError, STATEMENT_COUNT};

const DEFAULT_EXPERIENCE_STATEMENT: usize = 9;
const DEFAULT_NEUTRAL_FLAG_THRESHOLD: u8 = 6;
const DEFAULT_HIGH_SCORE_THRESHOLD: u8 = 68;
const DEFAULT_AGREEMENT_THRESHOLD: u8 = 4;

/// Policy dials for gating and robustness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    experience_statement: usize,
    pub neutral_flag_threshold: u8,
    pub high_score_threshold: u8,
    /// Raw Likert value at or above which a statement counts as agreed with.
    pub agreement_threshold: u8,
}

impl ScoringPolicy {
    /// Points the limited-experience gate and flag at another statement (1-based).
    pub fn with_experience_statement(statement: usize) -> Result<Self, ProfileError> {
        if !(1..=STATEMENT_COUNT).contains(&statement) {
            return Err(ProfileError::StatementOutOfRange(statement));
        }

        Ok(Self {
            experience_statement: statement,
            ..Self::default()
        })
    }

    pub fn experience_statement(&self) -> usize {
        self.experience_statement
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            experience_statement: DEFAULT_EXPERIENCE_STATEMENT,
            neutral_flag_threshold: DEFAULT_NEUTRAL_FLAG_THRESHOLD,
            high_score_threshold: DEFAULT_HIGH_SCORE_THRESHOLD,
            agreement_threshold: DEFAULT_AGREEMENT_THRESHOLD,
        }
    }
}
