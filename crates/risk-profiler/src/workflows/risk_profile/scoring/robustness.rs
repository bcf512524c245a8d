use super::super::domain::RobustnessFlag;
use super::config::ScoringPolicy;

pub(crate) struct FlagSignals {
    pub score: u8,
    pub neutral_count: u8,
    pub swing_discomfort: bool,
    pub limited_experience: bool,
}

/// Advisory flags in fixed order. Every applicable flag is reported.
pub(crate) fn robustness_flags(signals: &FlagSignals, policy: &ScoringPolicy) -> Vec<RobustnessFlag> {
    let mut flags = Vec::new();
    let high_score = signals.score >= policy.high_score_threshold;

    if signals.neutral_count >= policy.neutral_flag_threshold {
        flags.push(RobustnessFlag::ManyNeutralAnswers);
    }
    if high_score && signals.swing_discomfort {
        flags.push(RobustnessFlag::SwingDiscomfort);
    }
    if high_score && signals.limited_experience {
        flags.push(RobustnessFlag::LimitedExperience);
    }

    flags
}
