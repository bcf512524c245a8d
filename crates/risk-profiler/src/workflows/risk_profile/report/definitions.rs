use serde::Serialize;

/// Static advisory text shown alongside the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryNotes {
    pub alternatives_scope: [&'static str; 3],
    pub reminders: [&'static str; 2],
    pub footer: &'static str,
}

pub const ADVISORY_NOTES: AdvisoryNotes = AdvisoryNotes {
    alternatives_scope: [
        "Publicly traded REITs",
        "Publicly traded commodity funds",
        "Optionally, some publicly traded equities may be treated as “alternative-like” internally (classification only)",
    ],
    reminders: [
        "Risk attitude ≠ suitability by itself. Also consider time horizon, need to take risk, and liquidity needs.",
        "This tool outputs maximum caps, not target allocations.",
    ],
    footer: "Internal advisory tool only. This application provides risk profiling information, not investment advice. Final suitability decisions rest with the adviser.",
};
