//! Client risk profiling: questionnaire intake, scoring, session state, and reporting.
//!
//! The scoring engine is a pure function of a completed [`QuestionnaireInput`]. Everything
//! around it (intake validation, sessions, file notes, report export, HTTP routes) consumes
//! [`ProfileResults`] read-only.

pub mod domain;
pub mod intake;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    AllocationLimits, AlternativeScope, AlternativesSettings, AttitudeStatement, CapacityAnswers,
    CapacityBand, CapacityOption, CapacityQuestion, DebtBurden, EmergencyFund, GateReason,
    IncomeStability, LikertChoice, PortfolioDependence, ProfileError, QuestionnaireInput,
    RiskBand, RobustnessFlag, StatementScoring, WithdrawalLikelihood, ATTITUDE_STATEMENTS,
    STATEMENT_COUNT,
};
pub use intake::QuestionnaireSubmission;
pub use report::{file_note, render_report, ReportExport, ADVISORY_NOTES};
pub use router::profile_router;
pub use scoring::{
    compute_results, CapacityResult, ProfileResults, RiskAttitudeResult, ScoringEngine,
    ScoringPolicy,
};
pub use service::{ProfilerServiceError, RiskProfilerService, DEFAULT_FIRM_NAME};
pub use session::{ProfileSession, ProfilerPage, SessionId, SessionRepository, SessionStoreError};
