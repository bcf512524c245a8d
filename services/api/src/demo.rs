use crate::infra::{read_submission, InMemorySessionRepository};
use chrono::{Local, NaiveDateTime};
use clap::{Args, ValueEnum};
use risk_profiler::config::AppConfig;
use risk_profiler::error::AppError;
use risk_profiler::workflows::risk_profile::report::views::ProfileResultsView;
use risk_profiler::workflows::risk_profile::{
    CapacityQuestion, LikertChoice, QuestionnaireSubmission, RiskProfilerService, SessionId,
    ADVISORY_NOTES, ATTITUDE_STATEMENTS,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain-text summary for the client file
    #[default]
    Note,
    /// Paginated client risk profile report
    Report,
    /// Labelled results as JSON
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Questionnaire answers saved as JSON (same shape as the HTTP submission body)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Note)]
    pub(crate) format: OutputFormat,
    /// Firm name for headers and file names (defaults to PROFILER_FIRM_NAME)
    #[arg(long)]
    pub(crate) firm_name: Option<String>,
    /// Directory to write the report file into instead of printing it (report format only)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Firm name for headers and file names (defaults to PROFILER_FIRM_NAME)
    #[arg(long)]
    pub(crate) firm_name: Option<String>,
    /// Also print the paginated report after the file note
    #[arg(long)]
    pub(crate) include_report: bool,
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let ProfileArgs {
        input,
        format,
        firm_name,
        output_dir,
    } = args;

    let service = build_service(firm_name)?;
    let submission = read_submission(&input)?;
    let session_id = SessionId("cli".to_string());
    let now = Local::now().naive_local();
    service.submit(&session_id, submission, now)?;

    match format {
        OutputFormat::Note => println!("{}", service.file_note(&session_id)?),
        OutputFormat::Json => {
            let results = service.results(&session_id)?;
            let view = ProfileResultsView::from(&results);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Report => {
            let export = service.export_report(&session_id, now)?;
            match output_dir {
                Some(dir) => {
                    let path = dir.join(&export.file_name);
                    std::fs::write(&path, &export.bytes)?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{}", String::from_utf8_lossy(&export.bytes)),
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        firm_name,
        include_report,
    } = args;

    let service = build_service(firm_name)?;
    let session_id = SessionId("demo".to_string());
    let now = Local::now().naive_local();

    println!("Client risk profiler demo");
    println!("Sample client: growth-minded, modest cash buffer, may need a withdrawal soon\n");

    let session = service.submit(&session_id, sample_submission(), now)?;
    if let Some(results) = &session.results {
        println!(
            "Attitude {} ({}) capped by {} -> {}",
            results.risk_attitude.score,
            results.risk_attitude.band.label(),
            results.capacity.band.label(),
            results.final_band.label()
        );
    }
    println!();
    println!("{}", service.file_note(&session_id)?);

    if include_report {
        render_report(&service, &session_id, now)?;
    }

    println!();
    for reminder in ADVISORY_NOTES.reminders {
        println!("Note: {reminder}");
    }

    Ok(())
}

pub(crate) fn print_questions() {
    let scale: Vec<&str> = LikertChoice::ordered()
        .iter()
        .map(|choice| choice.label())
        .collect();

    println!("Risk attitude statements ({})", scale.join(" / "));
    for statement in ATTITUDE_STATEMENTS.iter() {
        println!("{:>2}. {}", statement.number, statement.text);
    }

    println!("\nCapacity for loss");
    for question in CapacityQuestion::ordered() {
        println!("- {}", question.prompt());
        for option in question.option_labels() {
            println!("    * {option}");
        }
    }
}

fn build_service(
    firm_name: Option<String>,
) -> Result<RiskProfilerService<InMemorySessionRepository>, AppError> {
    let config = AppConfig::load()?;
    let firm_name = firm_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or(config.profiler.firm_name);

    Ok(RiskProfilerService::new(
        Arc::new(InMemorySessionRepository::default()),
        config.profiler.scoring,
        firm_name,
    ))
}

fn render_report(
    service: &RiskProfilerService<InMemorySessionRepository>,
    session_id: &SessionId,
    generated_at: NaiveDateTime,
) -> Result<(), AppError> {
    let export = service.export_report(session_id, generated_at)?;
    println!("\n--- {} ---", export.file_name);
    print!("{}", String::from_utf8_lossy(&export.bytes));
    Ok(())
}

fn sample_submission() -> QuestionnaireSubmission {
    let attitude = [
        "Disagree",
        "Agree",
        "Disagree",
        "Disagree",
        "Agree",
        "No strong opinion",
        "Disagree",
        "Strongly agree",
        "Disagree",
        "Disagree",
        "Agree",
        "Agree",
    ];

    QuestionnaireSubmission {
        attitude_choices: attitude
            .iter()
            .map(|label| Some(label.to_string()))
            .collect(),
        emergency_months: Some("3–6 months".to_string()),
        income_stability: Some("Stable (salaried/contracted)".to_string()),
        withdrawal_need: Some("Somewhat likely".to_string()),
        debt_burden: Some("Moderate".to_string()),
        portfolio_dependence: Some("Not very dependent".to_string()),
        ..QuestionnaireSubmission::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_profiler::workflows::risk_profile::{RiskBand, ScoringPolicy, DEFAULT_FIRM_NAME};

    #[test]
    fn sample_submission_is_complete_and_capped() {
        let service = RiskProfilerService::new(
            Arc::new(InMemorySessionRepository::default()),
            ScoringPolicy::default(),
            DEFAULT_FIRM_NAME,
        );
        let results = service
            .score(sample_submission())
            .expect("sample questionnaire scores");

        assert!(results.final_band <= results.risk_attitude.band);
        assert_eq!(results.capacity.max_allowed_band, RiskBand::Balanced);
        assert!(results.alternatives_gated());
    }
}
