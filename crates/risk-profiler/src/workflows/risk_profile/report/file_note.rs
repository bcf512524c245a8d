use std::fmt::Write;

use super::super::domain::AllocationLimits;
use super::super::scoring::ProfileResults;

/// Plain-text summary an adviser pastes into the client file.
pub fn file_note(results: &ProfileResults, firm_name: &str) -> String {
    let mut out = String::new();
    let attitude = &results.risk_attitude;
    let capacity = &results.capacity;

    writeln!(&mut out, "{} – Risk profiling summary\n", firm_name.trim()).expect("write heading");

    out.push_str("Risk attitude (12-statement):\n");
    writeln!(&mut out, "- Score: {}/100", attitude.score).expect("write score");
    writeln!(&mut out, "- Category: {}", attitude.band.label()).expect("write category");
    writeln!(
        &mut out,
        "- Neutral responses: {}/12\n",
        attitude.neutral_count
    )
    .expect("write neutral count");

    out.push_str("Capacity for loss:\n");
    writeln!(&mut out, "- Points: {}/30", capacity.points).expect("write capacity points");
    writeln!(&mut out, "- Band: {}", capacity.band.label()).expect("write capacity band");
    writeln!(
        &mut out,
        "- Capacity policy cap: {}\n",
        capacity.max_allowed_band.label()
    )
    .expect("write capacity cap");

    out.push_str("Final risk category (after capacity cap):\n");
    writeln!(&mut out, "- {}", results.final_band.label()).expect("write final band");
    writeln!(
        &mut out,
        "- Capacity override applied: {}\n",
        yes_no(results.override_applied)
    )
    .expect("write override");

    out.push_str("Alternatives scope:\n");
    let scope = if results.alts_in_scope.is_empty() {
        "None".to_string()
    } else {
        results
            .alts_in_scope
            .iter()
            .map(|scope| scope.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(&mut out, "- {scope}\n").expect("write alternatives scope");

    out.push_str("Alternatives gate outcome:\n");
    if results.alternatives_gated() {
        let reasons = results
            .alt_forced_zero_reasons
            .iter()
            .map(|reason| reason.message())
            .collect::<Vec<_>>()
            .join("; ");
        writeln!(&mut out, "- Gated to 0% ({reasons})\n").expect("write gate reasons");
    } else {
        out.push_str("- Not gated\n\n");
    }

    out.push_str("Base policy caps (by final band):\n");
    push_limits(&mut out, &results.base_limits);
    out.push('\n');

    out.push_str("Final recommended caps (after gates):\n");
    push_limits(&mut out, &results.final_limits);
    out.push('\n');

    out.push_str("Capacity inputs:\n");
    for (question, answer) in results.capacity_inputs.labelled() {
        writeln!(&mut out, "- {}: {}", question.label(), answer).expect("write capacity input");
    }
    out.push('\n');

    out.push_str("Robustness flags:\n");
    if results.flags.is_empty() {
        out.push_str("- None");
    } else {
        let flags = results
            .flags
            .iter()
            .map(|flag| flag.message())
            .collect::<Vec<_>>()
            .join("; ");
        write!(&mut out, "- {flags}").expect("write flags");
    }

    out
}

fn push_limits(out: &mut String, limits: &AllocationLimits) {
    writeln!(out, "- Max Equity: {}%", limits.max_equity).expect("write equity cap");
    writeln!(out, "- Max Sukuk: {}%", limits.max_sukuk).expect("write sukuk cap");
    writeln!(out, "- Max Alternatives: {}%", limits.max_alternatives)
        .expect("write alternatives cap");
}

pub(super) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
