use chrono::NaiveDateTime;

use super::super::domain::AllocationLimits;
use super::super::scoring::ProfileResults;
use super::file_note::yes_no;

const LINE_WIDTH: usize = 110;
const DISCLAIMER_WIDTH: usize = 120;
const KEY_COLUMN: usize = 32;
const LINES_PER_PAGE: usize = 60;
const FOOTER_LINES: usize = 2;
const PAGE_BREAK: char = '\u{0C}';

const DISCLAIMER: &str = "Internal advisory tool only. This document provides risk profiling information, not investment advice. Final suitability decisions rest with the adviser.";

/// A rendered report ready to hand to a download response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportExport {
    pub fn build(results: &ProfileResults, firm_name: &str, generated_at: NaiveDateTime) -> Self {
        Self {
            file_name: report_file_name(firm_name, generated_at),
            content_type: "text/plain; charset=utf-8",
            bytes: render_report(results, firm_name, generated_at),
        }
    }
}

/// `<Firm>_Risk_Profile_YYYYMMDD_HHMM.txt`, with whitespace stripped from the firm name.
pub fn report_file_name(firm_name: &str, generated_at: NaiveDateTime) -> String {
    let firm: String = firm_name.split_whitespace().collect();
    format!(
        "{}_Risk_Profile_{}.txt",
        firm,
        generated_at.format("%Y%m%d_%H%M")
    )
}

/// Paginated plain-text client risk profile summary.
pub fn render_report(
    results: &ProfileResults,
    firm_name: &str,
    generated_at: NaiveDateTime,
) -> Vec<u8> {
    let mut doc = ReportBuilder::default();
    let attitude = &results.risk_attitude;
    let capacity = &results.capacity;

    doc.title("Client Risk Profile Summary");
    doc.split_line(firm_name.trim(), &generated_at.format("%Y-%m-%d %H:%M").to_string());
    doc.rule();

    doc.heading("Summary");
    doc.kv("Risk attitude score", &format!("{}/100", attitude.score));
    doc.kv("Risk attitude category", attitude.band.label());
    doc.kv("Capacity for loss", capacity.band.label());
    doc.kv("Capacity points", &format!("{}/30", capacity.points));
    doc.kv("Capacity policy cap", capacity.max_allowed_band.label());
    doc.kv("Final risk category", results.final_band.label());
    doc.kv(
        "Capacity override applied",
        yes_no(results.override_applied),
    );
    doc.rule();

    doc.heading("Allocation Caps");
    doc.limits("Base", &results.base_limits);
    doc.blank();
    doc.limits("Final", &results.final_limits);

    if results.alternatives_gated() {
        doc.blank();
        doc.heading("Alternatives Gating");
        doc.para("Alternatives were gated to 0% due to:", LINE_WIDTH);
        for reason in &results.alt_forced_zero_reasons {
            doc.para(&format!("• {}", reason.message()), LINE_WIDTH);
        }
    }
    doc.rule();

    doc.heading("Robustness Checks");
    if results.flags.is_empty() {
        doc.para("No robustness flags triggered.", LINE_WIDTH);
    } else {
        doc.para("Flags:", LINE_WIDTH);
        for flag in &results.flags {
            doc.para(&format!("• {}", flag.message()), LINE_WIDTH);
        }
    }
    doc.rule();

    doc.heading("Capacity Inputs");
    for (question, answer) in results.capacity_inputs.labelled() {
        doc.kv(question.label(), answer);
    }
    doc.rule();

    for line in wrap_text_to_lines(DISCLAIMER, DISCLAIMER_WIDTH) {
        doc.line(line);
    }

    doc.paginate().into_bytes()
}

/// Greedy word wrap. Words longer than `max_chars` stay on their own line.
pub fn wrap_text_to_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let separator = usize::from(!current.is_empty());
        if current.chars().count() + separator + word.chars().count() <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[derive(Debug, Default)]
struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn title(&mut self, text: &str) {
        self.line(text.to_uppercase());
        self.line("=".repeat(text.chars().count()));
    }

    fn heading(&mut self, text: &str) {
        self.line(text);
        self.line("-".repeat(text.chars().count()));
    }

    fn rule(&mut self) {
        self.line("_".repeat(LINE_WIDTH));
        self.blank();
    }

    fn split_line(&mut self, left: &str, right: &str) {
        let used = left.chars().count() + right.chars().count();
        let padding = LINE_WIDTH.saturating_sub(used).max(1);
        self.line(format!("{left}{}{right}", " ".repeat(padding)));
    }

    fn kv(&mut self, key: &str, value: &str) {
        let key = format!("{key}:");
        self.line(format!("{key:<width$}{value}", width = KEY_COLUMN));
    }

    fn para(&mut self, text: &str, width: usize) {
        for line in wrap_text_to_lines(text, width) {
            self.line(line);
        }
    }

    fn limits(&mut self, prefix: &str, limits: &AllocationLimits) {
        self.kv(
            &format!("{prefix} Max Equity"),
            &format!("{}%", limits.max_equity),
        );
        self.kv(
            &format!("{prefix} Max Sukuk"),
            &format!("{}%", limits.max_sukuk),
        );
        self.kv(
            &format!("{prefix} Max Alternatives"),
            &format!("{}%", limits.max_alternatives),
        );
    }

    /// Splits body lines into fixed-height pages, each closed by a page footer.
    fn paginate(self) -> String {
        let body_lines = LINES_PER_PAGE - FOOTER_LINES;
        let pages: Vec<&[String]> = self.lines.chunks(body_lines).collect();
        let total = pages.len().max(1);

        let mut out = String::new();
        for (index, page) in pages.iter().enumerate() {
            if index > 0 {
                out.push(PAGE_BREAK);
            }
            for line in page.iter() {
                out.push_str(line.trim_end());
                out.push('\n');
            }
            for _ in page.len()..body_lines {
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&format!("Page {} of {}\n", index + 1, total));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|date| date.and_hms_opt(9, 5, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text_to_lines("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap_text_to_lines("tiny extraordinarily", 5);
        assert_eq!(lines, vec!["tiny", "extraordinarily"]);
        assert!(wrap_text_to_lines("   ", 10).is_empty());
    }

    #[test]
    fn file_name_strips_whitespace_from_firm() {
        assert_eq!(
            report_file_name("Amberstone Capital", generated_at()),
            "AmberstoneCapital_Risk_Profile_20250314_0905.txt"
        );
    }

    #[test]
    fn pages_have_fixed_height_and_footer() {
        let mut doc = ReportBuilder::default();
        for index in 0..70 {
            doc.line(format!("line {index}"));
        }
        let rendered = doc.paginate();
        let pages: Vec<&str> = rendered.split(PAGE_BREAK).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines().count(), LINES_PER_PAGE);
        assert!(pages[0].ends_with("Page 1 of 2\n"));
        assert!(pages[1].ends_with("Page 2 of 2\n"));
    }
}
