use std::io::{self, Write};

use serde::Serialize;

use validator::passes::{
    FlowResult, LinkResult, ProductionResult, StructureResult, TransitionResult,
};
use validator::{PassName, Rating, Severity, Status, ValidationReport};

/// Broken links listed before the remainder is summarized.
const BROKEN_LINKS_SHOWN: usize = 5;
const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn status(&self, status: Status) -> String {
        match status {
            Status::Pass => self.paint("PASS", "32"),
            Status::Warn => self.paint("WARN", "33"),
            Status::Fail => self.paint("FAIL", "31"),
        }
    }

    fn rating(&self, rating: Rating) -> String {
        let code = match rating {
            Rating::ProductionReady => "32",
            Rating::MinorFixes | Rating::ModerateIssues => "33",
            Rating::MajorRework => "31",
        };
        self.paint(rating.label(), code)
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, "1")
    }
}

/// `--quiet` output.
pub fn write_score(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    writeln!(out, "Score: {}/100", report.overall_score())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    notebook: &'a str,
    overall_score: u8,
    production_ready: bool,
    rating: Rating,
    recommendations: [&'static str; 2],
    #[serde(flatten)]
    report: &'a ValidationReport,
}

pub fn write_json(out: &mut impl Write, name: &str, report: &ValidationReport) -> io::Result<()> {
    let rating = report.rating();
    let body = JsonReport {
        notebook: name,
        overall_score: report.overall_score(),
        production_ready: report.is_production_ready(),
        rating,
        recommendations: rating.recommendations(),
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)
}

pub fn write_text(
    out: &mut impl Write,
    name: &str,
    report: &ValidationReport,
    style: Style,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", style.bold(&format!("NOTEBOOK VALIDATION REPORT: {name}")))?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    write_summary(out, report, style)?;

    for (pass, status, score) in report.pass_summaries() {
        writeln!(out, "{}: {}", pass.title(), style.status(status))?;
        writeln!(out, "  Score: {score}/100")?;
        match pass {
            PassName::SmartLinks => {
                if let Some(result) = &report.smart_links {
                    write_links(out, result)?;
                }
            }
            PassName::Structure => {
                if let Some(result) = &report.structure {
                    write_structure(out, result)?;
                }
            }
            PassName::Transitions => {
                if let Some(result) = &report.transitions {
                    write_transitions(out, result)?;
                }
            }
            PassName::PartFlow => {
                if let Some(result) = &report.part_flow {
                    write_flow(out, result)?;
                }
            }
            PassName::Production => {
                if let Some(result) = &report.production {
                    write_production(out, result)?;
                }
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", style.bold("RECOMMENDATIONS:"))?;
    for line in report.rating().recommendations() {
        writeln!(out, "  • {line}")?;
    }
    writeln!(out)
}

fn write_summary(out: &mut impl Write, report: &ValidationReport, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.bold("SUMMARY:"))?;
    writeln!(out, "  Total Cells: {}", report.total_cells)?;
    if let Some(links) = &report.smart_links {
        writeln!(
            out,
            "  Smart Links: {} ({} valid, {} broken)",
            links.total,
            links.valid,
            links.broken.len()
        )?;
    }
    if let Some(flow) = &report.part_flow {
        let order = if flow.sequential {
            "sequential"
        } else {
            "non-sequential"
        };
        writeln!(out, "  Parts: {} ({order})", flow.parts)?;
    }
    if let Some(transitions) = &report.transitions {
        writeln!(
            out,
            "  Transitions: {} ({} with action cards)",
            transitions.transitions_found, transitions.transitions_with_markers
        )?;
    }
    writeln!(
        out,
        "  Overall Score: {}/100 {}",
        report.overall_score(),
        style.rating(report.rating())
    )?;
    writeln!(out)
}

fn write_links(out: &mut impl Write, result: &LinkResult) -> io::Result<()> {
    if result.broken.is_empty() {
        return writeln!(out, "  ✓ All {} smart links resolve correctly", result.valid);
    }
    writeln!(out, "  ✗ {} broken links:", result.broken.len())?;
    for link in result.broken.iter().take(BROKEN_LINKS_SHOWN) {
        writeln!(out, "    - Cell {}: [{}](#)", link.position, link.text)?;
    }
    if result.broken.len() > BROKEN_LINKS_SHOWN {
        writeln!(
            out,
            "    - ... and {} more",
            result.broken.len() - BROKEN_LINKS_SHOWN
        )?;
    }
    Ok(())
}

fn write_structure(out: &mut impl Write, result: &StructureResult) -> io::Result<()> {
    if result.has_parts {
        writeln!(out, "  ✓ Found {} parts", result.parts_found)?;
        if let Some(expected) = result.parts_expected {
            writeln!(out, "    (expected {expected})")?;
        }
    } else {
        writeln!(
            out,
            "  ℹ No numbered parts/sections detected (notebook uses free-form structure)"
        )?;
    }
    for issue in &result.issues {
        writeln!(out, "  ⚠ {issue}")?;
    }
    Ok(())
}

fn write_transitions(out: &mut impl Write, result: &TransitionResult) -> io::Result<()> {
    writeln!(
        out,
        "  ✓ {} of {} transitions have action cards",
        result.transitions_with_markers, result.transitions_found
    )?;
    for issue in &result.issues {
        let marker = match issue.severity {
            Severity::Error => "✗",
            Severity::Warn => "⚠",
        };
        let part = issue
            .part
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        writeln!(
            out,
            "  {marker} [{}] Part {part} (cell {}): {}",
            issue.severity, issue.cell, issue.message
        )?;
    }
    Ok(())
}

fn write_flow(out: &mut impl Write, result: &FlowResult) -> io::Result<()> {
    if result.sequential {
        if result.parts > 0 {
            writeln!(out, "  ✓ Parts numbered 1-{} sequentially", result.parts)?;
        } else {
            writeln!(out, "  ✓ No numbered parts to check")?;
        }
    }
    for issue in &result.issues {
        writeln!(out, "  ✗ {issue}")?;
    }
    Ok(())
}

fn write_production(out: &mut impl Write, result: &ProductionResult) -> io::Result<()> {
    if result.repo_configured {
        writeln!(out, "  ✓ Repository URL configured")?;
    }
    if result.metadata_complete {
        writeln!(out, "  ✓ Metadata complete")?;
    }
    for issue in &result.issues {
        writeln!(out, "  ⚠ {issue}")?;
    }
    Ok(())
}
