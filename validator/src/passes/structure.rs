use serde::Serialize;

use notebook::extract::Section;

use crate::config::ValidatorConfig;
use crate::result::{Status, deduction, penalized};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureResult {
    pub parts_found: usize,
    pub parts_expected: Option<usize>,
    pub has_parts: bool,
    pub issues: Vec<String>,
    pub status: Status,
    pub score: u8,
}

/// Check the part count and that the parts are framed by an introduction and
/// a conclusion. Free-form notebooks (no parts) skip the framing checks.
pub fn validate_structure(
    sections: &[Section],
    total_cells: usize,
    config: &ValidatorConfig,
) -> StructureResult {
    let mut issues = Vec::new();

    if let Some(expected) = config.expected_parts {
        if sections.len() != expected {
            issues.push(format!("Expected {expected} parts, found {}", sections.len()));
        }
    }

    if let (Some(first), Some(last)) = (sections.first(), sections.last()) {
        let intro = config.min_intro_cells;
        if intro > 0 && first.position < intro {
            issues.push(format!(
                "No clear introduction section (need {intro}+ cells before first part)"
            ));
        }

        let conclusion = config.min_conclusion_cells;
        if conclusion > 0 && last.position.saturating_add(conclusion) > total_cells {
            issues.push(format!(
                "No clear conclusion section (need {conclusion}+ cells after last part)"
            ));
        }
    }

    StructureResult {
        parts_found: sections.len(),
        parts_expected: config.expected_parts,
        has_parts: !sections.is_empty(),
        status: Status::unless_issues(issues.len(), Status::Warn),
        score: penalized(deduction(issues.len(), 20)),
        issues,
    }
}
