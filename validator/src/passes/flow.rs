use std::collections::BTreeMap;

use serde::Serialize;

use notebook::extract::Section;

use crate::result::{Status, deduction, penalized};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowResult {
    pub parts: usize,
    pub sequential: bool,
    pub issues: Vec<String>,
    pub status: Status,
    pub score: u8,
}

/// Check that parts are numbered 1, 2, 3, ... with no gaps or repeats.
///
/// After a mismatch the expected number restarts from the number actually
/// found, so one skipped number is reported once.
pub fn validate_part_flow(sections: &[Section]) -> FlowResult {
    let mut issues = Vec::new();

    let mut expected: u64 = 1;
    for section in sections {
        if section.number != expected {
            let kind = section.kind_title();
            issues.push(format!(
                "{kind} {expected} expected, found {kind} {} at cell {}",
                section.number, section.position
            ));
        }
        expected = section.number.saturating_add(1);
    }

    let mut seen: BTreeMap<u64, usize> = BTreeMap::new();
    for section in sections {
        *seen.entry(section.number).or_default() += 1;
    }
    let duplicates: Vec<String> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(number, _)| number.to_string())
        .collect();
    if !duplicates.is_empty() {
        issues.push(format!("Duplicate part numbers: [{}]", duplicates.join(", ")));
    }

    FlowResult {
        parts: sections.len(),
        sequential: issues.is_empty(),
        status: Status::unless_issues(issues.len(), Status::Fail),
        score: penalized(deduction(issues.len(), 25)),
        issues,
    }
}
