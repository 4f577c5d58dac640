use serde::Serialize;

use notebook::extract::TransitionCell;

use crate::result::{Severity, Status, deduction, penalized};

pub const MIN_ACTION_CARDS: usize = 3;
pub const MAX_ACTION_CARDS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionIssue {
    pub severity: Severity,
    pub part: Option<u64>,
    pub cell: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionResult {
    pub transitions_found: usize,
    pub transitions_with_markers: usize,
    pub transitions: Vec<TransitionCell>,
    pub issues: Vec<TransitionIssue>,
    pub status: Status,
    pub score: u8,
}

impl TransitionResult {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Check action cards on transition cells. Unless `require_transitions` is
/// set, transitions are only counted.
pub fn validate_transitions(
    transitions: Vec<TransitionCell>,
    require_transitions: bool,
) -> TransitionResult {
    let issues: Vec<TransitionIssue> = if require_transitions {
        transitions.iter().filter_map(check_transition).collect()
    } else {
        Vec::new()
    };

    let mut result = TransitionResult {
        transitions_found: transitions.len(),
        transitions_with_markers: transitions.iter().filter(|t| t.has_marker).count(),
        transitions,
        issues,
        status: Status::Pass,
        score: 100,
    };

    let errors = result.error_count();
    if errors > 0 {
        result.status = Status::Fail;
    }
    if require_transitions && result.transitions_found > 0 {
        let warnings = result.warning_count();
        result.score = penalized(deduction(errors, 30).saturating_add(deduction(warnings, 10)));
    }
    result
}

fn check_transition(transition: &TransitionCell) -> Option<TransitionIssue> {
    let (severity, message) = if !transition.has_marker {
        (
            Severity::Error,
            "Missing <!-- action-cards --> marker".to_string(),
        )
    } else if transition.link_count < MIN_ACTION_CARDS {
        (
            Severity::Error,
            format!(
                "Only {} action cards (need {MIN_ACTION_CARDS}-{MAX_ACTION_CARDS})",
                transition.link_count
            ),
        )
    } else if transition.link_count > MAX_ACTION_CARDS {
        (
            Severity::Warn,
            format!(
                "{} action cards (recommended {MIN_ACTION_CARDS}-{MAX_ACTION_CARDS})",
                transition.link_count
            ),
        )
    } else {
        return None;
    };

    Some(TransitionIssue {
        severity,
        part: transition.part,
        cell: transition.cell,
        message,
    })
}
