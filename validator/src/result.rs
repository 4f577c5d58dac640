use std::fmt;

use serde::Serialize;

/// Outcome of a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Warn => "WARN",
            Status::Fail => "FAIL",
        }
    }

    /// `Pass` when there is nothing to report, otherwise `otherwise`.
    pub(crate) fn unless_issues(issue_count: usize, otherwise: Status) -> Status {
        if issue_count == 0 { Status::Pass } else { otherwise }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a transition-cell finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warn => f.write_str("WARN"),
        }
    }
}

/// The five passes, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassName {
    SmartLinks,
    Structure,
    Transitions,
    PartFlow,
    Production,
}

impl PassName {
    pub const ALL: [PassName; 5] = [
        PassName::SmartLinks,
        PassName::Structure,
        PassName::Transitions,
        PassName::PartFlow,
        PassName::Production,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PassName::SmartLinks => "smart_links",
            PassName::Structure => "structure",
            PassName::Transitions => "transitions",
            PassName::PartFlow => "part_flow",
            PassName::Production => "production",
        }
    }

    /// Heading used in the text report.
    pub fn title(&self) -> &'static str {
        match self {
            PassName::SmartLinks => "SMART LINKS",
            PassName::Structure => "STRUCTURE",
            PassName::Transitions => "TRANSITIONS",
            PassName::PartFlow => "PART FLOW",
            PassName::Production => "PRODUCTION",
        }
    }

    /// Share of the overall score, in percent. The five add up to 100.
    pub fn weight_percent(&self) -> u32 {
        match self {
            PassName::SmartLinks => 30,
            PassName::Structure => 25,
            PassName::Transitions => 20,
            PassName::PartFlow => 15,
            PassName::Production => 10,
        }
    }
}

/// Points lost for `count` findings worth `points` each.
pub(crate) fn deduction(count: usize, points: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(points)
}

/// 100 minus `deductions`, floored at 0.
pub(crate) fn penalized(deductions: u32) -> u8 {
    100u32.saturating_sub(deductions) as u8
}
