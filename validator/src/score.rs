use std::fmt;

use serde::Serialize;

use crate::result::PassName;

/// Overall score at which a notebook counts as production ready.
pub const PRODUCTION_READY: u8 = 90;

/// Weighted sum of the pass scores, rounded down.
///
/// Passes that did not run contribute nothing; their weight is not
/// redistributed.
pub fn overall_score(scores: impl IntoIterator<Item = (PassName, u8)>) -> u8 {
    let weighted: u32 = scores
        .into_iter()
        .map(|(pass, score)| pass.weight_percent() * u32::from(score.min(100)))
        .sum();
    (weighted / 100).min(100) as u8
}

/// Qualitative bucket for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    ProductionReady,
    MinorFixes,
    ModerateIssues,
    MajorRework,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= PRODUCTION_READY => Rating::ProductionReady,
            s if s >= 75 => Rating::MinorFixes,
            s if s >= 60 => Rating::ModerateIssues,
            _ => Rating::MajorRework,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::ProductionReady => "PRODUCTION READY",
            Rating::MinorFixes => "MINOR FIXES NEEDED",
            Rating::ModerateIssues => "MODERATE ISSUES",
            Rating::MajorRework => "MAJOR REWORK REQUIRED",
        }
    }

    pub fn recommendations(&self) -> [&'static str; 2] {
        match self {
            Rating::ProductionReady => [
                "Notebook is ready for production deployment",
                "All validation checks passed",
            ],
            Rating::MinorFixes => [
                "Fix minor issues before deployment",
                "Review warnings and broken links",
            ],
            Rating::ModerateIssues => [
                "Address moderate issues before deployment",
                "Focus on transitions and part flow",
            ],
            Rating::MajorRework => [
                "Major rework required before deployment",
                "Address all errors systematically",
            ],
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = PassName::ALL.iter().map(|p| p.weight_percent()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn all_perfect_is_one_hundred() {
        assert_eq!(overall_score(PassName::ALL.map(|p| (p, 100))), 100);
    }

    #[test]
    fn weighted_sum_is_floored() {
        // 0.30*67 + 0.25*80 + 0.20*70 + 0.15*75 + 0.10*85 = 73.85
        let scores = [
            (PassName::SmartLinks, 67),
            (PassName::Structure, 80),
            (PassName::Transitions, 70),
            (PassName::PartFlow, 75),
            (PassName::Production, 85),
        ];
        assert_eq!(overall_score(scores), 73);
    }

    #[test]
    fn missing_passes_contribute_nothing() {
        assert_eq!(overall_score([(PassName::SmartLinks, 100)]), 30);
        assert_eq!(overall_score([]), 0);
    }

    #[test]
    fn rating_buckets() {
        assert_eq!(Rating::from_score(100), Rating::ProductionReady);
        assert_eq!(Rating::from_score(90), Rating::ProductionReady);
        assert_eq!(Rating::from_score(89), Rating::MinorFixes);
        assert_eq!(Rating::from_score(75), Rating::MinorFixes);
        assert_eq!(Rating::from_score(74), Rating::ModerateIssues);
        assert_eq!(Rating::from_score(60), Rating::ModerateIssues);
        assert_eq!(Rating::from_score(59), Rating::MajorRework);
    }
}
