use serde::Serialize;
use tracing::debug;

use notebook::Patterns;
use notebook::extract::{Heading, HeadingIndex, Link};

use crate::result::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResult {
    pub total: usize,
    pub valid: usize,
    /// Unresolved links, in document order.
    pub broken: Vec<Link>,
    pub status: Status,
    pub score: u8,
}

/// Resolve every smart link against the notebook's headings.
pub fn validate_smart_links(
    links: &[Link],
    headings: &HeadingIndex,
    patterns: &Patterns,
) -> LinkResult {
    let mut valid = 0;
    let mut broken = Vec::new();

    for link in links {
        let normalized = patterns.normalize(&link.text);
        match resolve(&normalized, headings) {
            Some(target) => {
                valid += 1;
                debug!(
                    link = %link.text,
                    cell = link.position,
                    target = %target.raw_text,
                    "link resolved"
                );
            }
            None => {
                debug!(link = %link.text, cell = link.position, "broken link");
                broken.push(link.clone());
            }
        }
    }

    let total = links.len();
    LinkResult {
        total,
        valid,
        status: Status::unless_issues(broken.len(), Status::Fail),
        score: percent(valid, total),
        broken,
    }
}

/// Exact match first, then the first heading (in index order) that contains
/// the link text or is contained by it.
pub fn resolve<'h>(normalized: &str, headings: &'h HeadingIndex) -> Option<&'h Heading> {
    headings.get(normalized).or_else(|| {
        headings.iter().find(|heading| {
            heading.normalized_text.contains(normalized)
                || normalized.contains(heading.normalized_text.as_str())
        })
    })
}

/// `round(100 * part / whole)`; an empty whole counts as complete.
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    let (part, whole) = (part as u64, whole as u64);
    ((200 * part + whole) / (2 * whole)) as u8
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 100);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(5, 5), 100);
    }
}
