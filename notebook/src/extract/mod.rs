//! Extractors: structural facts read out of narrative cells.

use std::collections::HashMap;

use serde::Serialize;

use crate::document::Notebook;
use crate::pattern::{self, Patterns};

// ---------------------------------------------------------------------------
// Headings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Line text with the `#` marks and surrounding whitespace stripped.
    pub raw_text: String,
    pub normalized_text: String,
    pub position: usize,
}

/// Headings keyed by normalized text.
///
/// A heading that normalizes to an existing key replaces the earlier entry but
/// keeps that entry's slot in iteration order.
#[derive(Debug, Clone, Default)]
pub struct HeadingIndex {
    order: Vec<String>,
    entries: HashMap<String, Heading>,
}

impl HeadingIndex {
    pub fn insert(&mut self, heading: Heading) {
        if !self.entries.contains_key(&heading.normalized_text) {
            self.order.push(heading.normalized_text.clone());
        }
        self.entries.insert(heading.normalized_text.clone(), heading);
    }

    pub fn get(&self, normalized: &str) -> Option<&Heading> {
        self.entries.get(normalized)
    }

    /// Headings in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = &Heading> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Every `#` line of every narrative cell, normalized. Empty results are dropped.
pub fn headings(notebook: &Notebook, patterns: &Patterns) -> HeadingIndex {
    let mut index = HeadingIndex::default();
    for cell in notebook.narrative_cells() {
        for line in cell.content.split('\n') {
            let Some(raw) = pattern::heading_text(line) else {
                continue;
            };
            let normalized = patterns.normalize(raw);
            if normalized.is_empty() {
                continue;
            }
            index.insert(Heading {
                raw_text: raw.to_string(),
                normalized_text: normalized,
                position: cell.position,
            });
        }
    }
    index
}

// ---------------------------------------------------------------------------
// Smart links
// ---------------------------------------------------------------------------

/// An in-document cross-reference written as `[text](#)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub position: usize,
}

/// All smart links in document order, duplicates included.
pub fn smart_links(notebook: &Notebook, patterns: &Patterns) -> Vec<Link> {
    notebook
        .narrative_cells()
        .flat_map(move |cell| {
            patterns.smart_links(&cell.content).map(move |text| Link {
                text: text.to_string(),
                position: cell.position,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// A numbered `Part N:` / `Section N:` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: u64,
    pub position: usize,
    /// `"part"` or `"section"`.
    pub kind: String,
    /// Full text of the owning cell.
    pub content: String,
}

impl Section {
    /// `"Part"` / `"Section"`.
    pub fn kind_title(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Numbered sections in document order, at most one per cell.
pub fn sections(notebook: &Notebook, patterns: &Patterns) -> Vec<Section> {
    notebook
        .narrative_cells()
        .filter_map(|cell| {
            let marker = patterns.section_heading(&cell.content)?;
            Some(Section {
                number: marker.number,
                position: cell.position,
                kind: marker.kind,
                content: cell.content.clone(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// A cell that moves the reader on to the next part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionCell {
    /// First part number mentioned in the cell.
    pub part: Option<u64>,
    pub cell: usize,
    pub has_marker: bool,
    pub link_count: usize,
}

pub fn transition_cells(notebook: &Notebook, patterns: &Patterns) -> Vec<TransitionCell> {
    notebook
        .narrative_cells()
        .filter(|cell| patterns.is_transition(&cell.content))
        .map(|cell| TransitionCell {
            part: patterns.section_mention(&cell.content).map(|m| m.number),
            cell: cell.position,
            has_marker: pattern::has_action_cards_marker(&cell.content),
            link_count: patterns.count_action_links(&cell.content),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Cell, CellKind};
    use crate::pattern::DEFAULT_DECORATIVE_SYMBOLS;

    fn md(content: &str, position: usize) -> Cell {
        Cell::new(CellKind::Narrative, content, position)
    }

    fn code(content: &str, position: usize) -> Cell {
        Cell::new(CellKind::Code, content, position)
    }

    fn notebook(cells: Vec<Cell>) -> Notebook {
        Notebook::new(cells, Default::default())
    }

    fn patterns() -> Patterns {
        Patterns::new(DEFAULT_DECORATIVE_SYMBOLS).unwrap()
    }

    #[test]
    fn headings_skip_code_and_empty() {
        let nb = notebook(vec![
            md("# 🚀 Getting Started\ntext\n## Setup", 0),
            code("# not a heading", 1),
            md("## 🎯\n###", 2),
        ]);
        let index = headings(&nb, &patterns());
        let keys: Vec<_> = index.iter().map(|h| h.normalized_text.as_str()).collect();
        assert_eq!(keys, vec!["getting started", "setup"]);
        assert_eq!(index.get("getting started").unwrap().raw_text, "🚀 Getting Started");
    }

    #[test]
    fn later_heading_wins_but_keeps_slot() {
        let nb = notebook(vec![md("# Intro\n# Usage", 0), md("## 📚 intro", 3)]);
        let index = headings(&nb, &patterns());
        let heading = index.get("intro").unwrap();
        assert_eq!(heading.position, 3);
        assert_eq!(heading.raw_text, "📚 intro");
        let order: Vec<_> = index.iter().map(|h| h.normalized_text.as_str()).collect();
        assert_eq!(order, vec!["intro", "usage"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn links_keep_duplicates_and_positions() {
        let nb = notebook(vec![
            md("[A](#) then [B](#)", 0),
            code("[C](#)", 1),
            md("[A](#)", 2),
        ]);
        let links = smart_links(&nb, &patterns());
        let found: Vec<_> = links.iter().map(|l| (l.text.as_str(), l.position)).collect();
        assert_eq!(found, vec![("A", 0), ("B", 0), ("A", 2)]);
    }

    #[test]
    fn one_section_per_cell() {
        let nb = notebook(vec![
            md("Intro", 0),
            md("## Part 1: A\n## Part 2: B", 1),
            code("## Part 3: C", 2),
            md("### Section 4: D", 3),
        ]);
        let found = sections(&nb, &patterns());
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].number, found[0].position), (1, 1));
        assert_eq!((found[1].number, found[1].position), (4, 3));
        assert_eq!(found[1].kind_title(), "Section");
    }

    #[test]
    fn transition_details() {
        let text = "## Part 3: Deploy\nProgress: 🔵🔵🔵\nReading time: 4 min\n\
                    <!-- action-cards -->\n- [Setup](#)\n- [Build](#)\n- [Ship](#)";
        let nb = notebook(vec![md(text, 0), md("## Part 4: Plain", 1)]);
        let found = transition_cells(&nb, &patterns());
        assert_eq!(
            found,
            vec![TransitionCell {
                part: Some(3),
                cell: 0,
                has_marker: true,
                link_count: 3,
            }]
        );
    }
}
