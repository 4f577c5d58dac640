//! Text predicates shared by the extractors.
//!
//! Every pattern the checks rely on lives here so each one can be exercised on
//! its own. The decorative-symbol set is data: the section pattern and heading
//! normalization are both built from whatever set the caller supplies.

use regex::Regex;

/// Pictographs stripped from headings and link text before comparison.
pub const DEFAULT_DECORATIVE_SYMBOLS: &str = "🌍👥🎯📚💡🛡️🏁🔧⚡🎨📊🔍✨🚀💻🔐📈";

pub const PROGRESS_LABEL: &str = "Progress:";
pub const PROGRESS_INDICATOR: char = '🔵';
/// Compared against the lowercased cell text.
pub const READING_TIME_LABEL: &str = "reading time:";
pub const ACTION_CARDS_MARKER: &str = "<!-- action-cards -->";

/// A `Part N:` / `Section N:` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarker {
    /// `"part"` or `"section"`.
    pub kind: String,
    pub number: u64,
}

/// Compiled patterns for one decorative-symbol set.
#[derive(Debug, Clone)]
pub struct Patterns {
    symbols: Vec<char>,
    /// `## Part 1:` / `### 💡 Section 12:` at the start of a line.
    section_heading: Regex,
    /// `Part 3:` anywhere in the text.
    section_mention: Regex,
    smart_link: Regex,
    action_link: Regex,
}

impl Patterns {
    pub fn new(decorative_symbols: &str) -> Result<Self, regex::Error> {
        let mut symbols: Vec<char> = Vec::new();
        for c in decorative_symbols.chars() {
            if !c.is_whitespace() && !symbols.contains(&c) {
                symbols.push(c);
            }
        }

        let decoration = if symbols.is_empty() {
            String::new()
        } else {
            let class: String = symbols
                .iter()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect();
            format!(r"(?:[{class}]+[ \t]*)?")
        };

        Ok(Patterns {
            section_heading: Regex::new(&format!(
                r"(?im)^#{{2,3}}[ \t]*{decoration}(part|section)[ \t]*([0-9]+):"
            ))?,
            section_mention: Regex::new(r"(?i)(part|section)\s+([0-9]+):")?,
            smart_link: Regex::new(r"\[([^\]]+)\]\(#\)")?,
            action_link: Regex::new(r"(?m)^\s*- \[([^\]]+)\]\(#\)")?,
            symbols,
        })
    }

    /// Normalize heading or link text for comparison: drop decorative symbols,
    /// lowercase, collapse whitespace runs, trim.
    ///
    /// Normalizing an already-normalized string returns it unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text.chars().filter(|c| !self.symbols.contains(c)).collect();
        stripped
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The first numbered section heading in `text`, if any.
    pub fn section_heading(&self, text: &str) -> Option<SectionMarker> {
        let caps = self.section_heading.captures(text)?;
        Some(SectionMarker {
            kind: caps[1].to_lowercase(),
            number: caps[2].parse().ok()?,
        })
    }

    /// The first `Part N:` / `Section N:` mention anywhere in `text`.
    pub fn section_mention(&self, text: &str) -> Option<SectionMarker> {
        let caps = self.section_mention.captures(text)?;
        Some(SectionMarker {
            kind: caps[1].to_lowercase(),
            number: caps[2].parse().ok()?,
        })
    }

    /// Whether `text` mentions a numbered part or section.
    pub fn mentions_section(&self, text: &str) -> bool {
        self.section_mention.is_match(text)
    }

    /// Link texts of every `[text](#)` occurrence, in order.
    pub fn smart_links<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.smart_link
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// Number of `- [text](#)` list-item lines.
    pub fn count_action_links(&self, text: &str) -> usize {
        self.action_link.find_iter(text).count()
    }

    /// A transition cell names a part, shows progress, and estimates reading time.
    pub fn is_transition(&self, text: &str) -> bool {
        self.mentions_section(text)
            && text.contains(PROGRESS_LABEL)
            && text.contains(PROGRESS_INDICATOR)
            && text.to_lowercase().contains(READING_TIME_LABEL)
    }
}

/// Heading text of a line starting with `#`: the `#` run and surrounding
/// whitespace removed.
pub fn heading_text(line: &str) -> Option<&str> {
    if line.starts_with('#') {
        Some(line.trim_start_matches('#').trim())
    } else {
        None
    }
}

pub fn has_action_cards_marker(text: &str) -> bool {
    text.contains(ACTION_CARDS_MARKER)
}
