use serde::{Deserialize, Serialize};

use notebook::pattern::DEFAULT_DECORATIVE_SYMBOLS;

/// Knobs for the five checks. Every field has a default, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Required number of numbered parts. `None` accepts any count.
    pub expected_parts: Option<usize>,
    /// Report transition cells with missing or miscounted action cards.
    pub require_transitions: bool,
    /// Cells that must precede the first part.
    pub min_intro_cells: usize,
    /// Cells that must follow the last part.
    pub min_conclusion_cells: usize,
    /// Metadata keys that must be present.
    pub required_metadata: Vec<String>,
    /// Pictographs ignored when comparing headings and link text.
    pub decorative_symbols: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            expected_parts: None,
            require_transitions: false,
            min_intro_cells: 1,
            min_conclusion_cells: 2,
            required_metadata: vec!["repo".to_string()],
            decorative_symbols: DEFAULT_DECORATIVE_SYMBOLS.to_string(),
        }
    }
}
