use serde::Serialize;
use serde_json::{Map, Value};

/// A decoded notebook: ordered cells plus the top-level metadata mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    /// Byte size of the file the notebook was read from, when it could be determined.
    pub stored_size: Option<u64>,
}

/// A single notebook cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    /// All source lines concatenated into one string.
    pub content: String,
    /// Zero-based index in the notebook's cell sequence.
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Formatted text (`cell_type: "markdown"`).
    Narrative,
    /// Anything that isn't markdown.
    Code,
}

impl CellKind {
    pub fn from_cell_type(cell_type: &str) -> Self {
        if cell_type == "markdown" {
            CellKind::Narrative
        } else {
            CellKind::Code
        }
    }
}

impl Cell {
    pub fn new(kind: CellKind, content: impl Into<String>, position: usize) -> Self {
        Cell {
            kind,
            content: content.into(),
            position,
        }
    }

    pub fn is_narrative(&self) -> bool {
        self.kind == CellKind::Narrative
    }
}

impl Notebook {
    pub fn new(cells: Vec<Cell>, metadata: Map<String, Value>) -> Self {
        Notebook {
            cells,
            metadata,
            stored_size: None,
        }
    }

    pub fn with_stored_size(mut self, size: u64) -> Self {
        self.stored_size = Some(size);
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Narrative cells in ascending position order.
    pub fn narrative_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_narrative())
    }
}
