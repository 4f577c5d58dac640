pub mod error;

pub use error::LoadError;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::document::{Cell, CellKind, Notebook};

// ---------------------------------------------------------------------------
// Container shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawNotebook {
    cells: Vec<RawCell>,
    #[serde(default)]
    metadata: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: Option<RawSource>,
}

/// Cell source is stored either as one string or as a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSource {
    Text(String),
    Lines(Vec<String>),
}

impl RawSource {
    fn concat(self) -> String {
        match self {
            RawSource::Text(text) => text,
            RawSource::Lines(lines) => lines.concat(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl Notebook {
    /// Read and decode a notebook file, recording its on-disk size.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Notebook, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut notebook = Notebook::from_json_str(&text)?;
        // Size is best-effort; a failed stat only disables the large-file check.
        notebook.stored_size = match fs::metadata(path) {
            Ok(meta) => Some(meta.len()),
            Err(err) => {
                debug!(path = %path.display(), %err, "could not determine notebook size");
                None
            }
        };

        info!(
            path = %path.display(),
            cells = notebook.len(),
            bytes = ?notebook.stored_size,
            "loaded notebook"
        );
        Ok(notebook)
    }

    /// Decode a notebook held in memory. The stored size is left unknown.
    pub fn from_json_str(text: &str) -> Result<Notebook, LoadError> {
        let raw: RawNotebook = serde_json::from_str(text)?;
        let cells = raw
            .cells
            .into_iter()
            .enumerate()
            .map(|(position, cell)| Cell {
                kind: CellKind::from_cell_type(&cell.cell_type),
                content: cell.source.map(RawSource::concat).unwrap_or_default(),
                position,
            })
            .collect();
        Ok(Notebook::new(cells, raw.metadata))
    }
}
