use std::ops::Range;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic, Label};

/// Failures that stop a notebook from being loaded at all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Well-formed JSON that isn't shaped like a notebook.
    #[error("not a notebook document (line {line}, column {column}): {message}")]
    Shape {
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// 1-based line and column of the failure, if it came from the decoder.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            LoadError::Io { .. } => None,
            LoadError::Syntax { line, column, .. } | LoadError::Shape { line, column, .. } => {
                Some((*line, *column))
            }
        }
    }

    /// Convert to a codespan-reporting Diagnostic pointing into `source`.
    pub fn to_diagnostic(&self, file_id: usize, source: &str) -> Diagnostic<usize> {
        let diagnostic = Diagnostic::error().with_message(self.to_string());
        match self.location() {
            Some((line, column)) if line > 0 => {
                let span = byte_span(source, line, column);
                diagnostic.with_labels(vec![Label::primary(file_id, span)])
            }
            _ => diagnostic,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let message = err.to_string();
        if err.is_data() {
            LoadError::Shape {
                line,
                column,
                message,
            }
        } else {
            LoadError::Syntax {
                line,
                column,
                message,
            }
        }
    }
}

/// Map a 1-based line/column to a (possibly empty) byte range in `source`.
fn byte_span(source: &str, line: usize, column: usize) -> Range<usize> {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let end = source[offset..]
        .chars()
        .next()
        .map(|c| offset + c.len_utf8())
        .unwrap_or(offset);
    offset..end
}
