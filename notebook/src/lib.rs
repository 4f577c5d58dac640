pub mod document;
pub mod extract;
pub mod loader;
pub mod pattern;

pub use document::{Cell, CellKind, Notebook};
pub use loader::LoadError;
pub use pattern::Patterns;
