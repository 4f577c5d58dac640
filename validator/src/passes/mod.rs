pub mod flow;
pub mod links;
pub mod production;
pub mod structure;
pub mod transitions;

pub use flow::{FlowResult, validate_part_flow};
pub use links::{LinkResult, validate_smart_links};
pub use production::{ProductionResult, validate_production};
pub use structure::{StructureResult, validate_structure};
pub use transitions::{TransitionIssue, TransitionResult, validate_transitions};
