pub mod config;
pub mod error;
pub mod passes;
pub mod result;
pub mod runner;
pub mod score;

pub use config::ValidatorConfig;
pub use error::ConfigError;
pub use result::{PassName, Severity, Status};
pub use runner::{ValidationReport, Validator};
pub use score::{PRODUCTION_READY, Rating, overall_score};
