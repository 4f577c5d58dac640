/// Configuration that can't be turned into a validator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("decorative symbol set does not compile into a pattern: {0}")]
    Symbols(#[from] regex::Error),
}
