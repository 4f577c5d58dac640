use std::path::{Path, PathBuf};

use validator::ValidatorConfig;

use crate::Cli;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults, then the config file (if any), then command-line flags.
pub fn resolve(cli: &Cli) -> Result<ValidatorConfig, SettingsError> {
    let config = match &cli.config {
        Some(path) => load_file(path)?,
        None => ValidatorConfig::default(),
    };
    Ok(apply_flags(config, cli))
}

/// Parse a TOML settings file. Unknown keys are rejected.
pub fn load_file(path: &Path) -> Result<ValidatorConfig, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_flags(mut config: ValidatorConfig, cli: &Cli) -> ValidatorConfig {
    if cli.expected_parts.is_some() {
        config.expected_parts = cli.expected_parts;
    }
    if cli.require_transitions {
        config.require_transitions = true;
    }
    if let Some(n) = cli.min_intro_cells {
        config.min_intro_cells = n;
    }
    if let Some(n) = cli.min_conclusion_cells {
        config.min_conclusion_cells = n;
    }
    if !cli.check_metadata.is_empty() {
        config.required_metadata = cli.check_metadata.clone();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["nbcheck", "nb.ipynb"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    fn write_config(dir: &tempfile::TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("nbcheck.toml");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn no_file_no_flags_gives_defaults() {
        assert_eq!(resolve(&parse(&[])).unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve(&parse(&[
            "--expected-parts",
            "4",
            "--min-conclusion-cells",
            "0",
            "--check-metadata",
            "author",
        ]))
        .unwrap();
        assert_eq!(config.expected_parts, Some(4));
        assert_eq!(config.min_conclusion_cells, 0);
        assert_eq!(config.min_intro_cells, 1);
        assert_eq!(config.required_metadata, vec!["author"]);
    }

    #[test]
    fn file_values_survive_absent_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "require_transitions = true\nmin_intro_cells = 3\nrequired_metadata = [\"repo\", \"version\"]\n",
        );
        let config = resolve(&parse(&["--config", path.to_str().unwrap()])).unwrap();
        assert!(config.require_transitions);
        assert_eq!(config.min_intro_cells, 3);
        assert_eq!(config.required_metadata, vec!["repo", "version"]);
        assert_eq!(config.min_conclusion_cells, 2);
    }

    #[test]
    fn flags_beat_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "expected_parts = 8\nmin_intro_cells = 3\n");
        let config = resolve(&parse(&[
            "--config",
            path.to_str().unwrap(),
            "--expected-parts",
            "5",
        ]))
        .unwrap();
        assert_eq!(config.expected_parts, Some(5));
        assert_eq!(config.min_intro_cells, 3);
    }

    #[test]
    fn file_can_replace_symbol_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "decorative_symbols = \"🦀🔥\"\n");
        let config = load_file(&path).unwrap();
        assert_eq!(config.decorative_symbols, "🦀🔥");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "expected_part = 8\n");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().starts_with("cannot read config"));
    }
}
