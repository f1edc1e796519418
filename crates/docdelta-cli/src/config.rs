//! CLI configuration
//!
//! Settings come from an optional TOML file. Command-line flags win over
//! file values, file values win over defaults.

use clap::ValueEnum;
use docdelta_core::limits::DEFAULT_MAX_CELLS;
use docdelta_core::logging_facility::Profile;
use docdelta_core::{DocDeltaError, InputLimits};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "docdelta.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of `docdelta.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Alignment table budget; `0` disables the check
    pub max_cells: Option<u64>,
    pub format: Option<OutputFormat>,
    /// `dev`, `prod` or `test`; logging stays off when unset
    pub log_profile: Option<String>,
    pub verify: Option<bool>,
}

impl CliConfig {
    pub fn parse(contents: &str, path: &Path) -> Result<Self, DocDeltaError> {
        toml::from_str(contents).map_err(|e| DocDeltaError::InvalidConfig {
            reason: format!("{}: {}", path.display(), e),
        })
    }

    /// Load the explicit file, else `docdelta.toml` in `dir`, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, DocDeltaError> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| DocDeltaError::InvalidConfig {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::parse(&contents, &path)
    }

    pub fn limits(&self, flag: Option<u64>) -> InputLimits {
        match flag.or(self.max_cells) {
            Some(0) => InputLimits::unlimited(),
            Some(cells) => InputLimits::with_max_cells(cells),
            None => InputLimits::with_max_cells(DEFAULT_MAX_CELLS),
        }
    }

    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    pub fn verify(&self, flag: bool) -> bool {
        flag || self.verify.unwrap_or(false)
    }

    pub fn log_profile(&self, flag: Option<&str>) -> Result<Option<Profile>, DocDeltaError> {
        flag.or(self.log_profile.as_deref())
            .map(|name| name.parse::<Profile>())
            .transpose()
            .map_err(|reason| DocDeltaError::InvalidConfig { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_file() {
        let config = CliConfig::parse(
            "max_cells = 1000\nformat = \"json\"\nlog_profile = \"prod\"\nverify = true\n",
            Path::new("docdelta.toml"),
        )
        .unwrap();

        assert_eq!(config.max_cells, Some(1000));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.log_profile.as_deref(), Some("prod"));
        assert_eq!(config.verify, Some(true));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CliConfig::parse("colour = true\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, DocDeltaError::InvalidConfig { .. }));
        assert!(err.to_string().contains("x.toml"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = CliConfig {
            max_cells: Some(10),
            format: Some(OutputFormat::Json),
            log_profile: Some("dev".to_string()),
            verify: Some(false),
        };

        assert_eq!(config.limits(Some(99)).max_cells, Some(99));
        assert_eq!(config.limits(None).max_cells, Some(10));
        assert_eq!(config.format(Some(OutputFormat::Text)), OutputFormat::Text);
        assert_eq!(config.format(None), OutputFormat::Json);
        assert!(config.verify(true));
        assert_eq!(config.log_profile(Some("prod")).unwrap(), Some(Profile::Production));
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.limits(None), InputLimits::default());
        assert_eq!(config.limits(Some(0)), InputLimits::unlimited());
        assert_eq!(config.format(None), OutputFormat::Text);
        assert!(!config.verify(false));
        assert_eq!(config.log_profile(None).unwrap(), None);
    }

    #[test]
    fn test_bad_profile_is_config_error() {
        let err = CliConfig::default().log_profile(Some("loud")).unwrap_err();
        assert!(matches!(err, DocDeltaError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_missing_default_file_is_ok() {
        let dir = TempDir::new().unwrap();
        assert_eq!(CliConfig::load(None, dir.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CliConfig::load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_load_default_file_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "verify = true\n").unwrap();
        let config = CliConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.verify, Some(true));
    }
}
