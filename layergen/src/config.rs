//! Configuration for layergen
//!
//! Configuration is merged from several sources, later ones winning:
//!
//! 1. Hardcoded defaults
//! 2. `./layergen.toml` (or the file passed with `--config`)
//! 3. Environment variables with the `LAYERGEN_` prefix
//! 4. Command-line flags (applied by the caller)
//!
//! # Example Configuration
//!
//! ```toml
//! # layergen.toml
//! output_root = "."
//! template_dir = ".layergen/templates"
//! ```

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default project-local configuration file
pub const CONFIG_FILE: &str = "layergen.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "LAYERGEN_";

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory generated paths are resolved against
    pub output_root: PathBuf,

    /// Directory holding template overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            template_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `./layergen.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is not valid TOML or a value
    /// has the wrong type.
    pub fn load() -> Result<Self> {
        let local = Path::new(CONFIG_FILE);
        let file = local.exists().then_some(local);
        Self::figment(file)?
            .extract()
            .context("Failed to load layergen configuration")
    }

    /// Load configuration from a specific file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, is not valid TOML, or a
    /// value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        Self::figment(Some(path))?
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    fn figment(file: Option<&Path>) -> Result<Figment> {
        let defaults = toml::to_string(&Self::default())
            .context("Failed to serialize default configuration")?;
        let mut figment = Figment::new().merge(Toml::string(&defaults));

        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "reading configuration file");
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, output_root: Option<PathBuf>, template_dir: Option<PathBuf>) -> Self {
        if let Some(root) = output_root {
            self.output_root = root;
        }
        if template_dir.is_some() {
            self.template_dir = template_dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_root, PathBuf::from("."));
        assert_eq!(config.template_dir, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layergen.toml");
        fs::write(&path, "output_root = \"out\"\ntemplate_dir = \"tpl\"\n").unwrap();

        let config = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(config.output_root, PathBuf::from("out"));
        assert_eq!(config.template_dir, Some(PathBuf::from("tpl")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layergen.toml");
        fs::write(&path, "template_dir = \"tpl\"\n").unwrap();

        let config = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(config.output_root, PathBuf::from("."));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        assert!(GeneratorConfig::load_from(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layergen.toml");
        fs::write(&path, "output_root = [1, 2]\n").unwrap();

        assert!(GeneratorConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = GeneratorConfig::default()
            .with_overrides(Some(PathBuf::from("gen")), None);
        assert_eq!(config.output_root, PathBuf::from("gen"));
        assert_eq!(config.template_dir, None);

        let config = config.with_overrides(None, Some(PathBuf::from("tpl")));
        assert_eq!(config.output_root, PathBuf::from("gen"));
        assert_eq!(config.template_dir, Some(PathBuf::from("tpl")));
    }
}
