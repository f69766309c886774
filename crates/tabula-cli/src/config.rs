use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for CLI operations, loadable from a `tabula.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema to scope metadata calls to.
    pub schema: Option<String>,

    /// Root directory generated sources are written under.
    pub output_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            output_root: PathBuf::from("src/entity"),
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metadata schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the output root for generated sources.
    pub fn output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("parse config file {}", path.display()))
    }

    /// Loads the configuration, or returns the default if the file does
    /// not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabula.toml");
        std::fs::write(&path, "schema = \"main\"\noutput_root = \"src/db\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.schema.as_deref(), Some("main"));
        assert_eq!(config.output_root, PathBuf::from("src/db"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.schema, None);
        assert_eq!(config.output_root, PathBuf::from("src/entity"));
    }

    #[test]
    fn partial_files_keep_defaults_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabula.toml");
        std::fs::write(&path, "schema = \"main\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_root, PathBuf::from("src/entity"));
    }
}
