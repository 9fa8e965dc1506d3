//! Optional `folio.toml` configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory under which `Website <n>` folders are allocated
    pub base_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_form_endpoint")]
    pub form_endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_endpoint: default_form_endpoint(),
        }
    }
}

fn default_minify() -> bool {
    true
}

fn default_form_endpoint() -> String {
    "https://formspree.io/f/YOUR_FORM_ID_HERE".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Path::new("no-such-folio.toml")).unwrap();

        assert!(config.output.base_dir.is_none());
        assert!(config.build.minify);
        assert!(config.contact.form_endpoint.contains("formspree.io"));
    }

    #[test]
    fn parses_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[output]\nbase_dir = \"/tmp/sites\"\n\n[build]\nminify = false\n"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.base_dir.as_deref(), Some("/tmp/sites"));
        assert!(!config.build.minify);
        // untouched table keeps its default
        assert!(config.contact.form_endpoint.contains("formspree.io"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[output\nbase_dir = 3").unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
