//! Portal configuration management for `portico.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── docs       # [docs] and [docs.generator]
//! │   └── publisher  # [docs.publisher] storage backends
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # PortalConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `[docs]`           | Builder mode, deprecated endpoints, extra    |
//! | `[docs.generator]` | Generator pipeline (local or docker)         |
//! | `[docs.publisher]` | Storage backend (local, S3, Azure, GCS)      |

pub mod section;
pub mod types;

// Re-export from section/
pub use section::{
    AwsCredentialsConfig, AwsS3Config, AzureBlobStorageConfig, AzureCredentialsConfig, DocsBuilder,
    DocsSectionConfig, GeneratorConfig, GeneratorRunner, GoogleGcsConfig, PublisherConfig,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing portico.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Portal root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Documentation settings
    pub docs: DocsSectionConfig,
}

impl PortalConfig {
    /// Load configuration from a `portico.toml` path.
    ///
    /// Unknown fields are collected and logged as warnings; validation
    /// errors are collected and returned all at once.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.docs.validate(&mut diag);

        // Print collected deprecation warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PortalConfig {
    let (parsed, ignored) = PortalConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: std::result::Result<PortalConfig, _> = toml::from_str("[docs\nbuilder = \"local\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_portal_config_default() {
        let config = PortalConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.docs.builder, DocsBuilder::Local);
        assert_eq!(config.docs.publisher, PublisherConfig::Local);
    }

    #[test]
    fn test_root_join() {
        let mut config = PortalConfig::default();
        config.root = PathBuf::from("/portal");
        assert_eq!(config.root_join("docs"), PathBuf::from("/portal/docs"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[docs]\nbuilder = \"local\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = PortalConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.docs.builder, DocsBuilder::Local);

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[docs]\nbuilder = \"external\"";
        let (_, ignored) = PortalConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portico.toml");
        fs::write(&path, "[docs]\nbuilder = \"external\"").unwrap();

        let config = PortalConfig::load(&path).unwrap();
        assert_eq!(config.docs.builder, DocsBuilder::External);
        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), dir.path());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PortalConfig::load(&dir.path().join("portico.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_publisher() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portico.toml");
        fs::write(&path, "[docs.publisher]\ntype = \"azureBlobStorage\"").unwrap();

        // Parses (sub-table is optional by shape) but fails validation
        let result = PortalConfig::load(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_collects_multiple_errors() {
        let config = test_parse_config(
            "[docs]\nrequest_url = \"ftp://example.com\"\n\
             [docs.publisher]\ntype = \"awsS3\"",
        );

        let err = config.validate().unwrap_err();
        let config_err = err.downcast::<ConfigError>().unwrap();
        let ConfigError::Diagnostics(diag) = config_err else {
            panic!("expected diagnostics error, got {config_err:?}");
        };
        // ftp scheme + missing awsS3 table
        assert_eq!(diag.len(), 2);
    }
}
