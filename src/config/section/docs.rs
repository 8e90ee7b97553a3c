//! `[docs]` section configuration.
//!
//! Controls how documentation is built, generated, and published.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! builder = "local"           # local | external
//!
//! [docs.generator]
//! runner = "docker"           # local | docker
//!
//! [docs.publisher]
//! type = "local"              # storage backend, see publisher module
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

use super::publisher::PublisherConfig;

/// Who builds the documentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocsBuilder {
    /// Docs are built by this portal instance (default).
    #[default]
    Local,
    /// Docs are built by an external pipeline and only served here.
    External,
}

/// How the generator pipeline runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorRunner {
    /// Run the generator on the host (default).
    #[default]
    Local,
    /// Run the generator inside a container.
    Docker,
}

/// `[docs.generator]` settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Generator execution environment.
    pub runner: GeneratorRunner,
}

/// `[docs]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSectionConfig {
    /// Documentation build mode.
    pub builder: DocsBuilder,

    /// Generator pipeline settings.
    pub generator: GeneratorConfig,

    /// Storage backend for published artifacts.
    pub publisher: PublisherConfig,

    /// Docs API endpoint, e.g. `http://localhost:7000/api/docs`.
    /// Deprecated: discovered from the portal backend instead.
    pub request_url: Option<String>,

    /// Static storage endpoint, e.g.
    /// `http://localhost:7000/api/docs/static/docs`.
    /// Deprecated: discovered from the portal backend instead.
    pub storage_url: Option<String>,

    /// Custom passthrough fields for plugin consumers.
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for DocsSectionConfig {
    fn default() -> Self {
        Self {
            builder: DocsBuilder::default(),
            generator: GeneratorConfig::default(),
            publisher: PublisherConfig::default(),
            request_url: None,
            storage_url: None,
            extra: FxHashMap::default(),
        }
    }
}

impl DocsSectionConfig {
    /// Validate the `[docs]` section.
    ///
    /// # Checks
    /// - Deprecated endpoint fields produce warnings when set
    /// - Endpoint fields must be valid http(s) URLs when set
    /// - Publisher sub-table checks (see publisher module)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const REQUEST_URL: FieldPath = FieldPath::new("docs.request_url");
        const STORAGE_URL: FieldPath = FieldPath::new("docs.storage_url");

        if let Some(url) = &self.request_url {
            diag.warn(REQUEST_URL, "deprecated".to_string());
            Self::validate_endpoint(REQUEST_URL, url, diag);
        }
        if let Some(url) = &self.storage_url {
            diag.warn(STORAGE_URL, "deprecated".to_string());
            Self::validate_endpoint(STORAGE_URL, url, diag);
        }

        self.publisher.validate(diag);
    }

    /// Endpoint format check using the url crate for strict validation.
    fn validate_endpoint(field: FieldPath, url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like http://localhost:7000/api/docs",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL: {}", e),
                    "use format like http://localhost:7000/api/docs",
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_docs_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.docs.builder, DocsBuilder::Local);
        assert_eq!(config.docs.generator.runner, GeneratorRunner::Local);
        assert_eq!(config.docs.publisher, PublisherConfig::Local);
        assert!(config.docs.request_url.is_none());
        assert!(config.docs.storage_url.is_none());
        assert!(config.docs.extra.is_empty());
    }

    #[test]
    fn test_docs_builder_and_runner() {
        let config = test_parse_config(
            "[docs]\nbuilder = \"external\"\n[docs.generator]\nrunner = \"docker\"",
        );

        assert_eq!(config.docs.builder, DocsBuilder::External);
        assert_eq!(config.docs.generator.runner, GeneratorRunner::Docker);
    }

    #[test]
    fn test_docs_invalid_builder_rejected() {
        let result = crate::config::PortalConfig::from_str("[docs]\nbuilder = \"remote\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_docs_deprecated_urls_warn() {
        let config = test_parse_config(
            "[docs]\nrequest_url = \"http://localhost:7000/api/docs\"\n\
             storage_url = \"http://localhost:7000/api/docs/static/docs\"",
        );

        let mut diag = ConfigDiagnostics::new();
        config.docs.validate(&mut diag);

        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn test_docs_invalid_endpoint_url() {
        let config = test_parse_config("[docs]\nrequest_url = \"not a url\"");

        let mut diag = ConfigDiagnostics::new();
        config.docs.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_docs_non_http_endpoint_rejected() {
        let config = test_parse_config("[docs]\nstorage_url = \"ftp://example.com/docs\"");

        let mut diag = ConfigDiagnostics::new();
        config.docs.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_docs_extra_passthrough() {
        let config = test_parse_config("[docs.extra]\ntheme = \"dark\"\ndepth = 3");

        assert_eq!(
            config.docs.extra.get("theme").and_then(|v| v.as_str()),
            Some("dark")
        );
        assert_eq!(
            config.docs.extra.get("depth").and_then(|v| v.as_integer()),
            Some(3)
        );
    }
}
