//! `[docs.publisher]` section configuration.
//!
//! Selects where generated documentation artifacts are persisted: the
//! local filesystem or one of three cloud object stores. The section is a
//! tagged union keyed by `type`; exactly one provider sub-table applies.
//!
//! # Example
//!
//! ```toml
//! [docs.publisher]
//! type = "awsS3"              # local | awsS3 | azureBlobStorage | googleGcs
//!
//! [docs.publisher.awsS3]
//! bucket_name = "portal-docs"
//! region = "eu-west-1"        # Optional: falls back to ambient AWS config
//! ```
//!
//! Credential fields are always optional in the sense that leaving them
//! out delegates authentication to the provider's own credential chain
//! (environment variables, instance profiles, shared config files). This
//! crate carries the strings; it never talks to a provider.
//!
//! The provider sub-table itself is optional at parse time even when
//! `type` selects it - a historical looseness kept for compatibility.
//! `validate` reports the missing table as an error with a fix hint.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Storage backend selection, keyed by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PublisherConfig {
    /// Keep generated docs on the local filesystem.
    #[serde(rename = "local")]
    Local,

    /// Publish to an AWS S3 bucket.
    #[serde(rename = "awsS3")]
    AwsS3 {
        #[serde(rename = "awsS3")]
        aws_s3: Option<AwsS3Config>,
    },

    /// Publish to an Azure Blob Storage container.
    #[serde(rename = "azureBlobStorage")]
    AzureBlobStorage {
        #[serde(rename = "azureBlobStorage")]
        azure_blob_storage: Option<AzureBlobStorageConfig>,
    },

    /// Publish to a Google Cloud Storage bucket.
    #[serde(rename = "googleGcs")]
    GoogleGcs {
        #[serde(rename = "googleGcs")]
        google_gcs: Option<GoogleGcsConfig>,
    },
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self::Local
    }
}

impl PublisherConfig {
    /// The `type` discriminator literal for this variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::AwsS3 { .. } => "awsS3",
            Self::AzureBlobStorage { .. } => "azureBlobStorage",
            Self::GoogleGcs { .. } => "googleGcs",
        }
    }

    /// Validate publisher configuration.
    ///
    /// # Checks
    /// - Selected provider sub-table must be present
    /// - Bucket/container/account identifiers must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Local => {}
            Self::AwsS3 { aws_s3 } => match aws_s3 {
                Some(config) => config.validate(diag),
                None => Self::missing_table(
                    diag,
                    FieldPath::new("docs.publisher.awsS3"),
                    "awsS3",
                ),
            },
            Self::AzureBlobStorage {
                azure_blob_storage,
            } => match azure_blob_storage {
                Some(config) => config.validate(diag),
                None => Self::missing_table(
                    diag,
                    FieldPath::new("docs.publisher.azureBlobStorage"),
                    "azureBlobStorage",
                ),
            },
            Self::GoogleGcs { google_gcs } => match google_gcs {
                Some(config) => config.validate(diag),
                None => Self::missing_table(
                    diag,
                    FieldPath::new("docs.publisher.googleGcs"),
                    "googleGcs",
                ),
            },
        }
    }

    fn missing_table(diag: &mut ConfigDiagnostics, field: FieldPath, provider: &'static str) {
        diag.error_with_hint(
            field,
            format!("required when type is \"{provider}\""),
            format!("add a [docs.publisher.{provider}] table"),
        );
    }
}

// ============================================================================
// AWS S3
// ============================================================================

/// `[docs.publisher.awsS3]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsS3Config {
    /// Storage bucket name.
    pub bucket_name: String,

    /// AWS region. Falls back to `AWS_REGION` or the shared aws config.
    pub region: Option<String>,

    /// Explicit credentials. Falls back to the provider credential chain.
    pub credentials: Option<AwsCredentialsConfig>,
}

impl AwsS3Config {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.bucket_name.is_empty() {
            diag.error(
                FieldPath::new("docs.publisher.awsS3.bucket_name"),
                "must not be empty",
            );
        }
    }
}

/// Explicit AWS credentials with optional role assumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsCredentialsConfig {
    /// User access key id.
    pub access_key_id: String,

    /// User secret access key.
    pub secret_access_key: String,

    /// ARN of a role to be assumed.
    pub role_arn: Option<String>,
}

// ============================================================================
// Azure Blob Storage
// ============================================================================

/// `[docs.publisher.azureBlobStorage]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureBlobStorageConfig {
    /// Storage container name.
    pub container_name: String,

    /// Account credentials. The account key is optional; without it the
    /// environment is used to authenticate.
    pub credentials: AzureCredentialsConfig,
}

impl AzureBlobStorageConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.container_name.is_empty() {
            diag.error(
                FieldPath::new("docs.publisher.azureBlobStorage.container_name"),
                "must not be empty",
            );
        }
        if self.credentials.account_name.is_empty() {
            diag.error(
                FieldPath::new("docs.publisher.azureBlobStorage.credentials.account_name"),
                "must not be empty",
            );
        }
    }
}

/// Azure storage account credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureCredentialsConfig {
    /// Account access name.
    pub account_name: String,

    /// Account secret primary key.
    pub account_key: Option<String>,
}

// ============================================================================
// Google Cloud Storage
// ============================================================================

/// `[docs.publisher.googleGcs]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleGcsConfig {
    /// Storage bucket name.
    pub bucket_name: String,

    /// API key used to write to the bucket. Without it the environment is
    /// used to authenticate.
    pub credentials: Option<String>,
}

impl GoogleGcsConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.bucket_name.is_empty() {
            diag.error(
                FieldPath::new("docs.publisher.googleGcs.bucket_name"),
                "must not be empty",
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
