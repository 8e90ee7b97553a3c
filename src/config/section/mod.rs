//! Configuration section definitions.
//!
//! Each module corresponds to a section in `portico.toml`:
//!
//! | Module      | TOML Section       | Purpose                          |
//! |-------------|--------------------|----------------------------------|
//! | `docs`      | `[docs]`           | Builder, generator, endpoints    |
//! | `publisher` | `[docs.publisher]` | Storage backend selection        |

mod docs;
mod publisher;

pub use docs::{DocsBuilder, DocsSectionConfig, GeneratorConfig, GeneratorRunner};
pub use publisher::{
    AwsCredentialsConfig, AwsS3Config, AzureBlobStorageConfig, AzureCredentialsConfig,
    GoogleGcsConfig, PublisherConfig,
};
