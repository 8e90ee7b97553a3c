//! Portico - routing and docs-publishing core for a developer portal.
//!
//! Two independent surfaces:
//!
//! - [`routing`]: opaque route references ([`AbsoluteRouteRef`],
//!   [`ExternalRouteRef`]) and the [`RouteRegistry`] that binds and
//!   resolves them. Refs carry identity, not paths - concrete paths are
//!   registered by the hosting app at wiring time.
//! - [`config`]: the `portico.toml` configuration surface, including the
//!   `[docs.publisher]` storage backend selection (local disk or one of
//!   three cloud object stores).

pub mod config;
pub mod logger;
pub mod routing;
pub mod utils;

pub use config::{
    ConfigDiagnostics, ConfigError, FieldPath, PortalConfig, cfg, init_config, reload_config,
};
pub use routing::{
    AbsoluteRouteRef, ExternalRouteRef, ExternalRouteRefOptions, IconRef, RouteRefConfig,
    RouteRefId, RouteRegistry, RoutingError,
};
