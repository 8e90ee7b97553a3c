//! Route references and the registry that resolves them.
//!
//! A route ref is an opaque handle for a navigable location. Refs carry
//! display metadata (title, icon) but never decide their own path -
//! concrete paths are registered against the ref's generated id in a
//! [`RouteRegistry`] when the hosting app is wired together.
//!
//! External refs ([`ExternalRouteRef`]) mark navigation points that some
//! other module may (or, when `optional`, may not) bind to a real target.

mod error;
mod registry;
mod route_ref;

pub use error::RoutingError;
pub use registry::RouteRegistry;
pub use route_ref::{
    AbsoluteRouteRef, ExternalRouteRef, ExternalRouteRefOptions, IconRef, RouteRefConfig,
    RouteRefId,
};
