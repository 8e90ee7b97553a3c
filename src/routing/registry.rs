//! RouteRegistry - the id-keyed mapping behind route ref resolution.
//!
//! Refs carry identity only; this registry is the single source of truth
//! for which path a ref resolves to and which target an external ref is
//! bound to. Wiring happens once at app assembly: `register` every owned
//! route, `bind` every external ref, then resolve freely.

use rustc_hash::FxHashMap;

use crate::debug;

use super::error::RoutingError;
use super::route_ref::{AbsoluteRouteRef, ExternalRouteRef, RouteRefId};

/// A registered route: resolved path plus the title kept for diagnostics.
#[derive(Debug, Clone)]
struct RegisteredRoute {
    title: String,
    path: String,
}

/// Binding of an external ref to a target route.
#[derive(Debug, Clone)]
struct Binding {
    target: RouteRefId,
    target_title: String,
}

/// Registry mapping route ref ids to paths and external bindings.
///
/// Owned by the hosting app; wired with `&mut self` during assembly and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    /// Ref id -> registered route
    routes: FxHashMap<RouteRefId, RegisteredRoute>,
    /// External ref id -> bound target
    bindings: FxHashMap<RouteRefId, Binding>,
}

impl RouteRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the resolved path for an absolute ref.
    ///
    /// Each ref may be registered once; a second registration for the same
    /// ref is a wiring error.
    pub fn register(
        &mut self,
        route_ref: &AbsoluteRouteRef,
        path: impl Into<String>,
    ) -> Result<(), RoutingError> {
        if self.routes.contains_key(&route_ref.id()) {
            return Err(RoutingError::DuplicateRoute {
                title: route_ref.title().to_string(),
            });
        }

        let path = path.into();
        debug!("routing"; "registered {route_ref} -> {path}");
        self.routes.insert(
            route_ref.id(),
            RegisteredRoute {
                title: route_ref.title().to_string(),
                path,
            },
        );
        Ok(())
    }

    /// Bind an external ref to a target route.
    ///
    /// Each external ref may be bound once; a second binding is a wiring
    /// error.
    pub fn bind(
        &mut self,
        external: &ExternalRouteRef,
        target: &AbsoluteRouteRef,
    ) -> Result<(), RoutingError> {
        if self.bindings.contains_key(&external.id()) {
            return Err(RoutingError::DuplicateBinding {
                id: external.name().to_string(),
            });
        }

        debug!("routing"; "bound {external} -> {target}");
        self.bindings.insert(
            external.id(),
            Binding {
                target: target.id(),
                target_title: target.title().to_string(),
            },
        );
        Ok(())
    }

    /// Look up the registered path for an absolute ref.
    pub fn path_of(&self, route_ref: &AbsoluteRouteRef) -> Option<&str> {
        self.routes
            .get(&route_ref.id())
            .map(|route| route.path.as_str())
    }

    /// Resolve an external ref to its bound target's path.
    ///
    /// Optional refs never raise for an absent result: unbound, or bound
    /// to a target without a registered path, both yield `Ok(None)`.
    /// Required refs error instead - [`RoutingError::UnboundExternalRoute`]
    /// carrying the ref's diagnostic id when unbound,
    /// [`RoutingError::UnregisteredRoute`] naming the dangling target when
    /// bound to a route with no path.
    pub fn resolve_external(&self, external: &ExternalRouteRef) -> Result<Option<&str>, RoutingError> {
        let Some(binding) = self.bindings.get(&external.id()) else {
            if external.is_optional() {
                return Ok(None);
            }
            return Err(RoutingError::UnboundExternalRoute {
                id: external.name().to_string(),
            });
        };

        match self.routes.get(&binding.target) {
            Some(route) => Ok(Some(route.path.as_str())),
            None if external.is_optional() => Ok(None),
            None => Err(RoutingError::UnregisteredRoute {
                title: binding.target_title.clone(),
            }),
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
