//! Route reference types.
//!
//! This module defines the identity tokens of the routing layer:
//! absolute refs (a navigable location owned by this app) and external
//! refs (a navigation point another module is expected to bind).
//!
//! Refs are compared by their generated [`RouteRefId`], never by field
//! values: two refs constructed with identical metadata are distinct
//! routes. Cloning a ref preserves its id - a clone is the same handle.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic source of route ref ids, process-wide.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// RouteRefId & IconRef
// ============================================================================

/// Opaque identity of a route ref, assigned at construction.
///
/// Used as the registry key in place of reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteRefId(u64);

impl RouteRefId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Named reference to a renderable icon.
///
/// The name is resolved to an actual renderable by the hosting app's icon
/// set; this crate only carries the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef(&'static str);

impl IconRef {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

// ============================================================================
// AbsoluteRouteRef
// ============================================================================

/// Construction parameters for [`AbsoluteRouteRef`].
#[derive(Debug, Clone, Default)]
pub struct RouteRefConfig {
    /// Display title read by UI chrome.
    pub title: String,

    /// Icon read by UI chrome, if any.
    pub icon: Option<IconRef>,

    /// Legacy path. Route refs no longer decide their own path; paths are
    /// registered in the [`RouteRegistry`](super::RouteRegistry) instead.
    pub path: Option<String>,

    /// Ordered parameter names whose values are supplied at resolution
    /// time by the registry, not stored on the ref.
    pub params: Vec<String>,
}

/// A route ref for a location owned by this app.
///
/// Immutable after construction; typically a module-scoped singleton:
///
/// ```
/// use std::sync::LazyLock;
/// use portico::{AbsoluteRouteRef, RouteRefConfig};
///
/// static DOCS_ROUTE: LazyLock<AbsoluteRouteRef> = LazyLock::new(|| {
///     AbsoluteRouteRef::new(RouteRefConfig {
///         title: "Documentation".into(),
///         ..Default::default()
///     })
/// });
/// ```
#[derive(Debug, Clone)]
pub struct AbsoluteRouteRef {
    id: RouteRefId,
    config: RouteRefConfig,
}

impl AbsoluteRouteRef {
    /// Create a new ref with a fresh id. Cannot fail.
    pub fn new(config: RouteRefConfig) -> Self {
        Self {
            id: RouteRefId::next(),
            config,
        }
    }

    /// The generated identity of this ref.
    pub const fn id(&self) -> RouteRefId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub const fn icon(&self) -> Option<IconRef> {
        self.config.icon
    }

    /// Legacy path, or `""` when unset.
    #[deprecated(note = "look up paths via the RouteRegistry instead")]
    pub fn path(&self) -> &str {
        self.config.path.as_deref().unwrap_or("")
    }

    /// Ordered parameter names for this route.
    pub fn params(&self) -> &[String] {
        &self.config.params
    }
}

impl fmt::Display for AbsoluteRouteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "routeRef{{title={}}}", self.title())
    }
}

// ============================================================================
// ExternalRouteRef
// ============================================================================

/// Construction parameters for [`ExternalRouteRef`].
#[derive(Debug, Clone)]
pub struct ExternalRouteRefOptions {
    /// Identifier for this route, used to identify it in error messages.
    pub id: String,

    /// Whether this route is optional, defaults to false.
    ///
    /// Optional external routes are not required to be bound in the app;
    /// resolving an unbound optional ref yields `None` instead of an
    /// error.
    pub optional: bool,
}

impl ExternalRouteRefOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A route ref bound (or not) by some other module.
#[derive(Debug, Clone)]
pub struct ExternalRouteRef {
    id: RouteRefId,
    name: String,
    optional: bool,
}

impl ExternalRouteRef {
    /// Create a new external ref with a fresh id. Cannot fail.
    pub fn new(options: ExternalRouteRefOptions) -> Self {
        Self {
            id: RouteRefId::next(),
            name: options.id,
            optional: options.optional,
        }
    }

    /// The generated identity of this ref.
    pub const fn id(&self) -> RouteRefId {
        self.id
    }

    /// Diagnostic identifier carried in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for ExternalRouteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "externalRouteRef{{{}}}", self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> AbsoluteRouteRef {
        AbsoluteRouteRef::new(RouteRefConfig {
            title: title.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_absolute_ref_accessors() {
        let icon = IconRef::new("docs");
        let route = AbsoluteRouteRef::new(RouteRefConfig {
            title: "Documentation".to_string(),
            icon: Some(icon),
            path: Some("/docs".to_string()),
            params: vec!["name".to_string(), "kind".to_string()],
        });

        assert_eq!(route.title(), "Documentation");
        assert_eq!(route.icon(), Some(icon));
        #[allow(deprecated)]
        {
            assert_eq!(route.path(), "/docs");
        }
        assert_eq!(route.params(), ["name", "kind"]);
    }

    #[test]
    fn test_absolute_ref_defaults() {
        let route = titled("Home");
        assert_eq!(route.icon(), None);
        #[allow(deprecated)]
        {
            assert_eq!(route.path(), "");
        }
        assert!(route.params().is_empty());
    }

    #[test]
    fn test_absolute_ref_display() {
        let route = titled("Catalog");
        assert_eq!(route.to_string(), "routeRef{title=Catalog}");
    }

    #[test]
    fn test_identical_fields_distinct_identity() {
        // Refs are not value-interned: same metadata, different routes.
        let a = titled("Docs");
        let b = titled("Docs");
        assert_ne!(a.id(), b.id());

        let x = ExternalRouteRef::new(ExternalRouteRefOptions::new("docs"));
        let y = ExternalRouteRef::new(ExternalRouteRefOptions::new("docs"));
        assert_ne!(x.id(), y.id());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let route = titled("Docs");
        assert_eq!(route.id(), route.clone().id());
    }

    #[test]
    fn test_external_ref_optional_default() {
        let route = ExternalRouteRef::new(ExternalRouteRefOptions::new("x"));
        assert!(!route.is_optional());

        let route = ExternalRouteRef::new(ExternalRouteRefOptions::new("x").optional());
        assert!(route.is_optional());
    }

    #[test]
    fn test_external_ref_display_contains_name() {
        let route = ExternalRouteRef::new(ExternalRouteRefOptions::new("foo"));
        assert_eq!(route.to_string(), "externalRouteRef{foo}");
        assert!(route.to_string().contains("foo"));
    }

    #[test]
    fn test_icon_ref_name() {
        assert_eq!(IconRef::new("book").name(), "book");
    }
}
