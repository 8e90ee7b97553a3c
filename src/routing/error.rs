//! Routing error types.

use thiserror::Error;

/// Errors raised while wiring or resolving route refs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// An absolute ref was registered twice.
    #[error("route already registered: routeRef{{title={title}}}")]
    DuplicateRoute { title: String },

    /// An external ref was bound twice.
    #[error("external route already bound: externalRouteRef{{{id}}}")]
    DuplicateBinding { id: String },

    /// A required external ref had no binding at resolution time.
    #[error(
        "no binding for required external route: externalRouteRef{{{id}}}, \
         bind it to a target route or mark it optional"
    )]
    UnboundExternalRoute { id: String },

    /// A bound target had no registered path.
    #[error("no path registered for route: routeRef{{title={title}}}")]
    UnregisteredRoute { title: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_error_contains_diagnostic_id() {
        let err = RoutingError::UnboundExternalRoute {
            id: "docs-index".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("externalRouteRef{docs-index}"));
    }

    #[test]
    fn test_duplicate_route_display() {
        let err = RoutingError::DuplicateRoute {
            title: "Docs".to_string(),
        };
        assert!(format!("{err}").contains("routeRef{title=Docs}"));
    }
}
