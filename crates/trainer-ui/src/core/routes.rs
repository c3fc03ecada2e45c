//! Routing definitions for the Trainer UI.
//!
//! # Design
//! - `Route` drives `yew-router`; `ROUTE_TABLE` is the same table in declaration order.
//! - Resolution and name lookup are DOM-free so they test natively.

use thiserror::Error;
use yew_router::prelude::*;

/// Every routed view of the mini-app, plus the router fallback.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug, Hash)]
pub enum Route {
    /// Landing view.
    #[at("/")]
    Home,
    /// Client profile.
    #[at("/profile")]
    Profile,
    /// Subscription plans and status.
    #[at("/subscriptions")]
    Subscriptions,
    /// Training calendar.
    #[at("/calendar")]
    Calendar,
    /// Food log and macro totals.
    #[at("/macros")]
    Macros,
    /// Assistant chat.
    #[at("/chatbot")]
    Chatbot,
    /// Trainer-facing overview.
    #[at("/trainer-dashboard")]
    TrainerDashboard,
    /// Fallback for any path the table does not declare.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// URL path pattern.
    pub path: &'static str,
    /// Identifier used for programmatic navigation.
    pub name: &'static str,
    /// View rendered when `path` matches.
    pub route: Route,
}

/// Declared routes in table order. `Route::NotFound` is deliberately absent.
pub const ROUTE_TABLE: [RouteEntry; 7] = [
    RouteEntry {
        path: "/",
        name: "Home",
        route: Route::Home,
    },
    RouteEntry {
        path: "/profile",
        name: "Profile",
        route: Route::Profile,
    },
    RouteEntry {
        path: "/subscriptions",
        name: "Subscriptions",
        route: Route::Subscriptions,
    },
    RouteEntry {
        path: "/calendar",
        name: "Calendar",
        route: Route::Calendar,
    },
    RouteEntry {
        path: "/macros",
        name: "Macros",
        route: Route::Macros,
    },
    RouteEntry {
        path: "/chatbot",
        name: "Chatbot",
        route: Route::Chatbot,
    },
    RouteEntry {
        path: "/trainer-dashboard",
        name: "TrainerDashboard",
        route: Route::TrainerDashboard,
    },
];

const NOT_FOUND_PATH: &str = "/404";
const NOT_FOUND_NAME: &str = "NotFound";

/// Failures from programmatic route lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No declared route carries the requested name.
    #[error("no route named `{0}`")]
    UnknownName(String),
}

impl Route {
    /// Declared routes in table order.
    #[must_use]
    pub fn declared() -> [Self; 7] {
        ROUTE_TABLE.map(|entry| entry.route)
    }

    /// Table row for this route; `None` for the fallback.
    #[must_use]
    pub fn entry(self) -> Option<RouteEntry> {
        ROUTE_TABLE.into_iter().find(|entry| entry.route == self)
    }

    /// Path the route is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.entry().map_or(NOT_FOUND_PATH, |entry| entry.path)
    }

    /// Name used for programmatic navigation.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().map_or(NOT_FOUND_NAME, |entry| entry.name)
    }

    /// Translation key for the navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Profile => "nav.profile",
            Self::Subscriptions => "nav.subscriptions",
            Self::Calendar => "nav.calendar",
            Self::Macros => "nav.macros",
            Self::Chatbot => "nav.chatbot",
            Self::TrainerDashboard => "nav.trainer_dashboard",
            Self::NotFound => "nav.not_found",
        }
    }

    /// Look up a declared route by its exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownName`] when no table row carries `name`.
    pub fn from_name(name: &str) -> Result<Self, RouteError> {
        ROUTE_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.route)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))
    }
}

/// Resolve a location path to a declared route.
///
/// Query and fragment suffixes are dropped and a single trailing slash is
/// ignored, matching the router's recognizer.
/// Returns `None` for anything the table does not declare, including `/404`.
#[must_use]
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTE_TABLE
        .iter()
        .find(|entry| entry.path == normalized)
        .map(|entry| entry.route)
}

/// Reduce a `<base href>` value to a router basename.
///
/// Absolute URLs keep only their path. A root or empty base yields `None`.
#[must_use]
pub fn normalize_basename(href: &str) -> Option<String> {
    let href = href.trim();
    let path = match href.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => href,
    };
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_paths_are_unique() {
        let paths: HashSet<_> = ROUTE_TABLE.iter().map(|entry| entry.path).collect();
        assert_eq!(paths.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn table_names_are_unique() {
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn table_agrees_with_route_accessors() {
        for entry in ROUTE_TABLE {
            assert_eq!(entry.route.path(), entry.path);
            assert_eq!(entry.route.name(), entry.name);
            assert_eq!(entry.route.to_path(), entry.path);
        }
    }

    #[test]
    fn router_declares_every_table_path() {
        let declared = Route::routes();
        for entry in ROUTE_TABLE {
            assert!(declared.contains(&entry.path), "missing {}", entry.path);
        }
    }

    #[test]
    fn literal_paths_resolve_to_named_views() {
        assert_eq!(resolve("/"), Some(Route::Home));
        assert_eq!(resolve("/profile"), Some(Route::Profile));
        assert_eq!(resolve("/subscriptions"), Some(Route::Subscriptions));
        assert_eq!(resolve("/calendar"), Some(Route::Calendar));
        assert_eq!(resolve("/macros"), Some(Route::Macros));
        assert_eq!(resolve("/chatbot"), Some(Route::Chatbot));
        assert_eq!(
            resolve("/trainer-dashboard"),
            Some(Route::TrainerDashboard)
        );
        assert_eq!(resolve("/macros").map(Route::name), Some("Macros"));
    }

    #[test]
    fn router_recognizes_table_paths() {
        for entry in ROUTE_TABLE {
            assert_eq!(Route::recognize(entry.path), Some(entry.route));
        }
    }

    #[test]
    fn undeclared_paths_do_not_match() {
        assert_eq!(resolve("/does-not-exist"), None);
        assert_eq!(resolve("/404"), None);
        assert_eq!(resolve("/Macros"), None);
        assert_eq!(resolve("/macros/extra"), None);
        assert_eq!(
            Route::recognize("/does-not-exist"),
            Some(Route::NotFound)
        );
    }

    #[test]
    fn resolve_agrees_with_router_on_edge_paths() {
        let paths = [
            "/",
            "/calendar/",
            "/calendar//",
            "/macros/extra",
            "/Macros",
            "/TRAINER-DASHBOARD",
            "/trainer-dashboard/",
            "/trainer_dashboard",
            "/profile///",
            "/404",
            "/does-not-exist",
        ];
        for path in paths {
            let routed = Route::recognize(path).filter(|route| *route != Route::NotFound);
            assert_eq!(resolve(path), routed, "path {path}");
        }
    }

    #[test]
    fn resolve_strips_only_one_trailing_slash() {
        assert_eq!(resolve("/calendar/"), Some(Route::Calendar));
        assert_eq!(resolve("/calendar//"), None);
        assert_eq!(resolve("/chatbot//?x=1"), None);
    }

    #[test]
    fn fallback_has_no_table_row() {
        assert_eq!(Route::NotFound.entry(), None);
        assert_eq!(Route::NotFound.path(), "/404");
        assert_eq!(Route::NotFound.name(), "NotFound");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn resolve_ignores_query_fragment_and_trailing_slash() {
        assert_eq!(resolve("/calendar/"), Some(Route::Calendar));
        assert_eq!(resolve("/calendar?week=2"), Some(Route::Calendar));
        assert_eq!(resolve("/chatbot#latest"), Some(Route::Chatbot));
        assert_eq!(resolve(""), Some(Route::Home));
        assert_eq!(resolve("/?ref=bot"), Some(Route::Home));
    }

    #[test]
    fn from_name_round_trips_declared_routes() {
        for route in Route::declared() {
            assert_eq!(Route::from_name(route.name()), Ok(route));
        }
    }

    #[test]
    fn from_name_rejects_unknown_and_miscased_names() {
        assert_eq!(
            Route::from_name("macros"),
            Err(RouteError::UnknownName("macros".to_string()))
        );
        assert!(Route::from_name("NotFound").is_err());
        assert!(Route::from_name("").is_err());
        assert_eq!(
            Route::from_name("Settings").unwrap_err().to_string(),
            "no route named `Settings`"
        );
    }

    #[test]
    fn declared_excludes_fallback() {
        let declared = Route::declared();
        assert_eq!(declared.len(), 7);
        assert!(!declared.contains(&Route::NotFound));
        assert_eq!(declared[0], Route::Home);
        assert_eq!(declared[6], Route::TrainerDashboard);
    }

    #[test]
    fn basename_normalization() {
        assert_eq!(normalize_basename("/"), None);
        assert_eq!(normalize_basename(""), None);
        assert_eq!(normalize_basename("/app/"), Some("/app".to_string()));
        assert_eq!(normalize_basename("app"), Some("/app".to_string()));
        assert_eq!(
            normalize_basename("https://example.test/mini/app/"),
            Some("/mini/app".to_string())
        );
        assert_eq!(normalize_basename("https://example.test"), None);
        assert_eq!(normalize_basename("/app/?v=3"), Some("/app".to_string()));
    }
}
