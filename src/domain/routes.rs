//! Route classification for the navigation shell.
//!
//! Every predicate here is pure and total over any string. Predicates are
//! not mutually exclusive (`/papers/search` is both a papers route and a
//! search route); precedence between them is decided by the dispatcher's
//! classification order, not here.

use super::models::Role;

pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PREFIX: &str = "/admin";
pub const PRICING_PATH: &str = "/pricing";
pub const FAQ_PATH: &str = "/faq";

pub const AUTH_PATHS: [&str; 5] = [
    "/login",
    "/signup",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
];

pub const ROLE_DASHBOARD_PATHS: [(&str, Role); 4] = [
    ("/dashboard/researcher", Role::Researcher),
    ("/dashboard/pro-researcher", Role::ProResearcher),
    ("/dashboard/team-lead", Role::TeamLead),
    ("/dashboard/admin", Role::Admin),
];

pub const MARKETING_SECTIONS: [&str; 7] = [
    "/features",
    "/about",
    "/contact",
    "/blog",
    "/careers",
    "/customers",
    "/changelog",
];

pub const LEGAL_PATHS: [&str; 4] = ["/privacy", "/terms", "/cookies", "/security"];

pub const STATUS_PATHS: [&str; 3] = ["/404", "/500", "/maintenance"];

/// High-level view family a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    Auth,
    Dashboard,
    Admin,
    Papers,
    Collections,
    Workspace,
    Research,
    Team,
    Analytics,
    Notifications,
    Settings,
    Profile,
    Billing,
    Integrations,
    Onboarding,
    Help,
    Search,
    Pricing,
    Faq,
    Marketing,
    Legal,
    Status,
    Root,
    Unclassified,
}

/// True for `root` itself and anything strictly below it, so `/papers` and
/// `/papers/7` match `/papers` while `/papersmith` does not.
pub fn in_section(path: &str, root: &str) -> bool {
    match path.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Remainder of `path` after `prefix`, if non-empty.
///
/// `detail_param("/papers/42", "/papers/")` is `Some("42")`. The remainder is
/// returned verbatim; nested segments are not split.
pub fn detail_param<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

pub fn is_root_route(path: &str) -> bool {
    path == ROOT_PATH
}

pub fn is_auth_route(path: &str) -> bool {
    AUTH_PATHS.contains(&path)
}

pub fn is_dashboard_route(path: &str) -> bool {
    in_section(path, DASHBOARD_PATH)
}

pub fn is_role_dashboard_route(path: &str) -> bool {
    ROLE_DASHBOARD_PATHS.iter().any(|(p, _)| *p == path)
}

/// Raw prefix test; `/administration` counts as an admin route.
pub fn is_admin_route(path: &str) -> bool {
    path.starts_with(ADMIN_PREFIX)
}

pub fn is_papers_route(path: &str) -> bool {
    in_section(path, "/papers")
}

pub fn is_collections_route(path: &str) -> bool {
    in_section(path, "/collections")
}

pub fn is_workspace_route(path: &str) -> bool {
    in_section(path, "/workspace")
}

pub fn is_research_route(path: &str) -> bool {
    in_section(path, "/research")
}

pub fn is_team_route(path: &str) -> bool {
    in_section(path, "/team")
}

pub fn is_analytics_route(path: &str) -> bool {
    in_section(path, "/analytics")
}

pub fn is_notifications_route(path: &str) -> bool {
    in_section(path, "/notifications")
}

pub fn is_settings_route(path: &str) -> bool {
    in_section(path, "/settings")
}

pub fn is_profile_route(path: &str) -> bool {
    in_section(path, "/profile")
}

pub fn is_billing_route(path: &str) -> bool {
    in_section(path, "/billing")
}

pub fn is_integrations_route(path: &str) -> bool {
    in_section(path, "/integrations")
}

pub fn is_onboarding_route(path: &str) -> bool {
    in_section(path, "/onboarding")
}

pub fn is_help_route(path: &str) -> bool {
    in_section(path, "/help") || in_section(path, "/docs")
}

/// Global search, plus any screen whose last segment is `search`.
pub fn is_search_route(path: &str) -> bool {
    in_section(path, "/search") || path.rsplit('/').next() == Some("search")
}

pub fn is_pricing_route(path: &str) -> bool {
    path == PRICING_PATH
}

pub fn is_faq_route(path: &str) -> bool {
    path == FAQ_PATH
}

pub fn is_marketing_route(path: &str) -> bool {
    MARKETING_SECTIONS
        .iter()
        .any(|section| in_section(path, section))
}

pub fn is_legal_route(path: &str) -> bool {
    LEGAL_PATHS.contains(&path)
}

pub fn is_status_route(path: &str) -> bool {
    STATUS_PATHS.contains(&path)
}

/// Role encoded by one of the four role dashboards.
///
/// Any other input yields [`Role::Researcher`].
pub fn role_from_path(path: &str) -> Role {
    path.strip_prefix("/dashboard/")
        .and_then(|slug| slug.parse().ok())
        .filter(|role: &Role| ROLE_DASHBOARD_PATHS.iter().any(|(p, r)| *p == path && r == role))
        .unwrap_or_default()
}
