//! Navigation and role resolution.
//!
//! The engine owns the current path and the active role. Only three kinds of
//! destination may change the role: the four role dashboards, anything under
//! the admin prefix, and the public pages (auth, marketing, root, pricing,
//! FAQ). Every other destination keeps whatever role is active.

use super::dispatcher;
use super::models::{NavigationState, Role};
use super::routes::{
    is_admin_route, is_auth_route, is_faq_route, is_marketing_route, is_pricing_route,
    is_role_dashboard_route, is_root_route, role_from_path,
};
use super::views::ViewTarget;

/// What a single `navigate` call did to the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTransition {
    Unchanged(Role),
    Changed { from: Role, to: Role },
}

/// Which rule decided the role for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRule {
    RoleDashboard(Role),
    AdminPrefix,
    PublicReset,
    Persist,
}

impl RoleRule {
    /// Evaluates the rules in priority order; only the first match applies.
    pub fn for_path(path: &str) -> Self {
        if is_role_dashboard_route(path) {
            RoleRule::RoleDashboard(role_from_path(path))
        } else if is_admin_route(path) {
            RoleRule::AdminPrefix
        } else if is_auth_route(path)
            || is_marketing_route(path)
            || is_root_route(path)
            || is_pricing_route(path)
            || is_faq_route(path)
        {
            RoleRule::PublicReset
        } else {
            RoleRule::Persist
        }
    }

    pub fn apply(self, current: Role) -> Role {
        match self {
            RoleRule::RoleDashboard(role) => role,
            RoleRule::AdminPrefix => Role::Admin,
            RoleRule::PublicReset => Role::Researcher,
            RoleRule::Persist => current,
        }
    }
}

/// Owns the navigation state for one controller.
///
/// # Examples
///
/// ```
/// use paperdesk::domain::{NavigationEngine, Role};
///
/// let mut engine = NavigationEngine::new();
/// engine.navigate("/dashboard/admin");
/// engine.navigate("/papers");
/// assert_eq!(engine.role(), Role::Admin);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavigationEngine {
    state: NavigationState,
}

impl NavigationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn role(&self) -> Role {
        self.state.current_role
    }

    /// Moves to `path`. Accepts any string and never fails.
    pub fn navigate(&mut self, path: &str) -> RoleTransition {
        let rule = RoleRule::for_path(path);
        let from = self.state.current_role;
        let to = rule.apply(from);

        self.state.current_path = path.to_string();
        self.state.current_role = to;

        tracing::debug!(path, ?rule, role = %to, "navigated");
        if from == to {
            RoleTransition::Unchanged(to)
        } else {
            tracing::info!(path, from = %from, to = %to, "role changed");
            RoleTransition::Changed { from, to }
        }
    }

    /// View for the current path and role.
    pub fn view(&self) -> ViewTarget {
        dispatcher::resolve(&self.state.current_path, self.state.current_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::views::PapersView;

    const PERSIST_PATHS: [&str; 12] = [
        "/papers",
        "/papers/42",
        "/collections",
        "/workspace/notes",
        "/research/assistant",
        "/team/members",
        "/settings",
        "/dashboard",
        "/dashboard/papers",
        "/search",
        "/privacy",
        "/nowhere",
    ];

    fn engine_with_role(role: Role) -> NavigationEngine {
        let mut engine = NavigationEngine::new();
        engine.navigate(&format!("/dashboard/{}", role.slug()));
        assert_eq!(engine.role(), role);
        engine
    }

    #[test]
    fn test_engine_default() {
        let engine = NavigationEngine::new();
        assert_eq!(engine.current_path(), "/");
        assert_eq!(engine.role(), Role::Researcher);
        assert_eq!(engine.view(), ViewTarget::Landing);
    }

    #[test]
    fn test_path_is_always_updated() {
        let mut engine = NavigationEngine::new();
        for path in ["/papers", "", "garbage", "/admin/users"] {
            engine.navigate(path);
            assert_eq!(engine.current_path(), path);
        }
    }

    #[test]
    fn test_role_persists_for_ordinary_paths() {
        for role in Role::ALL {
            let mut engine = engine_with_role(role);
            for path in PERSIST_PATHS {
                let transition = engine.navigate(path);
                assert_eq!(transition, RoleTransition::Unchanged(role), "path {path}");
                assert_eq!(engine.role(), role, "path {path}");
            }
        }
    }

    #[test]
    fn test_public_pages_reset_role() {
        for path in ["/login", "/", "/pricing", "/faq", "/signup", "/about", "/blog/hello"] {
            for role in Role::ALL {
                let mut engine = engine_with_role(role);
                engine.navigate(path);
                assert_eq!(engine.role(), Role::Researcher, "path {path}");
            }
        }
    }

    #[test]
    fn test_admin_prefix_locks_in_admin() {
        for role in Role::ALL {
            let mut engine = engine_with_role(role);
            engine.navigate("/admin/logs");
            assert_eq!(engine.role(), Role::Admin);
        }
    }

    #[test]
    fn test_role_dashboard_sets_encoded_role() {
        let mut engine = engine_with_role(Role::Admin);
        let transition = engine.navigate("/dashboard/pro-researcher");
        assert_eq!(
            transition,
            RoleTransition::Changed {
                from: Role::Admin,
                to: Role::ProResearcher
            }
        );
        assert_eq!(engine.view(), ViewTarget::Dashboard(Role::ProResearcher));
    }

    #[test]
    fn test_admin_dashboard_then_papers_keeps_admin() {
        let mut engine = NavigationEngine::new();
        engine.navigate("/dashboard/admin");
        assert_eq!(engine.role(), Role::Admin);

        engine.navigate("/papers");
        assert_eq!(engine.role(), Role::Admin);
        assert_eq!(engine.view(), ViewTarget::Papers(PapersView::List));
    }

    #[test]
    fn test_bare_dashboard_renders_active_role() {
        let mut engine = engine_with_role(Role::TeamLead);
        engine.navigate("/papers");
        engine.navigate("/dashboard");
        assert_eq!(engine.view(), ViewTarget::Dashboard(Role::TeamLead));
    }

    #[test]
    fn test_navigate_is_idempotent() {
        for path in ["/admin", "/papers", "/login", "/dashboard/team-lead", "/x"] {
            let mut engine = engine_with_role(Role::ProResearcher);
            engine.navigate(path);
            let first = engine.state().clone();
            let transition = engine.navigate(path);
            assert_eq!(engine.state(), &first);
            assert_eq!(transition, RoleTransition::Unchanged(first.current_role));
        }
    }

    #[test]
    fn test_rule_priority() {
        // the admin dashboard is decided by the role-dashboard rule, not the prefix rule
        assert_eq!(
            RoleRule::for_path("/dashboard/admin"),
            RoleRule::RoleDashboard(Role::Admin)
        );
        assert_eq!(RoleRule::for_path("/admin"), RoleRule::AdminPrefix);
        assert_eq!(RoleRule::for_path("/faq"), RoleRule::PublicReset);
        assert_eq!(RoleRule::for_path("/legal"), RoleRule::Persist);
    }
}
