//! Render dispatch: picks exactly one [`ViewTarget`] for a `(path, role)` pair.
//!
//! Classification walks [`CLASSIFICATION_ORDER`] top to bottom and commits to
//! the first predicate that matches. Because predicates overlap, the order of
//! that table is part of the dispatcher's contract. Each class then resolves
//! through its own exact-match switch, falling back to a detail view for
//! paths under the class's detail prefix and to the class default otherwise.

use super::models::Role;
use super::routes::{self, RouteClass, detail_param, in_section};
use super::views::*;

pub type RoutePredicate = fn(&str) -> bool;

/// First match wins.
pub const CLASSIFICATION_ORDER: [(RouteClass, RoutePredicate); 23] = [
    (RouteClass::Auth, routes::is_auth_route),
    (RouteClass::Dashboard, routes::is_dashboard_route),
    (RouteClass::Admin, routes::is_admin_route),
    (RouteClass::Papers, routes::is_papers_route),
    (RouteClass::Collections, routes::is_collections_route),
    (RouteClass::Workspace, routes::is_workspace_route),
    (RouteClass::Research, routes::is_research_route),
    (RouteClass::Team, routes::is_team_route),
    (RouteClass::Analytics, routes::is_analytics_route),
    (RouteClass::Notifications, routes::is_notifications_route),
    (RouteClass::Settings, routes::is_settings_route),
    (RouteClass::Profile, routes::is_profile_route),
    (RouteClass::Billing, routes::is_billing_route),
    (RouteClass::Integrations, routes::is_integrations_route),
    (RouteClass::Onboarding, routes::is_onboarding_route),
    (RouteClass::Help, routes::is_help_route),
    (RouteClass::Search, routes::is_search_route),
    (RouteClass::Pricing, routes::is_pricing_route),
    (RouteClass::Faq, routes::is_faq_route),
    (RouteClass::Marketing, routes::is_marketing_route),
    (RouteClass::Legal, routes::is_legal_route),
    (RouteClass::Status, routes::is_status_route),
    (RouteClass::Root, routes::is_root_route),
];

pub fn classify(path: &str) -> RouteClass {
    CLASSIFICATION_ORDER
        .iter()
        .find(|(_, matches)| matches(path))
        .map(|(class, _)| *class)
        .unwrap_or(RouteClass::Unclassified)
}

/// Every class whose predicate matches, in dispatch order.
pub fn matching_classes(path: &str) -> Vec<RouteClass> {
    CLASSIFICATION_ORDER
        .iter()
        .filter(|(_, matches)| matches(path))
        .map(|(class, _)| *class)
        .collect()
}

/// Selects the view for `path`. Dashboard paths render for `role`, not for
/// whatever role suffix the path carries.
pub fn resolve(path: &str, role: Role) -> ViewTarget {
    view_for(classify(path), path, role)
}

pub fn view_for(class: RouteClass, path: &str, role: Role) -> ViewTarget {
    match class {
        RouteClass::Auth => ViewTarget::Auth(auth_view(path)),
        RouteClass::Dashboard => ViewTarget::Dashboard(role),
        RouteClass::Admin => ViewTarget::Admin(admin_view(path)),
        RouteClass::Papers => ViewTarget::Papers(papers_view(path)),
        RouteClass::Collections => ViewTarget::Collections(collections_view(path)),
        RouteClass::Workspace => ViewTarget::Workspace(workspace_view(path)),
        RouteClass::Research => ViewTarget::Research(research_view(path)),
        RouteClass::Team => ViewTarget::Team(team_view(path)),
        RouteClass::Analytics => ViewTarget::Analytics(analytics_view(path)),
        RouteClass::Notifications => ViewTarget::Notifications,
        RouteClass::Settings => ViewTarget::Settings(settings_view(path)),
        RouteClass::Profile => ViewTarget::Profile(
            detail_param(path, "/profile/")
                .map(|handle| ProfileView::Public(handle.to_string()))
                .unwrap_or(ProfileView::Own),
        ),
        RouteClass::Billing => ViewTarget::Billing(billing_view(path)),
        RouteClass::Integrations => ViewTarget::Integrations(
            detail_param(path, "/integrations/")
                .map(|name| IntegrationsView::Detail(name.to_string()))
                .unwrap_or(IntegrationsView::Directory),
        ),
        RouteClass::Onboarding => ViewTarget::Onboarding(
            detail_param(path, "/onboarding/")
                .map(|step| OnboardingView::Step(step.to_string()))
                .unwrap_or(OnboardingView::Welcome),
        ),
        RouteClass::Help => ViewTarget::Help(
            detail_param(path, "/help/")
                .or_else(|| detail_param(path, "/docs/"))
                .map(|slug| HelpView::Article(slug.to_string()))
                .unwrap_or(HelpView::Center),
        ),
        RouteClass::Search => ViewTarget::Search,
        RouteClass::Pricing => ViewTarget::Pricing,
        RouteClass::Faq => ViewTarget::Faq,
        RouteClass::Marketing => ViewTarget::Marketing(marketing_view(path)),
        RouteClass::Legal => ViewTarget::Legal(legal_view(path)),
        RouteClass::Status => ViewTarget::Status(status_view(path)),
        RouteClass::Root | RouteClass::Unclassified => ViewTarget::Landing,
    }
}

fn auth_view(path: &str) -> AuthView {
    match path {
        "/signup" => AuthView::Signup,
        "/forgot-password" => AuthView::ForgotPassword,
        "/reset-password" => AuthView::ResetPassword,
        "/verify-email" => AuthView::VerifyEmail,
        _ => AuthView::Login,
    }
}

fn admin_view(path: &str) -> AdminView {
    match path {
        "/admin" => AdminView::Overview,
        "/admin/users" => AdminView::UserManagement,
        "/admin/papers" => AdminView::ContentModeration,
        "/admin/analytics" => AdminView::PlatformAnalytics,
        "/admin/settings" => AdminView::SystemSettings,
        "/admin/billing" => AdminView::Billing,
        "/admin/logs" => AdminView::AuditLogs,
        _ => match detail_param(path, "/admin/users/") {
            Some(id) => AdminView::UserDetail(id.to_string()),
            None => AdminView::Overview,
        },
    }
}

fn papers_view(path: &str) -> PapersView {
    match path {
        "/papers" => PapersView::List,
        "/papers/upload" => PapersView::Upload,
        "/papers/search" => PapersView::Search,
        "/papers/import" => PapersView::Import,
        _ => match detail_param(path, "/papers/") {
            Some(id) => PapersView::Detail(id.to_string()),
            None => PapersView::List,
        },
    }
}

fn collections_view(path: &str) -> CollectionsView {
    match path {
        "/collections" => CollectionsView::List,
        "/collections/new" => CollectionsView::New,
        "/collections/shared" => CollectionsView::Shared,
        _ => match detail_param(path, "/collections/") {
            Some(id) => CollectionsView::Detail(id.to_string()),
            None => CollectionsView::List,
        },
    }
}

fn workspace_view(path: &str) -> WorkspaceView {
    match path {
        "/workspace" => WorkspaceView::Overview,
        "/workspace/projects" => WorkspaceView::Projects,
        "/workspace/notes" => WorkspaceView::Notes,
        "/workspace/drafts" => WorkspaceView::Drafts,
        _ => match detail_param(path, "/workspace/projects/") {
            Some(id) => WorkspaceView::ProjectDetail(id.to_string()),
            None => WorkspaceView::Overview,
        },
    }
}

fn research_view(path: &str) -> ResearchView {
    match path {
        "/research/assistant" => ResearchView::Assistant,
        "/research/citations" => ResearchView::Citations,
        "/research/summaries" => ResearchView::Summaries,
        "/research/trends" => ResearchView::Trends,
        "/research/graph" => ResearchView::Graph,
        _ => ResearchView::Hub,
    }
}

fn team_view(path: &str) -> TeamView {
    match path {
        "/team" => TeamView::Overview,
        "/team/members" => TeamView::Members,
        "/team/invite" => TeamView::Invite,
        "/team/activity" => TeamView::Activity,
        _ => match detail_param(path, "/team/members/") {
            Some(id) => TeamView::MemberDetail(id.to_string()),
            None => TeamView::Overview,
        },
    }
}

fn analytics_view(path: &str) -> AnalyticsView {
    match path {
        "/analytics/reading" => AnalyticsView::Reading,
        "/analytics/citations" => AnalyticsView::Citations,
        _ => AnalyticsView::Overview,
    }
}

fn settings_view(path: &str) -> SettingsView {
    match path {
        "/settings/profile" => SettingsView::Profile,
        "/settings/security" => SettingsView::Security,
        "/settings/notifications" => SettingsView::Notifications,
        "/settings/api-keys" => SettingsView::ApiKeys,
        "/settings/appearance" => SettingsView::Appearance,
        _ => SettingsView::General,
    }
}

fn billing_view(path: &str) -> BillingView {
    match path {
        "/billing/invoices" => BillingView::Invoices,
        "/billing/upgrade" => BillingView::Upgrade,
        _ => BillingView::Overview,
    }
}

fn marketing_view(path: &str) -> MarketingView {
    if let Some(slug) = detail_param(path, "/blog/") {
        return MarketingView::BlogPost(slug.to_string());
    }
    if in_section(path, "/about") {
        MarketingView::About
    } else if in_section(path, "/contact") {
        MarketingView::Contact
    } else if in_section(path, "/blog") {
        MarketingView::Blog
    } else if in_section(path, "/careers") {
        MarketingView::Careers
    } else if in_section(path, "/customers") {
        MarketingView::Customers
    } else if in_section(path, "/changelog") {
        MarketingView::Changelog
    } else {
        MarketingView::Features
    }
}

fn legal_view(path: &str) -> LegalView {
    match path {
        "/terms" => LegalView::Terms,
        "/cookies" => LegalView::Cookies,
        "/security" => LegalView::Security,
        _ => LegalView::Privacy,
    }
}

fn status_view(path: &str) -> StatusView {
    match path {
        "/500" => StatusView::ServerError,
        "/maintenance" => StatusView::Maintenance,
        _ => StatusView::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_papers_exact_views() {
        let role = Role::Researcher;
        assert_eq!(resolve("/papers", role), ViewTarget::Papers(PapersView::List));
        assert_eq!(resolve("/papers/upload", role), ViewTarget::Papers(PapersView::Upload));
        assert_eq!(resolve("/papers/search", role), ViewTarget::Papers(PapersView::Search));
        assert_eq!(resolve("/papers/import", role), ViewTarget::Papers(PapersView::Import));
    }

    #[test]
    fn test_papers_detail_fallback() {
        assert_eq!(
            resolve("/papers/42", Role::Researcher),
            ViewTarget::Papers(PapersView::Detail("42".to_string()))
        );
        assert_ne!(
            resolve("/papers/42", Role::Researcher),
            resolve("/papers", Role::Researcher)
        );
        // trailing slash with no id falls back to the family default
        assert_eq!(resolve("/papers/", Role::Admin), ViewTarget::Papers(PapersView::List));
    }

    #[test]
    fn test_dashboard_uses_current_role_not_path_suffix() {
        assert_eq!(resolve("/dashboard", Role::TeamLead), ViewTarget::Dashboard(Role::TeamLead));
        assert_eq!(
            resolve("/dashboard/admin", Role::Researcher),
            ViewTarget::Dashboard(Role::Researcher)
        );
        assert_eq!(
            resolve("/dashboard/papers", Role::ProResearcher),
            ViewTarget::Dashboard(Role::ProResearcher)
        );
    }

    #[test]
    fn test_admin_exact_and_detail_views() {
        assert_eq!(resolve("/admin", Role::Admin), ViewTarget::Admin(AdminView::Overview));
        assert_eq!(
            resolve("/admin/users", Role::Admin),
            ViewTarget::Admin(AdminView::UserManagement)
        );
        assert_eq!(
            resolve("/admin/users/u-17", Role::Admin),
            ViewTarget::Admin(AdminView::UserDetail("u-17".to_string()))
        );
        assert_eq!(resolve("/admin/unknown", Role::Admin), ViewTarget::Admin(AdminView::Overview));
        assert_eq!(resolve("/administration", Role::Admin), ViewTarget::Admin(AdminView::Overview));
    }

    #[test]
    fn test_classification_order_decides_overlaps() {
        assert_eq!(
            matching_classes("/papers/search"),
            vec![RouteClass::Papers, RouteClass::Search]
        );
        assert_eq!(classify("/papers/search"), RouteClass::Papers);
        assert_eq!(resolve("/library/search", Role::Researcher), ViewTarget::Search);
        assert_eq!(
            matching_classes("/dashboard/search"),
            vec![RouteClass::Dashboard, RouteClass::Search]
        );
        assert_eq!(
            resolve("/dashboard/search", Role::Admin),
            ViewTarget::Dashboard(Role::Admin)
        );
    }

    #[test]
    fn test_classify_is_first_of_matching_classes() {
        let paths = [
            "/",
            "/login",
            "/dashboard/team-lead",
            "/admin/logs",
            "/papers/search",
            "/team/search",
            "/docs/getting-started",
            "/blog/search",
            "/nowhere",
            "",
        ];
        for path in paths {
            let expected = matching_classes(path)
                .first()
                .copied()
                .unwrap_or(RouteClass::Unclassified);
            assert_eq!(classify(path), expected, "path {path:?}");
        }
    }

    #[test]
    fn test_unclassified_paths_render_landing() {
        assert_eq!(classify("/nowhere"), RouteClass::Unclassified);
        assert_eq!(resolve("/nowhere", Role::Admin), ViewTarget::Landing);
        assert_eq!(resolve("", Role::Researcher), ViewTarget::Landing);
        assert_eq!(resolve("/", Role::TeamLead), ViewTarget::Landing);
    }

    #[test]
    fn test_resolve_is_total() {
        let paths = [
            "", "/", "//", "/papers//", "/admin/users/", "/blog/", "/help/", "/docs",
            "/profile/ada", "/integrations/zotero", "/onboarding/2", "/404", "/500",
            "/maintenance", "/security", "/careers/backend", "/workspace/projects/p1",
            "/team/members/9", "/settings/api-keys", "/billing/upgrade", "?", "\u{0}",
        ];
        for path in paths {
            for role in Role::ALL {
                let _ = resolve(path, role);
            }
        }
    }

    #[test]
    fn test_secondary_family_views() {
        let role = Role::Researcher;
        assert_eq!(
            resolve("/blog/launch", role),
            ViewTarget::Marketing(MarketingView::BlogPost("launch".to_string()))
        );
        assert_eq!(resolve("/blog", role), ViewTarget::Marketing(MarketingView::Blog));
        assert_eq!(resolve("/careers/backend", role), ViewTarget::Marketing(MarketingView::Careers));
        assert_eq!(
            resolve("/docs/citations", role),
            ViewTarget::Help(HelpView::Article("citations".to_string()))
        );
        assert_eq!(resolve("/help", role), ViewTarget::Help(HelpView::Center));
        assert_eq!(
            resolve("/profile/ada", role),
            ViewTarget::Profile(ProfileView::Public("ada".to_string()))
        );
        assert_eq!(resolve("/profile", role), ViewTarget::Profile(ProfileView::Own));
        assert_eq!(
            resolve("/workspace/projects/p1", role),
            ViewTarget::Workspace(WorkspaceView::ProjectDetail("p1".to_string()))
        );
        assert_eq!(resolve("/500", role), ViewTarget::Status(StatusView::ServerError));
        assert_eq!(resolve("/terms", role), ViewTarget::Legal(LegalView::Terms));
        assert_eq!(resolve("/signup", role), ViewTarget::Auth(AuthView::Signup));
        assert_eq!(resolve("/pricing", role), ViewTarget::Pricing);
        assert_eq!(resolve("/faq", role), ViewTarget::Faq);
    }
}
