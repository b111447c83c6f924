//! View targets selected by the dispatcher.
//!
//! A view target names a screen; the presentation layer decides how to draw
//! it. Families with several screens carry a nested enum, and detail screens
//! carry the trailing path parameter.

use serde::Serialize;

use super::models::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", content = "view", rename_all = "snake_case")]
pub enum ViewTarget {
    Landing,
    Auth(AuthView),
    Dashboard(Role),
    Admin(AdminView),
    Papers(PapersView),
    Collections(CollectionsView),
    Workspace(WorkspaceView),
    Research(ResearchView),
    Team(TeamView),
    Analytics(AnalyticsView),
    Notifications,
    Settings(SettingsView),
    Profile(ProfileView),
    Billing(BillingView),
    Integrations(IntegrationsView),
    Onboarding(OnboardingView),
    Help(HelpView),
    Search,
    Pricing,
    Faq,
    Marketing(MarketingView),
    Legal(LegalView),
    Status(StatusView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthView {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    VerifyEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AdminView {
    Overview,
    UserManagement,
    UserDetail(String),
    ContentModeration,
    PlatformAnalytics,
    SystemSettings,
    Billing,
    AuditLogs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PapersView {
    List,
    Upload,
    Search,
    Import,
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CollectionsView {
    List,
    New,
    Shared,
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WorkspaceView {
    Overview,
    Projects,
    ProjectDetail(String),
    Notes,
    Drafts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResearchView {
    Hub,
    Assistant,
    Citations,
    Summaries,
    Trends,
    Graph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TeamView {
    Overview,
    Members,
    MemberDetail(String),
    Invite,
    Activity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalyticsView {
    Overview,
    Reading,
    Citations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SettingsView {
    General,
    Profile,
    Security,
    Notifications,
    ApiKeys,
    Appearance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProfileView {
    Own,
    Public(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BillingView {
    Overview,
    Invoices,
    Upgrade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IntegrationsView {
    Directory,
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OnboardingView {
    Welcome,
    Step(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HelpView {
    Center,
    Article(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MarketingView {
    Features,
    About,
    Contact,
    Blog,
    BlogPost(String),
    Careers,
    Customers,
    Changelog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegalView {
    Privacy,
    Terms,
    Cookies,
    Security,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusView {
    NotFound,
    ServerError,
    Maintenance,
}
