//! Page catalog: what each view target shows in the terminal.
//!
//! Pages are static. Their links are the only way a page asks the controller
//! to navigate, and their actions are the only way it posts a toast.

use crate::domain::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub path: String,
}

/// A key bound on one page that posts a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAction {
    pub key: char,
    pub label: &'static str,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub summary: String,
    pub links: Vec<Link>,
    pub actions: Vec<PageAction>,
}

impl Page {
    fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            links: Vec::new(),
            actions: Vec::new(),
        }
    }

    fn link(mut self, label: impl Into<String>, path: impl Into<String>) -> Self {
        self.links.push(Link {
            label: label.into(),
            path: path.into(),
        });
        self
    }

    fn action(
        mut self,
        key: char,
        label: &'static str,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        self.actions.push(PageAction {
            key,
            label,
            message: message.into(),
            severity,
        });
        self
    }

    fn public_nav(self) -> Self {
        self.link("Home", "/")
            .link("Features", "/features")
            .link("Pricing", "/pricing")
            .link("FAQ", "/faq")
            .link("Log in", "/login")
    }

    fn app_nav(self) -> Self {
        self.link("Dashboard", "/dashboard")
            .link("Papers", "/papers")
            .link("Collections", "/collections")
            .link("Search", "/search")
    }

    pub fn action_for(&self, key: char) -> Option<&PageAction> {
        self.actions.iter().find(|a| a.key == key)
    }
}

pub fn page_for(view: &ViewTarget, role: Role) -> Page {
    match view {
        ViewTarget::Landing => Page::new(
            "PaperDesk",
            "Organize, annotate and share research papers with your team.",
        )
        .link("Start free", "/signup")
        .link("See how teams use it", "/customers")
        .public_nav(),
        ViewTarget::Auth(auth) => auth_page(*auth),
        ViewTarget::Dashboard(role) => dashboard_page(*role),
        ViewTarget::Admin(admin) => admin_page(admin),
        ViewTarget::Papers(papers) => papers_page(papers),
        ViewTarget::Collections(collections) => collections_page(collections),
        ViewTarget::Workspace(workspace) => workspace_page(workspace),
        ViewTarget::Research(research) => research_page(*research, role),
        ViewTarget::Team(team) => team_page(team, role),
        ViewTarget::Analytics(analytics) => analytics_page(*analytics, role),
        ViewTarget::Notifications => {
            Page::new("Notifications", "Mentions, shares and import results.")
                .action('m', "Mark all read", "All notifications marked as read", Severity::Success)
                .link("Notification settings", "/settings/notifications")
                .app_nav()
        }
        ViewTarget::Settings(settings) => settings_page(*settings),
        ViewTarget::Profile(ProfileView::Own) => Page::new("Your profile", "Publications, reading stats and bio.")
            .link("Edit profile", "/settings/profile")
            .app_nav(),
        ViewTarget::Profile(ProfileView::Public(handle)) => {
            Page::new(format!("@{handle}"), "Public researcher profile.")
                .action('f', "Follow", format!("Following @{handle}"), Severity::Success)
                .app_nav()
        }
        ViewTarget::Billing(billing) => billing_page(*billing),
        ViewTarget::Integrations(IntegrationsView::Directory) => {
            Page::new("Integrations", "Connect reference managers and storage.")
                .link("Zotero", "/integrations/zotero")
                .link("Mendeley", "/integrations/mendeley")
                .link("Google Drive", "/integrations/google-drive")
                .app_nav()
        }
        ViewTarget::Integrations(IntegrationsView::Detail(name)) => {
            Page::new(format!("Integration: {name}"), "Sync settings for this integration.")
                .action('c', "Connect", format!("Connected to {name}"), Severity::Success)
                .link("All integrations", "/integrations")
                .app_nav()
        }
        ViewTarget::Onboarding(OnboardingView::Welcome) => {
            Page::new("Welcome to PaperDesk", "Three short steps to set up your library.")
                .link("Step 1: import papers", "/onboarding/import")
                .link("Skip to dashboard", "/dashboard")
        }
        ViewTarget::Onboarding(OnboardingView::Step(step)) => {
            Page::new(format!("Onboarding: {step}"), "Finish this step to continue.")
                .link("Import papers", "/papers/import")
                .link("Create a collection", "/collections/new")
                .link("Done", "/dashboard")
        }
        ViewTarget::Help(HelpView::Center) => Page::new("Help center", "Guides and answers.")
            .link("Getting started", "/help/getting-started")
            .link("Citations", "/docs/citations")
            .link("FAQ", "/faq")
            .app_nav(),
        ViewTarget::Help(HelpView::Article(slug)) => {
            Page::new(format!("Help: {slug}"), "Was this article helpful?")
                .action('y', "Helpful", "Thanks for the feedback", Severity::Info)
                .link("Back to help", "/help")
                .app_nav()
        }
        ViewTarget::Search => Page::new("Search", "Search across papers, notes and collections.")
            .link("Search papers only", "/papers/search")
            .app_nav(),
        ViewTarget::Pricing => Page::new("Pricing", "Researcher, Pro, Team and Enterprise plans.")
            .link("Start free", "/signup")
            .link("Upgrade", "/billing/upgrade")
            .public_nav(),
        ViewTarget::Faq => Page::new("Frequently asked questions", "Plans, storage, privacy.")
            .link("Contact us", "/contact")
            .public_nav(),
        ViewTarget::Marketing(marketing) => marketing_page(marketing),
        ViewTarget::Legal(legal) => {
            let title = match legal {
                LegalView::Privacy => "Privacy policy",
                LegalView::Terms => "Terms of service",
                LegalView::Cookies => "Cookie policy",
                LegalView::Security => "Security",
            };
            Page::new(title, "Last updated January 2026.").public_nav()
        }
        ViewTarget::Status(status) => {
            let (title, summary) = match status {
                StatusView::NotFound => ("Page not found", "The page you asked for does not exist."),
                StatusView::ServerError => ("Something went wrong", "Please try again shortly."),
                StatusView::Maintenance => ("Down for maintenance", "We will be back soon."),
            };
            Page::new(title, summary).link("Home", "/").link("Dashboard", "/dashboard")
        }
    }
}

fn auth_page(view: AuthView) -> Page {
    match view {
        AuthView::Login => Page::new("Log in", "Welcome back.")
            .link("Continue as researcher", "/dashboard/researcher")
            .link("Continue as pro researcher", "/dashboard/pro-researcher")
            .link("Continue as team lead", "/dashboard/team-lead")
            .link("Continue as admin", "/dashboard/admin")
            .link("Forgot password", "/forgot-password")
            .link("Create an account", "/signup"),
        AuthView::Signup => Page::new("Create your account", "Free for individual researchers.")
            .link("Verify email", "/verify-email")
            .link("Already have an account", "/login"),
        AuthView::ForgotPassword => Page::new("Forgot password", "We will email you a reset link.")
            .action('s', "Send link", "Reset link sent", Severity::Success)
            .link("Back to log in", "/login"),
        AuthView::ResetPassword => Page::new("Reset password", "Choose a new password.")
            .link("Log in", "/login"),
        AuthView::VerifyEmail => Page::new("Verify your email", "Check your inbox for a code.")
            .action('r', "Resend", "Verification email resent", Severity::Info)
            .link("Start onboarding", "/onboarding"),
    }
}

fn dashboard_page(role: Role) -> Page {
    let page = Page::new(
        format!("{} dashboard", role.label()),
        "Recent papers, reading queue and activity.",
    )
    .link("Papers", "/papers")
    .link("Collections", "/collections")
    .link("Workspace", "/workspace")
    .link("Research hub", "/research");
    let page = match role {
        Role::Researcher => page.link("Upgrade to Pro", "/billing/upgrade"),
        Role::ProResearcher => page
            .link("AI assistant", "/research/assistant")
            .link("Reading analytics", "/analytics/reading"),
        Role::TeamLead => page
            .link("Team", "/team")
            .link("Team activity", "/team/activity")
            .link("Analytics", "/analytics"),
        Role::Admin => page
            .link("Admin console", "/admin")
            .link("Users", "/admin/users")
            .link("Audit logs", "/admin/logs"),
    };
    page.link("Settings", "/settings").link("Log out", "/login")
}

fn admin_page(view: &AdminView) -> Page {
    let page = match view {
        AdminView::Overview => Page::new("Admin console", "Platform health at a glance."),
        AdminView::UserManagement => Page::new("User management", "Search, suspend and promote accounts.")
            .link("User u-1001", "/admin/users/u-1001")
            .link("User u-1002", "/admin/users/u-1002"),
        AdminView::UserDetail(id) => Page::new(format!("User {id}"), "Account details and sessions.")
            .action('s', "Suspend", format!("User {id} suspended"), Severity::Success)
            .link("All users", "/admin/users"),
        AdminView::ContentModeration => Page::new("Content moderation", "Flagged uploads awaiting review.")
            .action('a', "Approve all", "Flagged papers approved", Severity::Success),
        AdminView::PlatformAnalytics => Page::new("Platform analytics", "Signups, uploads and retention."),
        AdminView::SystemSettings => Page::new("System settings", "Feature flags and limits.")
            .action('s', "Save", "System settings saved", Severity::Success),
        AdminView::Billing => Page::new("Billing administration", "Plans, refunds and invoices."),
        AdminView::AuditLogs => Page::new("Audit logs", "Every privileged action, newest first."),
    };
    page.link("Overview", "/admin")
        .link("Users", "/admin/users")
        .link("Moderation", "/admin/papers")
        .link("Analytics", "/admin/analytics")
        .link("Settings", "/admin/settings")
        .link("Billing", "/admin/billing")
        .link("Logs", "/admin/logs")
        .link("Back to app", "/dashboard")
}

fn papers_page(view: &PapersView) -> Page {
    let page = match view {
        PapersView::List => Page::new("Papers", "Your library, most recently added first.")
            .link("Attention Is All You Need", "/papers/1706.03762")
            .link("Deep Residual Learning", "/papers/1512.03385")
            .link("Upload", "/papers/upload")
            .link("Import", "/papers/import")
            .link("Search papers", "/papers/search"),
        PapersView::Upload => Page::new("Upload papers", "PDF, EPUB or BibTeX, up to 50 MB.")
            .action('u', "Upload sample.pdf", "Upload failed", Severity::Error)
            .action('r', "Retry upload", "sample.pdf uploaded", Severity::Success),
        PapersView::Search => Page::new("Search papers", "Full text, authors and DOIs."),
        PapersView::Import => Page::new("Import papers", "From Zotero, Mendeley or a BibTeX file.")
            .action('i', "Import library.bib", "Imported 24 papers", Severity::Success)
            .link("Manage integrations", "/integrations"),
        PapersView::Detail(id) => Page::new(format!("Paper {id}"), "Abstract, annotations and citations.")
            .action('s', "Save to collection", format!("Paper {id} saved"), Severity::Success)
            .action('c', "Copy citation", "Citation copied", Severity::Info)
            .link("Citation graph", "/research/graph")
            .link("All papers", "/papers"),
    };
    page.app_nav()
}

fn collections_page(view: &CollectionsView) -> Page {
    let page = match view {
        CollectionsView::List => Page::new("Collections", "Curated sets of papers.")
            .link("Transformers reading list", "/collections/transformers")
            .link("New collection", "/collections/new")
            .link("Shared with me", "/collections/shared"),
        CollectionsView::New => Page::new("New collection", "Name it and add papers.")
            .action('c', "Create", "Collection created", Severity::Success),
        CollectionsView::Shared => Page::new("Shared with me", "Collections other people shared."),
        CollectionsView::Detail(id) => Page::new(format!("Collection {id}"), "Papers in this collection.")
            .action('s', "Share", "Share link copied", Severity::Info)
            .link("All collections", "/collections"),
    };
    page.app_nav()
}

fn workspace_page(view: &WorkspaceView) -> Page {
    let page = match view {
        WorkspaceView::Overview => Page::new("Workspace", "Projects, notes and drafts.")
            .link("Projects", "/workspace/projects")
            .link("Notes", "/workspace/notes")
            .link("Drafts", "/workspace/drafts"),
        WorkspaceView::Projects => Page::new("Projects", "Group papers and notes by project.")
            .link("Thesis", "/workspace/projects/thesis"),
        WorkspaceView::ProjectDetail(id) => Page::new(format!("Project {id}"), "Project board.")
            .link("All projects", "/workspace/projects"),
        WorkspaceView::Notes => Page::new("Notes", "Highlights and notes across papers.")
            .action('n', "New note", "Note created", Severity::Success),
        WorkspaceView::Drafts => Page::new("Drafts", "Manuscripts in progress.")
            .action('e', "Export draft", "Export failed: no draft selected", Severity::Error),
    };
    page.app_nav()
}

fn research_page(view: ResearchView, role: Role) -> Page {
    let page = match view {
        ResearchView::Hub => Page::new("Research hub", "Tools for finding and understanding papers.")
            .link("Assistant", "/research/assistant")
            .link("Citations", "/research/citations")
            .link("Summaries", "/research/summaries")
            .link("Trends", "/research/trends")
            .link("Citation graph", "/research/graph"),
        ResearchView::Assistant if role == Role::Researcher => {
            Page::new("Research assistant", "The assistant is part of the Pro plan.")
                .link("Upgrade", "/billing/upgrade")
        }
        ResearchView::Assistant => Page::new("Research assistant", "Ask questions across your library.")
            .action('a', "Ask", "Assistant is thinking...", Severity::Info),
        ResearchView::Citations => Page::new("Citations", "Format and export references.")
            .action('x', "Export BibTeX", "Exported 12 references", Severity::Success),
        ResearchView::Summaries => Page::new("Summaries", "Generated summaries of your papers."),
        ResearchView::Trends => Page::new("Trends", "Topics gaining attention in your field."),
        ResearchView::Graph => Page::new("Citation graph", "Who cites whom in your library."),
    };
    page.link("Hub", "/research").app_nav()
}

fn team_page(view: &TeamView, role: Role) -> Page {
    if matches!(role, Role::Researcher | Role::ProResearcher) {
        return Page::new("Team", "Team features are available to team leads and admins.")
            .link("See team plans", "/pricing")
            .app_nav();
    }
    let page = match view {
        TeamView::Overview => Page::new("Team", "Members, shared collections and activity.")
            .link("Members", "/team/members")
            .link("Invite", "/team/invite")
            .link("Activity", "/team/activity"),
        TeamView::Members => Page::new("Members", "Everyone on your team.")
            .link("Ada Lovelace", "/team/members/ada")
            .link("Alan Turing", "/team/members/alan"),
        TeamView::MemberDetail(id) => Page::new(format!("Member {id}"), "Reading activity and shares.")
            .link("All members", "/team/members"),
        TeamView::Invite => Page::new("Invite teammates", "Send invitations by email.")
            .action('i', "Send invite", "Invitation sent", Severity::Success),
        TeamView::Activity => Page::new("Team activity", "What your team read this week."),
    };
    page.app_nav()
}

fn analytics_page(view: AnalyticsView, role: Role) -> Page {
    if role == Role::Researcher {
        return Page::new("Analytics", "Reading analytics are part of the Pro plan.")
            .link("Upgrade", "/billing/upgrade")
            .app_nav();
    }
    let page = match view {
        AnalyticsView::Overview => Page::new("Analytics", "How your library is used.")
            .link("Reading", "/analytics/reading")
            .link("Citations", "/analytics/citations"),
        AnalyticsView::Reading => Page::new("Reading analytics", "Time spent per paper and topic."),
        AnalyticsView::Citations => Page::new("Citation analytics", "Citations of your own work."),
    };
    page.app_nav()
}

fn settings_page(view: SettingsView) -> Page {
    let (title, summary) = match view {
        SettingsView::General => ("Settings", "Language, time zone and defaults."),
        SettingsView::Profile => ("Profile settings", "Name, affiliation and ORCID."),
        SettingsView::Security => ("Security", "Password and two-factor authentication."),
        SettingsView::Notifications => ("Notification settings", "Choose what we email you about."),
        SettingsView::ApiKeys => ("API keys", "Keys for scripts and integrations."),
        SettingsView::Appearance => ("Appearance", "Theme and density."),
    };
    let page = Page::new(title, summary);
    let page = match view {
        SettingsView::ApiKeys => page.action('n', "New key", "API key generated", Severity::Success),
        _ => page.action('s', "Save", "Settings saved", Severity::Success),
    };
    page.link("General", "/settings")
        .link("Profile", "/settings/profile")
        .link("Security", "/settings/security")
        .link("Notifications", "/settings/notifications")
        .link("API keys", "/settings/api-keys")
        .link("Appearance", "/settings/appearance")
        .app_nav()
}

fn billing_page(view: BillingView) -> Page {
    let page = match view {
        BillingView::Overview => Page::new("Billing", "Current plan and payment method.")
            .link("Invoices", "/billing/invoices")
            .link("Upgrade", "/billing/upgrade"),
        BillingView::Invoices => Page::new("Invoices", "Download past invoices.")
            .action('d', "Download latest", "Invoice downloaded", Severity::Success),
        BillingView::Upgrade => Page::new("Upgrade", "Unlock the assistant, analytics and teams.")
            .action('p', "Pay", "Payment declined", Severity::Error)
            .link("Compare plans", "/pricing"),
    };
    page.app_nav()
}

fn marketing_page(view: &MarketingView) -> Page {
    let page = match view {
        MarketingView::Features => Page::new("Features", "Library, annotations, assistant, teams."),
        MarketingView::About => Page::new("About us", "Built by researchers, for researchers."),
        MarketingView::Contact => Page::new("Contact", "Questions? We answer within a day.")
            .action('s', "Send message", "Message sent", Severity::Success),
        MarketingView::Blog => Page::new("Blog", "Product news and research workflows.")
            .link("Launch week recap", "/blog/launch-week"),
        MarketingView::BlogPost(slug) => Page::new(format!("Blog: {slug}"), "Posted by the PaperDesk team.")
            .link("All posts", "/blog"),
        MarketingView::Careers => Page::new("Careers", "We are hiring engineers and designers."),
        MarketingView::Customers => Page::new("Customers", "Labs and universities using PaperDesk."),
        MarketingView::Changelog => Page::new("Changelog", "Every release, newest first."),
    };
    page.public_nav()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatcher::resolve;

    #[test]
    fn test_every_dashboard_links_somewhere_role_specific() {
        let admin = page_for(&ViewTarget::Dashboard(Role::Admin), Role::Admin);
        assert!(admin.links.iter().any(|l| l.path == "/admin"));
        let lead = page_for(&ViewTarget::Dashboard(Role::TeamLead), Role::TeamLead);
        assert!(lead.links.iter().any(|l| l.path == "/team"));
        assert!(!lead.links.iter().any(|l| l.path == "/admin"));
    }

    #[test]
    fn test_upload_page_posts_error_toast() {
        let page = page_for(&ViewTarget::Papers(PapersView::Upload), Role::Researcher);
        let action = page.action_for('u').unwrap();
        assert_eq!(action.message, "Upload failed");
        assert_eq!(action.severity, Severity::Error);
        assert!(page.action_for('z').is_none());
    }

    #[test]
    fn test_team_pages_branch_on_role() {
        let view = ViewTarget::Team(TeamView::Members);
        let locked = page_for(&view, Role::Researcher);
        assert!(locked.links.iter().any(|l| l.path == "/pricing"));
        let open = page_for(&view, Role::TeamLead);
        assert!(open.links.iter().any(|l| l.path == "/team/members/ada"));
    }

    #[test]
    fn test_links_point_at_classified_routes() {
        let views = [
            ViewTarget::Landing,
            ViewTarget::Auth(AuthView::Login),
            ViewTarget::Dashboard(Role::Admin),
            ViewTarget::Admin(AdminView::UserManagement),
            ViewTarget::Papers(PapersView::List),
            ViewTarget::Settings(SettingsView::General),
            ViewTarget::Research(ResearchView::Hub),
        ];
        for view in views {
            for link in page_for(&view, Role::Admin).links {
                let target = resolve(&link.path, Role::Admin);
                if link.path != "/" {
                    assert_ne!(target, ViewTarget::Landing, "link {} is dead", link.path);
                }
            }
        }
    }
}
