use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::DomainError;
use super::views::ViewTarget;

/// Access level governing which dashboard and admin views are appropriate.
///
/// Exactly one role is active at a time. It is never persisted and resets to
/// [`Role::Researcher`] whenever a new controller is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Researcher,
    ProResearcher,
    TeamLead,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Researcher,
        Role::ProResearcher,
        Role::TeamLead,
        Role::Admin,
    ];

    /// Path segment used by the role's dashboard, e.g. `team-lead`.
    pub fn slug(self) -> &'static str {
        match self {
            Role::Researcher => "researcher",
            Role::ProResearcher => "pro-researcher",
            Role::TeamLead => "team-lead",
            Role::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Researcher => "Researcher",
            Role::ProResearcher => "Pro Researcher",
            Role::TeamLead => "Team Lead",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "researcher" => Ok(Role::Researcher),
            "pro-researcher" => Ok(Role::ProResearcher),
            "team-lead" => Ok(Role::TeamLead),
            "admin" => Ok(Role::Admin),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

/// Current screen and role of a navigation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current_path: String,
    pub current_role: Role,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            current_role: Role::Researcher,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Success,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            _ => Err(DomainError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Identifier of a toast, unique for the lifetime of its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}

/// Point-in-time dump of a controller, written by the snapshot export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub path: String,
    pub role: Role,
    pub view: ViewTarget,
    pub toasts: Vec<Toast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_state_default() {
        let state = NavigationState::default();
        assert_eq!(state.current_path, "/");
        assert_eq!(state.current_role, Role::Researcher);
    }

    #[test]
    fn test_role_parse_accepts_both_spellings() {
        assert_eq!("team-lead".parse::<Role>(), Ok(Role::TeamLead));
        assert_eq!("team_lead".parse::<Role>(), Ok(Role::TeamLead));
        assert_eq!("Pro_Researcher".parse::<Role>(), Ok(Role::ProResearcher));
        assert_eq!(
            "guest".parse::<Role>(),
            Err(DomainError::UnknownRole("guest".to_string()))
        );
    }

    #[test]
    fn test_role_slug_parses_back() {
        for role in Role::ALL {
            assert_eq!(role.slug().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!(" info ".parse::<Severity>(), Ok(Severity::Info));
        assert!("warning".parse::<Severity>().is_err());
    }

    #[test]
    fn test_toast_serializes_flat_id() {
        let toast = Toast {
            id: ToastId(3),
            message: "Saved".to_string(),
            severity: Severity::Success,
        };
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["severity"], "success");
    }
}
