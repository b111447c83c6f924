use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown severity: {0} (expected error, success or info)")]
    UnknownSeverity(String),
    #[error("Toast message is empty")]
    EmptyToastMessage,
}

pub type DomainResult<T> = Result<T, DomainError>;
