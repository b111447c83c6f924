use crate::domain::SessionSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes session snapshots as pretty JSON. Snapshots are never read back;
/// a new session always starts from the root path and the default role.
pub struct SnapshotRepository;

impl SnapshotRepository {
    pub fn export(snapshot: &SessionSnapshot, path: &Path) -> Result<String, SnapshotError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(path, json).map_err(|source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "session snapshot written");
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PapersView, Role, Severity, Toast, ToastId, ViewTarget};

    fn sample() -> SessionSnapshot {
        SessionSnapshot {
            path: "/papers/42".to_string(),
            role: Role::ProResearcher,
            view: ViewTarget::Papers(PapersView::Detail("42".to_string())),
            toasts: vec![Toast {
                id: ToastId(7),
                message: "Upload failed".to_string(),
                severity: Severity::Error,
            }],
        }
    }

    #[test]
    fn test_export_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let written = SnapshotRepository::export(&sample(), &path).unwrap();
        assert_eq!(written, path.display().to_string());

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["path"], "/papers/42");
        assert_eq!(value["role"], "pro_researcher");
        assert_eq!(value["view"]["family"], "papers");
        assert_eq!(value["view"]["view"]["Detail"], "42");
        assert_eq!(value["toasts"][0]["id"], 7);
        assert_eq!(value["toasts"][0]["severity"], "error");
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("session.json");
        let err = SnapshotRepository::export(&sample(), &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Write { .. }));
        assert!(err.to_string().contains("could not write"));
    }
}
