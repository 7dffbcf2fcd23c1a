// ── Session persistence and auth guards ──
//
// The signed-in admin is recorded on disk so a new process can resume
// without re-prompting for credentials (the HTTP session itself lives
// in the client's cookie jar). Guards gate operations on the recorded
// session; the server re-checks on every request regardless.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::model::Admin;

const SESSION_FILE: &str = "session.json";

/// A signed-in admin session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub admin: Admin,
    /// Server this session was established against.
    pub server: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(admin: Admin, server: impl Into<String>) -> Self {
        Self {
            admin,
            server: server.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.admin.role.is_super_admin()
    }
}

// ── Guards ──────────────────────────────────────────────────────────

/// Require a session to be present.
pub fn require_authenticated(session: Option<&Session>) -> Result<&Session, CoreError> {
    session.ok_or(CoreError::AuthenticationRequired)
}

/// Require a session belonging to a super admin.
pub fn require_super_admin(session: Option<&Session>) -> Result<&Session, CoreError> {
    let session = require_authenticated(session)?;
    if session.is_super_admin() {
        Ok(session)
    } else {
        Err(CoreError::PermissionDenied {
            message: format!(
                "{} is a {}; this operation requires a super admin",
                session.admin.email, session.admin.role
            ),
        })
    }
}

// ── Persistence ─────────────────────────────────────────────────────

/// On-disk store for the session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at an explicit path (tests use a temp dir).
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform data directory, e.g.
    /// `~/.local/share/deskline/session.json` on Linux.
    pub fn open_default() -> Result<Self, CoreError> {
        let dirs = directories::ProjectDirs::from("", "", "deskline").ok_or_else(|| {
            CoreError::SessionStore {
                message: "cannot determine platform data directory".into(),
            }
        })?;
        Ok(Self::new(dirs.data_dir().join(SESSION_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted session, if any. An unreadable or corrupt
    /// file is an error; a missing file is simply no session.
    pub fn load(&self) -> Result<Option<Session>, CoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::SessionStore {
                    message: format!("cannot read {}: {e}", self.path.display()),
                });
            }
        };
        let session = serde_json::from_str(&raw).map_err(|e| CoreError::SessionStore {
            message: format!("corrupt session file {}: {e}", self.path.display()),
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::SessionStore {
                message: format!("cannot create {}: {e}", parent.display()),
            })?;
        }
        let raw = serde_json::to_string_pretty(session).map_err(|e| CoreError::SessionStore {
            message: format!("cannot serialize session: {e}"),
        })?;
        fs::write(&self.path, raw).map_err(|e| CoreError::SessionStore {
            message: format!("cannot write {}: {e}", self.path.display()),
        })?;
        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the persisted session. Missing file is fine.
    pub fn clear(&self) -> Result<(), CoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::SessionStore {
                message: format!("cannot remove {}: {e}", self.path.display()),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Admin, AdminRole, EntityId};

    fn admin(role: AdminRole) -> Admin {
        Admin {
            id: EntityId::from("a-1"),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            role,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        assert!(store.load().unwrap().is_none());

        let session = Session::new(admin(AdminRole::Agent), "https://desk.example.com");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), session);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path);
        assert!(matches!(
            store.load(),
            Err(CoreError::SessionStore { .. })
        ));
    }

    #[test]
    fn guards_reject_missing_session() {
        assert!(matches!(
            require_authenticated(None),
            Err(CoreError::AuthenticationRequired)
        ));
        assert!(matches!(
            require_super_admin(None),
            Err(CoreError::AuthenticationRequired)
        ));
    }

    #[test]
    fn super_admin_guard_rejects_agents() {
        let session = Session::new(admin(AdminRole::Agent), "https://desk.example.com");
        assert!(matches!(
            require_super_admin(Some(&session)),
            Err(CoreError::PermissionDenied { .. })
        ));

        let session = Session::new(admin(AdminRole::SuperAdmin), "https://desk.example.com");
        assert!(require_super_admin(Some(&session)).is_ok());
    }
}
