use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::store::write_atomic;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub admin_name: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Bearer session with an explicit lifecycle: loaded from disk on startup,
/// cleared on logout. Injected into flows rather than read from a global.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    session: Option<Session>,
}

impl SessionStore {
    /// A missing or empty store file is a logged-out session, not an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AdminError> {
        let path = path.into();

        let session = match fs::read(&path) {
            Ok(bytes) => Some(serde_json::from_slice(&bytes).map_err(|err| {
                AdminError::Storage(format!("corrupt session file {}: {err}", path.display()))
            })?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                return Err(AdminError::Storage(format!(
                    "read {}: {err}",
                    path.display()
                )))
            }
        };

        Ok(Self { path, session })
    }

    pub fn set(&mut self, session: Session) -> Result<(), AdminError> {
        let bytes = serde_json::to_vec_pretty(&session)
            .map_err(|err| AdminError::Storage(format!("encode session: {err}")))?;
        write_atomic(&self.path, &bytes)?;
        self.session = Some(session);

        tracing::info!("session stored");
        Ok(())
    }

    pub fn token(&self) -> Result<&str, AdminError> {
        match &self.session {
            Some(session) if !session.token.trim().is_empty() => Ok(&session.token),
            _ => Err(AdminError::MissingToken),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_ok()
    }

    /// Logout: wipes memory and disk.
    pub fn clear(&mut self) -> Result<(), AdminError> {
        self.session = None;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AdminError::Storage(format!(
                "remove {}: {err}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Session, SessionStore};

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            admin_name: "ops".to_string(),
            logged_in_at: Utc::now(),
        }
    }

    #[test]
    fn missing_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(dir.path().join("session.json")).unwrap();

        assert!(!store.is_authenticated());
        assert!(store.token().is_err());
    }

    #[test]
    fn session_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.set(session("tok-123")).unwrap();

        let reloaded = SessionStore::load(&path).unwrap();
        assert_eq!(reloaded.token().unwrap(), "tok-123");
    }

    #[test]
    fn clear_removes_file_and_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.set(session("tok-123")).unwrap();
        store.clear().unwrap();

        assert!(store.token().is_err());
        assert!(!path.exists());

        // clearing an already-clear store is a no-op
        store.clear().unwrap();
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path().join("session.json")).unwrap();
        store.set(session("   ")).unwrap();

        assert!(store.token().is_err());
    }
}
