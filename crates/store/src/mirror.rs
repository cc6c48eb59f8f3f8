//! Persisted mirror for the authentication flag.
//!
//! The in-memory `authenticated` flag is mirrored to a single durable
//! key-value pair so a prior login survives a process restart. The key is
//! fixed ([`AUTH_FLAG_KEY`]) and the stored value is the literal string
//! `"true"`; on logout the key is removed entirely.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Fixed name of the persisted auth flag.
pub const AUTH_FLAG_KEY: &str = "vetx-admin-auth";

/// Value stored while authenticated. Anything else reads as logged out.
pub const AUTH_FLAG_VALUE: &str = "true";

/// Errors writing or clearing the persisted flag.
///
/// Mirror failures never fail a login or logout; the store logs them and
/// keeps the in-memory flag authoritative for the current process.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("failed to write auth flag: {0}")]
    Write(#[source] io::Error),
    #[error("failed to clear auth flag: {0}")]
    Clear(#[source] io::Error),
}

/// Durable storage for the authentication flag.
///
/// Implementations hold exactly one value under the fixed key. `read`
/// returns whatever is currently stored (if anything); the store only
/// treats an exact `"true"` as authenticated.
pub trait AuthMirror: Send + Sync {
    /// Read the stored value, if the flag is present.
    fn read(&self) -> Option<String>;

    /// Persist the flag with value [`AUTH_FLAG_VALUE`].
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Write`] if the flag cannot be persisted.
    fn write(&self) -> Result<(), MirrorError>;

    /// Remove the flag.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Clear`] if the flag cannot be removed.
    fn clear(&self) -> Result<(), MirrorError>;
}

impl<T: AuthMirror + ?Sized> AuthMirror for std::sync::Arc<T> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self) -> Result<(), MirrorError> {
        (**self).write()
    }

    fn clear(&self) -> Result<(), MirrorError> {
        (**self).clear()
    }
}

/// File-backed mirror: a file named [`AUTH_FLAG_KEY`] in a state directory.
///
/// The file contains the flag value; a missing file means logged out.
#[derive(Debug)]
pub struct FileAuthMirror {
    path: PathBuf,
}

impl FileAuthMirror {
    /// Create a mirror storing the flag under `state_dir`.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(AUTH_FLAG_KEY),
        }
    }

    /// Path of the flag file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuthMirror for FileAuthMirror {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim_end().to_owned())
    }

    fn write(&self) -> Result<(), MirrorError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(MirrorError::Write)?;
        }
        std::fs::write(&self.path, AUTH_FLAG_VALUE).map_err(MirrorError::Write)
    }

    fn clear(&self) -> Result<(), MirrorError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            // Already absent counts as cleared
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MirrorError::Clear(e)),
        }
    }
}

/// In-memory mirror for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryAuthMirror {
    value: Mutex<Option<String>>,
}

impl MemoryAuthMirror {
    /// Create an empty (logged out) mirror.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mirror pre-populated with an arbitrary value, as if a prior
    /// process had written it.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_owned())),
        }
    }
}

impl AuthMirror for MemoryAuthMirror {
    fn read(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn write(&self) -> Result<(), MirrorError> {
        *self
            .value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(AUTH_FLAG_VALUE.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), MirrorError> {
        *self
            .value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_state_dir() -> PathBuf {
        std::env::temp_dir().join(format!("vetx-mirror-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_file_mirror_roundtrip() {
        let dir = temp_state_dir();
        let mirror = FileAuthMirror::new(&dir);

        assert!(mirror.read().is_none());

        mirror.write().unwrap();
        assert_eq!(mirror.read().as_deref(), Some(AUTH_FLAG_VALUE));

        mirror.clear().unwrap();
        assert!(mirror.read().is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_file_mirror_clear_when_absent_is_ok() {
        let dir = temp_state_dir();
        let mirror = FileAuthMirror::new(&dir);
        assert!(mirror.clear().is_ok());
    }

    #[test]
    fn test_file_mirror_uses_fixed_key() {
        let dir = temp_state_dir();
        let mirror = FileAuthMirror::new(&dir);
        assert_eq!(
            mirror.path().file_name().and_then(|n| n.to_str()),
            Some(AUTH_FLAG_KEY)
        );
    }

    #[test]
    fn test_memory_mirror_roundtrip() {
        let mirror = MemoryAuthMirror::new();
        assert!(mirror.read().is_none());

        mirror.write().unwrap();
        assert_eq!(mirror.read().as_deref(), Some("true"));

        mirror.clear().unwrap();
        assert!(mirror.read().is_none());
    }
}
