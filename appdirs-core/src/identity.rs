//! User identities and the host user database
//!
//! Directories are always computed for one user. [`Identity`] carries the three
//! facts the XDG defaults depend on, and [`UserDirectory`] is the narrow host
//! capability that produces identities for the invoking user or a named one.

use crate::error::{AppDirsError, Result};
use nix::unistd::{Uid, User};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The user a set of base directories is resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Home directory, may be empty
    pub home_dir: PathBuf,

    /// Numeric user id, kept verbatim as text
    pub uid: String,

    /// Login name, never empty
    pub username: String,
}

impl Identity {
    /// Create a validated identity.
    pub fn new(
        home_dir: impl Into<PathBuf>,
        uid: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self> {
        let identity = Self {
            home_dir: home_dir.into(),
            uid: uid.into(),
            username: username.into(),
        };
        identity.validate()?;
        Ok(identity)
    }

    /// Check the identity can be used for directory resolution.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(AppDirsError::InvalidIdentity(
                "username is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Home directory, or `/home/{username}` when none is recorded.
    pub fn home_dir_or_default(&self) -> PathBuf {
        if self.home_dir.as_os_str().is_empty() {
            Path::new("/home").join(&self.username)
        } else {
            self.home_dir.clone()
        }
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            home_dir: user.dir,
            uid: user.uid.to_string(),
            username: user.name,
        }
    }
}

/// Source of user identities.
pub trait UserDirectory {
    /// The user the current process runs as.
    fn current_user(&self) -> Result<Identity>;

    /// Look a user up by login name.
    fn lookup_user(&self, username: &str) -> Result<Identity>;
}

/// The host's user database (`getpwuid_r` / `getpwnam_r`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUsers;

impl UserDirectory for SystemUsers {
    fn current_user(&self) -> Result<Identity> {
        let uid = Uid::current();
        debug!("Looking up current user (uid {})", uid);

        User::from_uid(uid)?
            .map(Identity::from)
            .ok_or_else(|| AppDirsError::UserNotFound(format!("uid {}", uid)))
    }

    fn lookup_user(&self, username: &str) -> Result<Identity> {
        debug!("Looking up user {:?}", username);

        User::from_name(username)?
            .map(Identity::from)
            .ok_or_else(|| AppDirsError::UserNotFound(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_username() {
        let err = Identity::new("/home/x", "1000", "").unwrap_err();
        assert!(matches!(err, AppDirsError::InvalidIdentity(ref msg) if msg.contains("username is empty")));
    }

    #[test]
    fn test_new_accepts_empty_home() {
        let identity = Identity::new("", "1000", "ggicci").unwrap();
        assert!(identity.home_dir.as_os_str().is_empty());
        assert_eq!(identity.uid, "1000");
    }

    #[test]
    fn test_home_dir_or_default() {
        let mut identity = Identity::new("/home/ggicci", "1000", "ggicci").unwrap();
        assert_eq!(identity.home_dir_or_default(), PathBuf::from("/home/ggicci"));

        identity.home_dir = PathBuf::from("/srv/users/ggicci");
        assert_eq!(
            identity.home_dir_or_default(),
            PathBuf::from("/srv/users/ggicci")
        );

        identity.home_dir = PathBuf::new();
        assert_eq!(identity.home_dir_or_default(), PathBuf::from("/home/ggicci"));
    }

    #[test]
    fn test_system_lookup_unknown_user() {
        let err = SystemUsers.lookup_user("nonexistentuser").unwrap_err();
        assert!(matches!(err, AppDirsError::UserNotFound(ref name) if name == "nonexistentuser"));
    }

    #[test]
    fn test_system_lookup_root() {
        let root = SystemUsers.lookup_user("root").unwrap();
        assert_eq!(root.username, "root");
        assert_eq!(root.uid, "0");
        assert!(!root.home_dir.as_os_str().is_empty());
    }
}
