//! Session persistence.
//!
//! A [`SessionCache`] stores a [`SessionRecord`] between process runs so a
//! [`SessionBuilder`](crate::auth::SessionBuilder) can skip `user.login`.
//! [`SessionFileCache`] is the bundled file-backed implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use thiserror::Error;

use crate::auth::SessionRecord;

/// Default file name of [`SessionFileCache`].
pub const DEFAULT_SESSION_FILE: &str = ".zabbix_session";

/// Default time a cached session is considered usable.
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(4 * 60 * 60);

/// Errors returned by session caches.
#[derive(Debug, Error)]
pub enum CacheError {
    /// There is no usable cached session.
    #[error("No cached session is available")]
    Missing,

    /// The cache storage could not be read or written.
    #[error("Session cache I/O error at '{path}': {source}")]
    Io {
        /// The cache location.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The cached data is not a valid session record.
    #[error("Invalid session cache data: {0}")]
    Format(#[from] serde_json::Error),
}

/// Storage for a persisted session.
///
/// Implementations must be `Send + Sync` so a builder holding one can be
/// moved across tasks.
pub trait SessionCache: Send + Sync {
    /// Returns `true` if a usable session is stored.
    fn has_session(&self) -> bool;

    /// Loads the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if nothing usable is stored or the data is
    /// invalid.
    fn load(&self) -> Result<SessionRecord, CacheError>;

    /// Stores a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the session cannot be written.
    fn save(&self, record: &SessionRecord) -> Result<(), CacheError>;

    /// Removes the stored session. Removing an empty cache succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the storage cannot be cleared.
    fn flush(&self) -> Result<(), CacheError>;
}

/// A [`SessionCache`] backed by a JSON file.
///
/// The file is created with mode `0600` on Unix since it holds a live
/// token. A stored session is usable until its file is older than the
/// configured lifetime.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use zabbix_api::auth::{SessionCache, SessionFileCache};
///
/// let dir = std::env::temp_dir().join("zabbix-doc-cache");
/// let cache = SessionFileCache::new()
///     .with_path(dir.join(".zabbix_session"))
///     .with_lifetime(Duration::from_secs(600));
///
/// assert_eq!(cache.lifetime(), Duration::from_secs(600));
/// assert!(!cache.has_session());
/// ```
#[derive(Clone, Debug)]
pub struct SessionFileCache {
    path: PathBuf,
    lifetime: Duration,
}

impl Default for SessionFileCache {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SESSION_FILE),
            lifetime: DEFAULT_SESSION_LIFETIME,
        }
    }
}

impl SessionFileCache {
    /// Creates a cache at `.zabbix_session` in the working directory with a
    /// four hour lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cache file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets how long a stored session stays usable.
    #[must_use]
    pub const fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Returns the cache file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the session lifetime.
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn is_fresh(&self) -> bool {
        let Ok(modified) = fs::metadata(&self.path).and_then(|m| m.modified()) else {
            return false;
        };
        // an mtime in the future counts as age zero
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        age < self.lifetime
    }

    // `mode` only applies when the file is created
    #[cfg(unix)]
    fn open_for_write(&self) -> std::io::Result<fs::File> {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)?;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        Ok(file)
    }

    #[cfg(not(unix))]
    fn open_for_write(&self) -> std::io::Result<fs::File> {
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
    }
}

impl SessionCache for SessionFileCache {
    fn has_session(&self) -> bool {
        self.is_fresh()
    }

    fn load(&self) -> Result<SessionRecord, CacheError> {
        if !self.is_fresh() {
            return Err(CacheError::Missing);
        }
        let data = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, record: &SessionRecord) -> Result<(), CacheError> {
        let data = serde_json::to_vec(record)?;
        let mut file = self.open_for_write().map_err(|e| self.io_error(e))?;
        file.write_all(&data).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "Saved Zabbix session to cache");
        Ok(())
    }

    fn flush(&self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
