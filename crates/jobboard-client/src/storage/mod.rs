//! Durable home of the signed-in session.
//!
//! The session lives in a single named entry. [`FileSessionStorage`] keeps
//! it in a directory and survives restarts; [`MemorySessionStorage`] keeps
//! it for the life of the value.

mod atomic_io;

use std::io;
use std::sync::{Mutex, PoisonError};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::warn;

use crate::error::StorageError;

/// Name of the entry holding the serialised session user.
pub const SESSION_ENTRY: &str = "jobportal_user";

/// Key-less store for one serialised session.
pub trait SessionStorage: Send + Sync {
    /// Current entry contents, or `None` when absent or unreadable.
    fn read(&self) -> Option<String>;

    /// Replace the entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the entry cannot be stored.
    fn write(&self, contents: &str) -> Result<(), StorageError>;

    /// Delete the entry. Deleting an absent entry succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] when the entry exists but cannot be
    /// deleted.
    fn remove(&self) -> Result<(), StorageError>;
}

/// Session entry kept as a file inside a directory.
#[derive(Debug)]
pub struct FileSessionStorage {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileSessionStorage {
    /// Open `root`, creating it and its parents when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] when the directory cannot be created
    /// or opened.
    pub fn open(root: &Utf8Path) -> Result<Self, StorageError> {
        let open_error = |err: io::Error| StorageError::Open {
            path: root.to_path_buf(),
            message: err.to_string(),
        };
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(open_error)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(open_error)?;
        Ok(Self {
            dir,
            root: root.to_path_buf(),
        })
    }

    /// Directory holding the entry.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl SessionStorage for FileSessionStorage {
    fn read(&self) -> Option<String> {
        match self.dir.read_to_string(SESSION_ENTRY) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(root = %self.root, error = %err, "session entry unreadable");
                None
            }
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        atomic_io::write_atomic(&self.dir, Utf8Path::new(SESSION_ENTRY), contents)
    }

    fn remove(&self) -> Result<(), StorageError> {
        match self.dir.remove_file(SESSION_ENTRY) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Remove {
                path: Utf8PathBuf::from(SESSION_ENTRY),
                message: err.to_string(),
            }),
        }
    }
}

/// Session entry held in memory.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entry: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `contents`, as if written by an earlier run.
    pub fn with_entry(contents: impl Into<String>) -> Self {
        Self {
            entry: Mutex::new(Some(contents.into())),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self) -> Option<String> {
        self.entry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        *self.entry.lock().unwrap_or_else(PoisonError::into_inner) = Some(contents.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        *self.entry.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
