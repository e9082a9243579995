//! This crate provides a named lock for mutual exclusion between processes.
//! The lock is identified by a filesystem path: every process that opens a
//! `LockFile` on the same path participates in one exclusion domain, spanning
//! both processes and the threads within them.
//!
//! The lock is advisory. It is effective against every participant which
//! acquires through this crate (or honors the same file locking protocol),
//! but it cannot stop an unrelated process from touching the guarded
//! resource directly.
//!
//! The lock is tied to the open file handle, so the kernel releases it when
//! the holding process exits for any reason. A crashed holder never leaves
//! the lock stuck for other processes.
//!
//! The lock is not reentrant. A thread which already holds a [`LockGuard`]
//! and attempts a second [`LockFile::lock`] on the same `LockFile` will
//! deadlock. Use [`LockFile::try_lock`] where a second acquisition may occur.
//!
//! ```no_run
//! use pathlock::LockFile;
//!
//! let lock = LockFile::open("/tmp/example.lock").expect("failed to open lock file");
//!
//! {
//!     let _guard = lock.lock().expect("failed to acquire lock");
//!     // mutate the shared resource here
//! }
//! // the lock is released when the guard drops
//! ```

use parking_lot::{Mutex, MutexGuard};
use std::fs::{File, OpenOptions};
use std::io::Result;
use std::path::{Path, PathBuf};

mod sys;

/// A handle on a named lock. The underlying lock file is created if it does
/// not exist and is left in place on release, since another process may be
/// waiting on it.
pub struct LockFile {
    file: File,
    path: PathBuf,
    // file locks are per open file description, so sibling threads sharing
    // this handle must serialize through a process-local mutex as well
    local: Mutex<()>,
}

impl LockFile {
    /// Opens the lock at the provided path, creating the lock file if needed.
    /// Opening does not acquire the lock.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path.as_ref())?;

        Ok(Self {
            file,
            path: path.as_ref().to_path_buf(),
            local: Mutex::new(()),
        })
    }

    /// Blocks until the lock is acquired, then returns a guard which holds
    /// the lock until it is dropped. Waiters are not queued fairly; a busy
    /// writer may starve others under sustained contention.
    pub fn lock(&self) -> Result<LockGuard<'_>> {
        let local = self.local.lock();
        sys::lock_exclusive(&self.file)?;

        Ok(LockGuard { lock: self, _local: local })
    }

    /// Attempts to acquire the lock without blocking. Returns `Ok(None)` if
    /// the lock is currently held by any other thread or process.
    pub fn try_lock(&self) -> Result<Option<LockGuard<'_>>> {
        let local = match self.local.try_lock() {
            Some(local) => local,
            None => return Ok(None),
        };

        if sys::try_lock_exclusive(&self.file)? {
            Ok(Some(LockGuard { lock: self, _local: local }))
        } else {
            Ok(None)
        }
    }

    /// Returns the path which identifies this lock.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Holds the lock. Dropping the guard releases it.
pub struct LockGuard<'a> {
    lock: &'a LockFile,
    _local: MutexGuard<'a, ()>,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        // the kernel releases the lock when the handle closes, so an unlock
        // failure here cannot strand other waiters
        let _ = sys::unlock(&self.lock.file);
    }
}
