// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::rotate::Rotation;
use crate::writer::Writer;
use crate::{default_format, Error, FormatFunction, Level, Logger, Shared};

use pathlock::LockFile;

use std::path::{Path, PathBuf};

/// A type to construct a `Logger` which appends to a shared file.
///
/// ```no_run
/// use sharedlog::{Level, LogBuilder};
///
/// let logger = LogBuilder::new("logs/app.log")
///     .level(Level::Debug)
///     .max_size(1024 * 1024)
///     .max_backups(3)
///     .build()
///     .expect("failed to build logger");
/// ```
pub struct LogBuilder {
    path: PathBuf,
    level: Level,
    max_size: u64,
    max_backups: usize,
    format: FormatFunction,
}

impl LogBuilder {
    /// Create a new builder for a logger writing to the provided path. The
    /// defaults are: `Info` level, no rotation, no retained backups.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            level: Level::Info,
            max_size: 0,
            max_backups: 0,
            format: default_format,
        }
    }

    /// Sets the minimum level which will be written. Records below this
    /// level are dropped without any I/O.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the minimum level from its lower-case name, eg `"warning"`.
    /// Unknown names are a construction error.
    pub fn level_str(self, level: &str) -> Result<Self, Error> {
        Ok(self.level(level.parse()?))
    }

    /// Sets the size, in bytes, past which the active file is rotated out.
    /// Zero (the default) disables rotation.
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    /// Sets the number of rotated-out backups to retain. With zero retained
    /// backups, rotation deletes the active file instead of renaming it.
    pub fn max_backups(mut self, count: usize) -> Self {
        self.max_backups = count;
        self
    }

    /// Replaces the default line format.
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// Consumes the builder and returns a `Logger`. The parent directory is
    /// created if missing, the lock file is opened at `<path>.lock`, and the
    /// active file is created, so an unusable target fails here rather than
    /// on the first logging call.
    pub fn build(self) -> Result<Logger, Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let lock_path = lock_path(&self.path);
        let lock = LockFile::open(&lock_path).map_err(|source| Error::Lock {
            path: lock_path,
            source,
        })?;

        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::Create {
                path: self.path.clone(),
                source,
            })?;

        let rotation = Rotation::new(self.max_size, self.max_backups);
        let writer = Writer::new(self.path, lock, rotation, self.format);

        Ok(Logger::from_shared(Shared {
            level: self.level,
            writer,
        }))
    }
}

/// Returns the path of the lock file guarding the log, eg `app.log` ->
/// `app.log.lock`. Every process appending to the same log derives the same
/// lock path.
pub(crate) fn lock_path(path: &Path) -> PathBuf {
    let mut lock = path.as_os_str().to_os_string();
    lock.push(".lock");
    lock.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_path_naming() {
        assert_eq!(
            lock_path(Path::new("logs/app.log")),
            PathBuf::from("logs/app.log.lock")
        );
    }

    #[test]
    fn invalid_level_name() {
        let result = LogBuilder::new("app.log").level_str("loud");
        assert!(matches!(result, Err(Error::InvalidLevel(_))));
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("app.log");

        let _logger = LogBuilder::new(&path).build().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        // the parent "directory" is a regular file
        let bogus = dir.path().join("occupied");
        std::fs::write(&bogus, "not a directory").unwrap();

        let result = LogBuilder::new(bogus.join("app.log")).build();
        assert!(result.is_err());
    }
}
