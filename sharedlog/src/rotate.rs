// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::{Path, PathBuf};

/// Size-based rotation with a bounded set of numbered backups. Backup `1` is
/// the most recently rotated-out file; indices stay contiguous up to the
/// retention bound. All transitions happen while the cross-process lock is
/// held, so no writer observes a partially-rotated state.
pub(crate) struct Rotation {
    max_size: u64,
    max_backups: usize,
}

impl Rotation {
    pub fn new(max_size: u64, max_backups: usize) -> Self {
        Self {
            max_size,
            max_backups,
        }
    }

    /// Returns true if appending `pending` bytes to a file of `len` bytes
    /// would push it past the size limit. Checking before the write bounds
    /// the worst-case overshoot to a single record. A limit of zero disables
    /// rotation.
    pub fn due(&self, len: u64, pending: u64) -> bool {
        self.max_size > 0 && len + pending > self.max_size
    }

    /// Retires the active file: the oldest backup is deleted if retention is
    /// exhausted, the remaining backups shift up by one index, and the active
    /// file becomes backup `1`. With zero retention the active file is simply
    /// deleted. The caller recreates the active file with its next append.
    pub fn rotate(&self, path: &Path) -> Result<(), std::io::Error> {
        if !path.exists() {
            return Ok(());
        }

        if self.max_backups == 0 {
            return std::fs::remove_file(path);
        }

        let oldest = backup_path(path, self.max_backups);
        if oldest.exists() {
            std::fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = backup_path(path, index);
            if from.exists() {
                std::fs::rename(&from, backup_path(path, index + 1))?;
            }
        }

        std::fs::rename(path, backup_path(path, 1))
    }
}

/// Returns the path of the numbered backup, eg `app.log` -> `app.log.3`.
pub(crate) fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut backup = path.as_os_str().to_os_string();
    backup.push(format!(".{index}"));
    backup.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, contents: &str) {
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn backup_naming() {
        assert_eq!(
            backup_path(Path::new("logs/app.log"), 3),
            PathBuf::from("logs/app.log.3")
        );
    }

    #[test]
    fn due_only_past_limit() {
        let rotation = Rotation::new(100, 1);

        assert!(!rotation.due(0, 100));
        assert!(!rotation.due(50, 50));
        assert!(rotation.due(50, 51));
        assert!(rotation.due(100, 1));
    }

    #[test]
    fn zero_limit_never_due() {
        let rotation = Rotation::new(0, 1);

        assert!(!rotation.due(u64::MAX / 2, 1024));
    }

    #[test]
    fn rotate_shifts_backups() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        let rotation = Rotation::new(100, 3);

        touch(&active, "first");
        rotation.rotate(&active).unwrap();
        touch(&active, "second");
        rotation.rotate(&active).unwrap();

        assert!(!active.exists());
        assert_eq!(
            std::fs::read_to_string(backup_path(&active, 1)).unwrap(),
            "second"
        );
        assert_eq!(
            std::fs::read_to_string(backup_path(&active, 2)).unwrap(),
            "first"
        );
        assert!(!backup_path(&active, 3).exists());
    }

    #[test]
    fn rotate_evicts_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        let rotation = Rotation::new(100, 2);

        for contents in ["a", "b", "c", "d"] {
            touch(&active, contents);
            rotation.rotate(&active).unwrap();
        }

        assert_eq!(
            std::fs::read_to_string(backup_path(&active, 1)).unwrap(),
            "d"
        );
        assert_eq!(
            std::fs::read_to_string(backup_path(&active, 2)).unwrap(),
            "c"
        );
        assert!(!backup_path(&active, 3).exists());
    }

    #[test]
    fn rotate_with_zero_retention_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        let rotation = Rotation::new(100, 0);

        touch(&active, "contents");
        rotation.rotate(&active).unwrap();

        assert!(!active.exists());
        assert!(!backup_path(&active, 1).exists());
    }

    #[test]
    fn rotate_without_active_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        let rotation = Rotation::new(100, 2);

        rotation.rotate(&active).unwrap();

        assert!(!active.exists());
        assert!(!backup_path(&active, 1).exists());
    }
}
