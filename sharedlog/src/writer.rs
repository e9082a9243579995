// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::rotate::Rotation;
use crate::{Error, FormatFunction, LogBuffer, Record};

#[cfg(feature = "metrics")]
use crate::metrics::*;

use pathlock::LockFile;

use std::io::Write;
use std::path::{Path, PathBuf};

const INITIAL_BUFFER_SIZE: usize = 128;

/// Appends formatted records to the active file. The cross-process lock
/// covers the rotation check, the rotation itself, and the append as one
/// critical section, so the file only ever contains whole records.
pub(crate) struct Writer {
    path: PathBuf,
    lock: LockFile,
    rotation: Rotation,
    format: FormatFunction,
}

impl Writer {
    pub fn new(path: PathBuf, lock: LockFile, rotation: Rotation, format: FormatFunction) -> Self {
        Self {
            path,
            lock,
            rotation,
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Formats the record and appends it to the active file, rotating first
    /// if the file would grow past its limit. The record is formatted before
    /// the lock is taken to keep the critical section short.
    pub fn write(&self, record: &Record) -> Result<(), Error> {
        let mut buffer = LogBuffer::with_capacity(INITIAL_BUFFER_SIZE);
        (self.format)(&mut buffer, record)?;

        self.append(&buffer)
    }

    fn append(&self, buffer: &[u8]) -> Result<(), Error> {
        let guard = self.lock.lock().map_err(|source| Error::Lock {
            path: self.lock.path().to_path_buf(),
            source,
        })?;

        let len = std::fs::metadata(&self.path).map_or(0, |m| m.len());

        if self.rotation.due(len, buffer.len() as u64) {
            // a failed rotation degrades to a non-rotating append; the
            // record is still written to whatever exists at the active path
            if self.rotation.rotate(&self.path).is_ok() {
                metrics! {
                    LOG_ROTATE.increment();
                }
            } else {
                metrics! {
                    LOG_ROTATE_EX.increment();
                }
            }
        }

        // a fresh handle every append: rotation retires the file behind any
        // long-lived handle, and this also recreates the file after rotation
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // one write call for the whole line; the lock, not the filesystem,
        // provides the interleaving guarantee
        match file.write_all(buffer) {
            Ok(()) => {
                metrics! {
                    LOG_WRITE.increment();
                    LOG_WRITE_BYTE.add(buffer.len() as u64);
                }

                drop(guard);
                Ok(())
            }
            Err(e) => {
                metrics! {
                    LOG_WRITE_EX.increment();
                }

                drop(guard);
                Err(Error::Write(e))
            }
        }
    }
}
