// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! This crate provides leveled, human-readable logging to a file which many
//! operating-system processes may append to concurrently. A named
//! cross-process lock serializes every append with the size check and
//! rotation that precede it, so records from independent processes never
//! interleave within a line and rotation never loses an in-flight record.
//!
//! The core of this crate is the `Logger` type, which is constructed with a
//! `LogBuilder`. Every process which logs to the same path builds its own
//! `Logger`; coordination happens entirely through the filesystem. Within a
//! process the `Logger` is cheap to clone and can be shared across threads.
//!
//! ```no_run
//! use sharedlog::{Level, LogBuilder};
//!
//! let logger = LogBuilder::new("app.log")
//!     .level(Level::Info)
//!     .max_size(10 * 1024 * 1024)
//!     .max_backups(5)
//!     .build()
//!     .expect("failed to build logger");
//!
//! logger.info("service starting").expect("failed to write log record");
//! ```
//!
//! When the active file would grow past the configured limit, it is renamed
//! to `<path>.1` (older backups shifting to `<path>.2`, `<path>.3`, ...) and
//! a fresh active file is started. The oldest backup is deleted once the
//! retention bound is reached.
//!
//! A `Logger` can also be registered as the backend for the `log` crate with
//! the `start` method, which lets libraries using the standard macros write
//! into the same shared file.

mod builder;
mod compat;
mod error;
mod format;
mod level;
#[macro_use]
mod macros;
mod record;
mod rotate;
mod sys;
mod writer;

pub use builder::*;
pub use error::*;
pub use format::*;
pub use level::*;
pub use record::*;

#[cfg(feature = "metrics")]
mod metrics;

#[cfg(feature = "metrics")]
use metrics::*;

use crate::writer::Writer;
use std::path::Path;
use std::sync::Arc;

pub(crate) type LogBuffer = Vec<u8>;

/// A handle on a shared log file. Clones share one lock handle and one
/// configuration; independent processes each construct their own `Logger`
/// for the same path.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Shared>,
}

pub(crate) struct Shared {
    pub(crate) level: Level,
    pub(crate) writer: Writer,
}

impl Logger {
    pub(crate) fn from_shared(shared: Shared) -> Self {
        Self {
            inner: Arc::new(shared),
        }
    }

    /// Logs a message at the provided level. Records below the configured
    /// threshold are dropped before any formatting or lock traffic occurs,
    /// so suppressed calls stay cheap even while another process holds the
    /// lock.
    ///
    /// Errors from the underlying append surface here; the logger remains
    /// usable for subsequent calls.
    pub fn log(&self, level: Level, message: &str) -> Result<(), Error> {
        if level < self.inner.level {
            metrics! {
                LOG_SKIP.increment();
            }

            return Ok(());
        }

        let record = Record::new(level, message);
        self.inner.writer.write(&record)
    }

    /// Logs a message at the `Debug` level.
    pub fn debug(&self, message: &str) -> Result<(), Error> {
        self.log(Level::Debug, message)
    }

    /// Logs a message at the `Info` level.
    pub fn info(&self, message: &str) -> Result<(), Error> {
        self.log(Level::Info, message)
    }

    /// Logs a message at the `Warning` level.
    pub fn warning(&self, message: &str) -> Result<(), Error> {
        self.log(Level::Warning, message)
    }

    /// Logs a message at the `Error` level.
    pub fn error(&self, message: &str) -> Result<(), Error> {
        self.log(Level::Error, message)
    }

    /// Logs a message at the `Critical` level.
    pub fn critical(&self, message: &str) -> Result<(), Error> {
        self.log(Level::Critical, message)
    }

    /// Returns the minimum level this logger will write.
    pub fn level(&self) -> Level {
        self.inner.level
    }

    /// Returns the path of the active log file.
    pub fn path(&self) -> &Path {
        self.inner.writer.path()
    }

    /// Register the logger as the backend for the `log` crate. Records
    /// arriving through the `log` macros pass through the same level filter,
    /// lock, and rotation as direct calls.
    pub fn start(self) {
        let max_level = log::LevelFilter::from(self.inner.level);
        log::set_boxed_logger(Box::new(self))
            .map(|()| log::set_max_level(max_level))
            .expect("failed to start logger");
    }
}
