// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned for logger construction and logging calls.
///
/// Construction surfaces `InvalidLevel`, `CreateDirectory`, `Create`, and
/// `Lock`. Logging calls surface `Lock` and `Write`; a write failure does
/// not poison the logger, and later calls may succeed. Rotation failures
/// are recovered internally by appending to whatever file exists at the
/// active path, and are never surfaced here.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown log level: {0}")]
    InvalidLevel(String),
    #[error("failed to create log directory at {path}: {source}")]
    CreateDirectory { path: PathBuf, source: io::Error },
    #[error("failed to create log file at {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("failed to acquire log lock at {path}: {source}")]
    Lock { path: PathBuf, source: io::Error },
    #[error("failed to append to log file: {0}")]
    Write(#[from] io::Error),
}
