// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::sys;
use crate::Level;

use clocksource::precise::UnixInstant;

/// A single log record, assembled at the call site and living only for the
/// duration of one logging call.
pub struct Record<'a> {
    timestamp: UnixInstant,
    level: Level,
    pid: u32,
    tid: u64,
    message: &'a str,
}

impl<'a> Record<'a> {
    pub(crate) fn new(level: Level, message: &'a str) -> Self {
        Self {
            timestamp: UnixInstant::now(),
            level,
            pid: std::process::id(),
            tid: sys::thread_id(),
            message,
        }
    }

    /// The wall-clock time at which the record was created.
    pub fn timestamp(&self) -> UnixInstant {
        self.timestamp
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The id of the process which created the record.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// The id of the thread which created the record.
    pub fn tid(&self) -> u64 {
        self.tid
    }

    /// The message text.
    pub fn message(&self) -> &str {
        self.message
    }
}
