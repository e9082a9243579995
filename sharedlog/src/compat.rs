// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Level, Logger};

/// Lets a `Logger` serve as the backend for the `log` crate. The `log`
/// facade has no error channel, so append failures on this path are dropped
/// after being counted; callers which need to observe write errors should
/// use the `Logger` methods directly.
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Level::from(metadata.level()) >= self.level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let _ = self.dispatch(Level::from(record.level()), &message);
    }

    fn flush(&self) {
        // every append reaches the file before the call returns
    }
}

impl Logger {
    pub(crate) fn dispatch(&self, level: Level, message: &str) -> Result<(), crate::Error> {
        self.log(level, message)
    }
}
