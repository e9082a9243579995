// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Record;

use clocksource::datetime::DateTime;

/// Renders a record as a line of text. The function must terminate the line
/// itself; embedded newlines in the message are passed through as-is rather
/// than escaped.
pub type FormatFunction =
    fn(write: &mut dyn std::io::Write, record: &Record) -> Result<(), std::io::Error>;

/// The default line format:
///
/// `2023-01-02T03:04:05.678+00:00 [INFO] pid=1000 tid=1001 - message`
pub fn default_format(
    w: &mut dyn std::io::Write,
    record: &Record,
) -> Result<(), std::io::Error> {
    writeln!(
        w,
        "{} [{}] pid={} tid={} - {}",
        DateTime::from(record.timestamp()),
        record.level(),
        record.pid(),
        record.tid(),
        record.message()
    )
}
