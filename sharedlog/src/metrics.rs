use metriken::{metric, Counter};

#[metric(
    name = "log_write",
    description = "number of records appended to the log file"
)]
pub static LOG_WRITE: Counter = Counter::new();

#[metric(
    name = "log_write_byte",
    description = "number of bytes appended to the log file"
)]
pub static LOG_WRITE_BYTE: Counter = Counter::new();

#[metric(
    name = "log_write_ex",
    description = "number of exceptions while appending to the log file"
)]
pub static LOG_WRITE_EX: Counter = Counter::new();

#[metric(
    name = "log_skip",
    description = "number of log messages dropped by the level filter"
)]
pub static LOG_SKIP: Counter = Counter::new();

#[metric(name = "log_rotate", description = "number of times the log file rotated")]
pub static LOG_ROTATE: Counter = Counter::new();

#[metric(
    name = "log_rotate_ex",
    description = "number of exceptions while rotating the log file"
)]
pub static LOG_ROTATE_EX: Counter = Counter::new();
