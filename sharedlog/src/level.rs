// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use core::fmt::{self, Display};
use core::str::FromStr;

/// The severity of a log record. Levels have a total order, with `Debug` the
/// least severe and `Critical` the most severe, which is used to filter
/// records against a logger's configured threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Returns the upper-case name used when rendering records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            // the log crate has no level above error
            Level::Error | Level::Critical => Self::Error,
            Level::Warning => Self::Warn,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn parsing() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("critical".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("crit".parse::<Level>().unwrap(), Level::Critical);

        assert!("WARNING".parse::<Level>().is_err());
        assert!("verbose".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Critical.to_string(), "CRITICAL");
    }
}
