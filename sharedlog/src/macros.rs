// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_export]
/// Logs a fatal error and terminates the program.
macro_rules! fatal {
    ($logger:expr, $fmt:expr) => {{
        let _ = $logger.critical($fmt);
        ::std::process::exit(1);
    }};
    ($logger:expr, $fmt:expr, $($arg:tt)*) => {{
        let _ = $logger.critical(&::std::format!($fmt, $($arg)*));
        ::std::process::exit(1);
    }};
}

#[cfg(feature = "metrics")]
macro_rules! metrics {
    { $( $tt:tt )* } => { $( $tt )* }
}

#[cfg(not(feature = "metrics"))]
macro_rules! metrics {
    { $( $tt:tt)* } => {}
}
