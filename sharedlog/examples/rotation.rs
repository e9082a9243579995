// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Writes enough records to rotate the log a few times, then lists the
//! active file and its numbered backups.

use sharedlog::{Level, LogBuilder};

fn main() {
    let path = std::env::temp_dir().join("sharedlog-rotation.log");

    let logger = LogBuilder::new(&path)
        .level(Level::Debug)
        .max_size(1024)
        .max_backups(3)
        .build()
        .expect("failed to build logger");

    for seq in 0..100 {
        logger
            .info(&format!("some message with a sequence number: {seq}"))
            .expect("failed to write log record");
    }

    for candidate in [
        path.clone(),
        path.with_extension("log.1"),
        path.with_extension("log.2"),
        path.with_extension("log.3"),
    ] {
        if let Ok(metadata) = std::fs::metadata(&candidate) {
            println!("{}: {} bytes", candidate.display(), metadata.len());
        }
    }
}
