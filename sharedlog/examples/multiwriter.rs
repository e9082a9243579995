// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Several writers share one log file. Each thread builds its own `Logger`,
//! exactly as independent processes would, and the resulting file contains
//! every record intact.

use sharedlog::{Level, LogBuilder};

fn main() {
    let path = std::env::temp_dir().join("sharedlog-multiwriter.log");
    let _ = std::fs::remove_file(&path);

    let threads: Vec<_> = (0..4)
        .map(|writer| {
            let path = path.clone();
            std::thread::spawn(move || {
                let logger = LogBuilder::new(&path)
                    .level(Level::Debug)
                    .build()
                    .expect("failed to build logger");

                for seq in 0..100 {
                    logger
                        .info(&format!("writer={writer} seq={seq}"))
                        .expect("failed to write log record");
                }
            })
        })
        .collect();

    for thread in threads {
        thread.join().expect("writer thread panicked");
    }

    let contents = std::fs::read_to_string(&path).expect("failed to read log");
    println!("{} records in {}", contents.lines().count(), path.display());
}
