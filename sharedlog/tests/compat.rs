use sharedlog::{Level, LogBuilder};

// the log crate allows a single global backend, so the whole bridge is
// exercised from one test
#[test]
fn log_crate_bridge() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("app.log");

    let logger = LogBuilder::new(&path)
        .level(Level::Info)
        .build()
        .expect("failed to build logger");

    logger.start();

    log::debug!("suppressed by the threshold");
    log::info!("bridged message");
    log::error!("bridged error");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[INFO]"));
    assert!(lines[0].contains("bridged message"));
    assert!(lines[1].contains("[ERROR]"));
    assert!(lines[1].contains("bridged error"));
}
