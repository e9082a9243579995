use sharedlog::{Level, LogBuilder};

#[test]
fn suppressed_levels_write_nothing() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("app.log");

    let logger = LogBuilder::new(&path)
        .level(Level::Warning)
        .build()
        .expect("failed to build logger");

    logger.debug("x").expect("log call failed");
    logger.info("y").expect("log call failed");

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);

    logger.error("z").expect("log call failed");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("ERROR"));
    assert!(lines[0].ends_with("- z"));
}

#[test]
fn threshold_is_inclusive() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("app.log");

    let logger = LogBuilder::new(&path)
        .level(Level::Warning)
        .build()
        .expect("failed to build logger");

    logger.warning("at threshold").expect("log call failed");
    logger.critical("above threshold").expect("log call failed");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("[WARNING]"));
    assert!(contents.contains("[CRITICAL]"));
}

#[test]
fn suppressed_levels_skip_the_lock() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("app.log");

    let logger = LogBuilder::new(&path)
        .level(Level::Error)
        .build()
        .expect("failed to build logger");

    // hold the cross-process lock from a second handle; a suppressed call
    // must complete without blocking on it
    let lock = pathlock::LockFile::open(dir.path().join("app.log.lock"))
        .expect("failed to open lock");
    let _guard = lock.lock().expect("failed to acquire lock");

    logger.info("dropped before the lock").expect("log call failed");

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn level_from_string() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("app.log");

    let logger = LogBuilder::new(&path)
        .level_str("critical")
        .expect("failed to parse level")
        .build()
        .expect("failed to build logger");

    assert_eq!(logger.level(), Level::Critical);

    logger.error("not enough").expect("log call failed");
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn multiline_messages_pass_through() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("app.log");

    let logger = LogBuilder::new(&path).build().expect("failed to build logger");

    logger.info("first physical line\nsecond physical line")
        .expect("log call failed");

    let contents = std::fs::read_to_string(&path).unwrap();
    // the message is not escaped, so one record spans two physical lines
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.ends_with("second physical line\n"));
}
