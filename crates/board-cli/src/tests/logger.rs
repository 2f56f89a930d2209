use crate::logger::initialize;

use board_config::LogLevel;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

// The global logger can be installed once per test binary, so this is the
// only test that calls `initialize`.
#[test]
fn given_log_file_in_missing_dir_when_initialized_then_lines_written_in_console_format() {
    // Given
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("log").join("board.log");

    // When
    initialize(LogLevel(LevelFilter::Info), Some(path.clone()), true).unwrap();
    log::warn!(target: "board_sync::synchronizer", "move rejected");
    log::debug!(target: "board_sync::synchronizer", "filtered out");

    // Then
    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("move rejected"))
        .unwrap();
    assert!(line.starts_with('['));
    assert!(line.ends_with(" - WARN] board_sync::synchronizer: move rejected"));
    let stamp = &line[1..line.find(" - ").unwrap()];
    assert_that!(stamp.len(), eq("2026-01-01T00:00:00Z".len()));
    assert!(!contents.contains("filtered out"));
}
