use crate::LogLevel;

use log::LevelFilter;

#[test]
fn test_known_levels_parse() {
    assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Off));
    assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Error));
    assert_eq!(" warn ".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Trace));
}

#[test]
fn test_unknown_level_defaults_to_info() {
    assert_eq!(LogLevel::parse_lenient("verbose"), LogLevel(LevelFilter::Info));
}
