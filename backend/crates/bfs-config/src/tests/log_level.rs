use crate::LogLevel;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_names_when_parse_then_mapped() {
    assert_that!(LogLevel::parse_lenient("debug").0, eq(LevelFilter::Debug));
    assert_that!(LogLevel::parse_lenient(" WARN ").0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::parse_lenient("off").0, eq(LevelFilter::Off));
}

#[test]
fn given_unknown_level_when_parse_then_info() {
    // When
    let level: LogLevel = "verbose".parse().unwrap();

    // Then
    assert_that!(*level, eq(LevelFilter::Info));
}
