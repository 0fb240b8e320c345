//! Tests for loading configuration files.

use std::io::Write;
use tictactoe_console::{GameConfig, Layout, Seat};

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
symbol = "o"
computer_token = "+"
layout = "keypad"
first_player = "computer"
max_rounds = 5
color = false
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.symbol(), &Some('o'));
    assert_eq!(config.computer_token(), &'+');
    assert_eq!(config.layout(), &Layout::Keypad);
    assert_eq!(config.first_player(), &Seat::Computer);
    assert_eq!(config.max_rounds(), &Some(5));
    assert!(!*config.color());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "layout = \"diagonal\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().contains("Config error"));
}

#[test]
fn test_multi_char_symbol_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "symbol = \"xo\"").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_file_values_are_validated() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "symbol = \"*\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("collides"));
}
