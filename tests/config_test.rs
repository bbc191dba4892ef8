//! Tests for loading settings files.

use rewind_games::{ReplayScript, Settings, run_script};
use rewind_tictactoe::DisplayOrder;
use std::io::Write;
use std::path::Path;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "order = \"descending\"\nhighlight_last_move = false\nlog_file = \"game.log\""
    )
    .expect("write config");

    let settings = Settings::from_file(file.path()).expect("valid config");
    assert_eq!(*settings.order(), DisplayOrder::Descending);
    assert!(!*settings.highlight_last_move());
    assert!(*settings.highlight_winning_line());
    assert_eq!(settings.log_file().as_deref(), Some(Path::new("game.log")));
}

#[test]
fn test_load_explicit_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "highlight_winning_line = false\n").expect("write config");

    let settings = Settings::load(Some(path.as_path())).expect("valid config");
    assert!(!*settings.highlight_winning_line());
    assert_eq!(*settings.order(), DisplayOrder::Ascending);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "order = \"sideways\"").expect("write config");

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_configured_order_reaches_replay() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "order = \"descending\"").expect("write config");
    let settings = Settings::from_file(file.path()).expect("valid config");

    let view = run_script(&ReplayScript {
        moves: vec!["4".into(), "0".into()],
        jump: None,
        order: *settings.order(),
    })
    .expect("legal script");

    let steps: Vec<_> = view.moves().iter().map(|m| m.step).collect();
    assert_eq!(steps, [2, 1, 0]);
}
