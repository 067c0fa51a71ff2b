//! Tests for engine configuration loading.

use papyrus_board::{EngineConfig, Modifier, STANDARD_DIMENSION};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_toml_uses_defaults() {
    let config = EngineConfig::from_toml_str("").expect("Parse failed");
    assert_eq!(config, EngineConfig::default());
    assert_eq!(*config.dimension(), STANDARD_DIMENSION);
    assert_eq!(*config.rack_size(), 7);
    assert_eq!(config.scoring().bingo_bonus, 50);
}

#[test]
fn test_overrides_and_custom_layout() -> anyhow::Result<()> {
    let config = EngineConfig::from_toml_str(
        r#"
dimension = 5
rack_size = 4
bingo_bonus = 20
bingo_tiles = 4

[layout]
triple_word = [[0, 2]]
"#,
    )?;
    assert_eq!(*config.rack_size(), 4);
    assert_eq!(config.scoring().bingo_tiles, 4);

    let grid = config.grid()?;
    assert_eq!(grid.dimension(), 5);
    let modifier = |row, column| grid.square(row, column).map(|s| s.modifier());
    assert_eq!(modifier(1, 3), Some(Modifier::TripleWord));
    assert_eq!(modifier(3, 5), Some(Modifier::TripleWord));
    // Premium kinds left out of the table keep their standard offsets.
    assert_eq!(modifier(3, 3), Some(Modifier::Center));
    assert_eq!(modifier(1, 1), Some(Modifier::TripleLetter));
    Ok(())
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("engine.toml");
    fs::write(&path, "rack_size = 8\n").expect("Failed to write TOML");

    let config = EngineConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.rack_size(), 8);
    assert_eq!(*config.dimension(), STANDARD_DIMENSION);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).expect_err("Load succeeded");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let err = EngineConfig::from_toml_str("dimension = \"wide\"").expect_err("Parse succeeded");
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_even_dimension_fails_at_grid_build() {
    let config = EngineConfig::from_toml_str("dimension = 8").expect("Parse failed");
    assert!(config.grid().is_err());
}
