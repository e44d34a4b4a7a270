//! Tests for loading tree configurations from disk

use tempfile::TempDir;
use tictree::{Error, GameTree, Strategy, StrategyAssignment, TreeConfig};

#[test]
fn config_save_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tree.json");

    let config = TreeConfig::new(StrategyAssignment::new(Strategy::Heuristic, Strategy::Legal))
        .with_depth(3)
        .with_seed(vec![(1, 1)]);
    config.save_json_file(&path).expect("Failed to save config");

    let loaded = TreeConfig::from_json_file(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn config_file_drives_tree_construction() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("rational.json");
    std::fs::write(&path, r#"{ "depth": 9, "strategy": "rational" }"#).unwrap();

    let config = TreeConfig::from_json_file(&path).unwrap();
    let tree = GameTree::from_config(&config).unwrap();
    assert_eq!(tree.level_sizes(), vec![1, 3, 5, 16, 18, 23, 24, 22, 10, 3]);
}

#[test]
fn seeded_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("seeded.json");
    std::fs::write(
        &path,
        r#"{ "depth": 1, "strategy": {"x": "legal", "o": "heuristic"}, "seeds": [[[0, 0]]] }"#,
    )
    .unwrap();

    let tree = GameTree::from_config(&TreeConfig::from_json_file(&path).unwrap()).unwrap();
    // O answers a corner opening in the center.
    assert_eq!(tree.level_sizes(), vec![1, 1]);
    assert_eq!(tree.levels()[1][0].occupied_count(), 2);
}

#[test]
fn unknown_strategy_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "strategy": "random" }"#).unwrap();

    let err = TreeConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn invalid_seed_fails_tree_construction() {
    let config = TreeConfig::new(Strategy::Legal).with_seed(vec![(0, 3)]);
    assert!(matches!(
        GameTree::from_config(&config),
        Err(Error::InvalidSquare { row: 0, col: 3 })
    ));
}
