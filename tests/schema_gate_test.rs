//! Schema gate - locks the snapshot JSON contract consumed by UI hosts

use gridblast::core::{GameRules, GameSnapshot, GameState, Grid};
use gridblast::types::{Color, Coord};
use serde_json::Value;

fn sample_snapshot() -> Value {
    // The red pair keeps the board playable under the no-moves rule
    let mut grid = Grid::new(2, 3);
    grid.set(Coord::new(0, 0), Some(Color::Red));
    grid.set(Coord::new(0, 1), Some(Color::Red));
    grid.set(Coord::new(1, 2), Some(Color::Blue));

    let session = GameState::new(GameRules::block_blaster(), grid);
    serde_json::to_value(GameSnapshot::capture(&session)).expect("snapshot must serialize")
}

#[test]
fn test_snapshot_field_set_is_stable() {
    let value = sample_snapshot();
    let object = value.as_object().expect("snapshot is a JSON object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "best_score",
            "board",
            "cells_left",
            "cols",
            "level",
            "rows",
            "score",
            "state",
        ]
    );
}

#[test]
fn test_snapshot_field_types() {
    let value = sample_snapshot();

    assert!(value["rows"].is_u64());
    assert!(value["cols"].is_u64());
    assert!(value["score"].is_u64());
    assert!(value["best_score"].is_u64());
    assert!(value["level"].is_u64());
    assert!(value["cells_left"].is_u64());
    assert!(value["state"].is_string());
    assert!(value["board"].is_array());
}

#[test]
fn test_snapshot_board_encoding() {
    let value = sample_snapshot();

    // Red has palette index 0, encoded as 1; Blue encodes as 2
    assert_eq!(value["board"][0][0], 1);
    assert_eq!(value["board"][0][1], 1);
    assert_eq!(value["board"][1][2], 2);
    assert_eq!(value["board"][0][2], 0);
    assert_eq!(value["cells_left"], 3);
    assert_eq!(value["state"], "playing");
}
