//! The `analyze` command end to end.

use tris_cli::run_analyze;
use tris_core::Player;

#[test]
fn test_json_output() {
    let mut out = Vec::new();
    run_analyze(&mut out, "XX_/OO_/___", Some(Player::O), true).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["to_move"], "O");
    assert_eq!(value["outcome"], "Ongoing");
    assert_eq!(value["score"], -10);
    assert_eq!(value["moves"].as_array().unwrap().len(), 5);
    assert_eq!(value["engine_choice"]["row"], 2);
    assert_eq!(value["engine_choice"]["col"], 3);
    assert_eq!(value["engine_choice"]["decisive"], true);
    assert!(value.get("position").is_none());
}

#[test]
fn test_finished_board_report() {
    let mut out = Vec::new();
    run_analyze(&mut out, "XXX/OO_/___", None, false).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("To move: O"));
    assert!(text.contains("Outcome: X wins"));
    assert!(text.contains("Score:   +10"));
    assert!(!text.contains("row col score"));
}

#[test]
fn test_invalid_board_is_an_error() {
    let mut out = Vec::new();
    assert!(run_analyze(&mut out, "OOO/___/___", None, false).is_err());
    assert!(out.is_empty());
}
