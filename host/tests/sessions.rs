use std::fs;

use anyhow::Result;
use snake_core::constants::{BODY_SIZE, TAIL_GROWTH};
use snake_core::{GameConfig, Position, RespawnConfig};
use snake_host::config::read_config_file;
use snake_host::{load_config, run_script, DrawCall};

#[test]
fn config_file_overrides_only_named_fields() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    fs::write(
        &path,
        r#"{ "initial_game_speed": 0.5, "respawn": { "kind": "seeded", "seed": 7 } }"#,
    )?;

    let config = read_config_file(&path)?;
    assert_eq!(config.initial_game_speed, 0.5);
    assert_eq!(config.respawn, RespawnConfig::Seeded { seed: 7 });
    assert_eq!(config.game_speed_step, GameConfig::default().game_speed_step);
    Ok(())
}

#[test]
fn invalid_config_file_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    fs::write(&path, r#"{ "initial_game_speed": -1.0 }"#)?;

    let err = load_config(Some(&path)).expect_err("negative speed must fail");
    assert!(err.to_string().contains("invalid game config"));
    Ok(())
}

#[test]
fn missing_config_file_names_the_path() {
    let err = read_config_file(std::path::Path::new("/nonexistent/snake.json"))
        .expect_err("file does not exist");
    assert!(format!("{err:#}").contains("/nonexistent/snake.json"));
}

#[test]
fn one_step_per_frame_script_reaches_the_coin() -> Result<()> {
    // A quarter-second frame is exactly one step at the starting speed.
    let artifact = run_script(GameConfig::default(), "U.R.", 0.25, true)?;
    let snapshot = artifact.snapshot;

    assert_eq!(snapshot.head, Position::new(2.0 * BODY_SIZE, 2.0 * BODY_SIZE));
    assert_eq!(snapshot.pickups, 1);
    assert_eq!(snapshot.tail.len(), TAIL_GROWTH);
    Ok(())
}

#[test]
fn dead_session_renders_the_game_over_text() -> Result<()> {
    let artifact = run_script(GameConfig::default(), "L40", 0.25, false)?;
    assert!(!artifact.snapshot.alive);

    let lines = artifact
        .last_frame
        .iter()
        .filter(|call| matches!(call, DrawCall::SegmentLine { .. }))
        .count();
    assert!(lines > 0);
    Ok(())
}

#[test]
fn live_session_draws_only_quads() -> Result<()> {
    let artifact = run_script(GameConfig::default(), "R3", 0.25, false)?;
    assert!(artifact.snapshot.alive);
    assert!(artifact
        .last_frame
        .iter()
        .all(|call| matches!(call, DrawCall::Quad { .. })));
    // Cherry, coin and head.
    assert_eq!(artifact.last_frame.len(), 3);
    Ok(())
}

#[test]
fn config_errors_keep_their_source() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    fs::write(&path, r#"{ "game_speed_step": -0.5 }"#)?;

    let err = load_config(Some(&path)).expect_err("negative step must fail");
    let core = err
        .downcast_ref::<snake_core::CoreError>()
        .expect("core error is kept as the source");
    assert!(matches!(
        core,
        snake_core::CoreError::InvalidConfig {
            field: "game_speed_step",
            ..
        }
    ));
    Ok(())
}
