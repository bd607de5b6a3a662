use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use snake_core::GameConfig;

pub const ENV_GAME_SPEED: &str = "SNAKE_GAME_SPEED";
pub const ENV_GAME_SPEED_STEP: &str = "SNAKE_GAME_SPEED_STEP";
pub const ENV_MIN_GAME_SPEED: &str = "SNAKE_MIN_GAME_SPEED";
pub const ENV_RESPAWN_SEED: &str = "SNAKE_RESPAWN_SEED";

/// Defaults, then the JSON file (if any), then environment overrides.
/// The merged result must pass validation.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => GameConfig::default(),
    };
    apply_env_overrides(&mut config);
    config.validate().context("invalid game config")?;
    Ok(config)
}

pub fn read_config_file(path: &Path) -> Result<GameConfig> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read config: {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

pub fn apply_env_overrides(config: &mut GameConfig) {
    if let Some(value) = read_env_f64(ENV_GAME_SPEED) {
        config.initial_game_speed = value;
    }
    if let Some(value) = read_env_f64(ENV_GAME_SPEED_STEP) {
        config.game_speed_step = value;
    }
    if let Some(value) = read_env_f64(ENV_MIN_GAME_SPEED) {
        config.min_game_speed = value;
    }
    if let Some(seed) = read_env_u32(ENV_RESPAWN_SEED) {
        config.respawn = snake_core::RespawnConfig::Seeded { seed };
    }
}

fn read_env_f64(name: &str) -> Option<f64> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::warn!("ignoring {name}={raw}: not a finite number");
            None
        }
    }
}

fn read_env_u32(name: &str) -> Option<u32> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring {name}={raw}: not an unsigned integer");
            None
        }
    }
}
