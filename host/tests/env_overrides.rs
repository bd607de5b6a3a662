use anyhow::Result;
use snake_core::{GameConfig, RespawnConfig};
use snake_host::config::{apply_env_overrides, ENV_GAME_SPEED, ENV_MIN_GAME_SPEED, ENV_RESPAWN_SEED};

// Kept to a single test so no other thread in this binary reads the variables.
#[test]
fn environment_overrides_skip_malformed_values() -> Result<()> {
    std::env::set_var(ENV_GAME_SPEED, "0.4");
    std::env::set_var(ENV_MIN_GAME_SPEED, "slow");
    std::env::set_var(ENV_RESPAWN_SEED, "42");

    let mut config = GameConfig::default();
    apply_env_overrides(&mut config);

    std::env::remove_var(ENV_GAME_SPEED);
    std::env::remove_var(ENV_MIN_GAME_SPEED);
    std::env::remove_var(ENV_RESPAWN_SEED);

    assert_eq!(config.initial_game_speed, 0.4);
    assert_eq!(config.min_game_speed, GameConfig::default().min_game_speed);
    assert_eq!(config.respawn, RespawnConfig::Seeded { seed: 42 });
    config.validate()?;
    Ok(())
}
