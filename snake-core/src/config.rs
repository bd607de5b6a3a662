use serde::{Deserialize, Serialize};

use crate::collision::Playfield;
use crate::constants::{GAME_SPEED_STEP, INITIAL_GAME_SPEED, MAX_HALF_CELLS, MIN_GAME_SPEED};
use crate::error::CoreError;
use crate::powerup::{RespawnPolicy, SpawnRng};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RespawnConfig {
    #[default]
    Step,
    Seeded {
        seed: u32,
    },
}

impl RespawnConfig {
    pub fn policy(self) -> RespawnPolicy {
        match self {
            Self::Step => RespawnPolicy::Step,
            Self::Seeded { seed } => RespawnPolicy::Seeded(SpawnRng::new(seed)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds between discrete steps at game start.
    pub initial_game_speed: f64,
    /// Seconds removed from the step interval per tail growth.
    pub game_speed_step: f64,
    /// The step interval never drops below this.
    pub min_game_speed: f64,
    pub playfield: Playfield,
    pub respawn: RespawnConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_game_speed: INITIAL_GAME_SPEED,
            game_speed_step: GAME_SPEED_STEP,
            min_game_speed: MIN_GAME_SPEED,
            playfield: Playfield::default(),
            respawn: RespawnConfig::Step,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.initial_game_speed > 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "initial_game_speed",
                value: self.initial_game_speed,
            });
        }
        if !(self.game_speed_step >= 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "game_speed_step",
                value: self.game_speed_step,
            });
        }
        if !(self.min_game_speed > 0.0) || self.min_game_speed > self.initial_game_speed {
            return Err(CoreError::InvalidConfig {
                field: "min_game_speed",
                value: self.min_game_speed,
            });
        }
        if !(self.playfield.body_size > 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "playfield.body_size",
                value: f64::from(self.playfield.body_size),
            });
        }
        let halves = [
            ("playfield.half_width_cells", self.playfield.half_width_cells),
            ("playfield.half_height_cells", self.playfield.half_height_cells),
        ];
        for (field, cells) in halves {
            if !(1..=MAX_HALF_CELLS).contains(&cells) {
                return Err(CoreError::InvalidConfig {
                    field,
                    value: f64::from(cells),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let config = GameConfig {
            initial_game_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig {
                field: "initial_game_speed",
                ..
            })
        ));
    }

    #[test]
    fn rejects_floor_above_initial_speed() {
        let config = GameConfig {
            min_game_speed: 1.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_playfield() {
        let config = GameConfig {
            playfield: Playfield {
                half_width_cells: 1_500_000_000,
                ..Playfield::default()
            },
            respawn: RespawnConfig::Seeded { seed: 1 },
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig {
                field: "playfield.half_width_cells",
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_playfield() {
        let config = GameConfig {
            playfield: Playfield {
                half_height_cells: 0,
                ..Playfield::default()
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_other_cell_sizes() {
        let config = GameConfig {
            playfield: Playfield {
                body_size: 30.0,
                ..Playfield::default()
            },
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"initial_game_speed":0.5,"respawn":{"kind":"seeded","seed":7}}"#)
                .expect("config should parse");
        assert_eq!(config.initial_game_speed, 0.5);
        assert_eq!(config.game_speed_step, GAME_SPEED_STEP);
        assert_eq!(config.respawn, RespawnConfig::Seeded { seed: 7 });
        assert_eq!(config.playfield, Playfield::default());
    }
}
