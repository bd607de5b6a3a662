#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod player;
pub mod powerup;
pub mod render;
pub mod segment;
pub mod tail;

pub use config::{GameConfig, RespawnConfig};
pub use error::{CoreError, ReplayError, RuleCode};
pub use game::{replay, replay_strict, Game, ReplayResult, WorldSnapshot};
pub use geometry::{Direction, Position};
pub use player::{PlayerState, TickOutcome};
pub use powerup::{PowerupState, RespawnPolicy, SpawnRng};
