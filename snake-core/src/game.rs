use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::collision::Playfield;
use crate::config::GameConfig;
use crate::constants::TAIL_GROWTH;
use crate::error::{CoreError, ReplayError, RuleCode};
use crate::geometry::{Direction, Position};
use crate::input::{InputSource, Key, KeyboardState};
use crate::player::{PlayerState, TickOutcome};
use crate::powerup::PowerupState;

/// Everything one session needs: the player, the single powerup set it
/// collects from and the playfield both are checked against.
#[derive(Clone, Debug)]
pub struct Game {
    player: PlayerState,
    powerups: PowerupState,
    playfield: Playfield,
    frame_count: u32,
    steps: u32,
    pickups: u32,
    deaths: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub frame_count: u32,
    pub steps: u32,
    pub pickups: u32,
    pub deaths: u32,
    pub alive: bool,
    pub head: Position,
    pub velocity: Position,
    pub direction: Direction,
    pub game_speed: f64,
    pub tail: Vec<Position>,
    pub cherry: Position,
    pub coin: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayResult {
    pub frame_count: u32,
    pub steps: u32,
    pub pickups: u32,
    pub deaths: u32,
    pub alive: bool,
    pub head: Position,
    pub tail_size: usize,
    pub game_speed: f64,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            player: PlayerState::new(&config),
            powerups: PowerupState::new(config.respawn.policy(), config.playfield),
            playfield: config.playfield,
            frame_count: 0,
            steps: 0,
            pickups: 0,
            deaths: 0,
        })
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn powerups(&self) -> &PowerupState {
        &self.powerups
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// One frame: route this frame's key presses, then advance the step clock.
    /// Arrow keys turn a live player (the first accepted turn locks the rest
    /// out until the next step); Start brings a dead one back.
    pub fn update(&mut self, elapsed: f64, input: &dyn InputSource) -> TickOutcome {
        if self.player.alive() {
            for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
                if !input.was_pressed_this_frame(key) {
                    continue;
                }
                if let Some(direction) = key.direction() {
                    self.player.turn(direction);
                }
            }
        } else if input.was_pressed_this_frame(Key::Start) {
            self.player.respawn();
        }

        let outcome = self.player.tick(elapsed, &mut self.powerups, &self.playfield);
        self.frame_count += 1;
        if outcome.stepped {
            self.steps += 1;
        }
        self.pickups += outcome.collisions.pickups() as u32;
        if outcome.died() {
            self.deaths += 1;
        }
        outcome
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame_count: self.frame_count,
            steps: self.steps,
            pickups: self.pickups,
            deaths: self.deaths,
            alive: self.player.alive(),
            head: self.player.head(),
            velocity: self.player.velocity(),
            direction: self.player.direction(),
            game_speed: self.player.game_speed(),
            tail: self.player.tail().as_slice().to_vec(),
            cherry: self.powerups.cherry(),
            coin: self.powerups.coin(),
        }
    }

    pub fn result(&self) -> ReplayResult {
        ReplayResult {
            frame_count: self.frame_count,
            steps: self.steps,
            pickups: self.pickups,
            deaths: self.deaths,
            alive: self.player.alive(),
            head: self.player.head(),
            tail_size: self.player.tail_size(),
            game_speed: self.player.game_speed(),
        }
    }

    pub fn validate_invariants(&self) -> Result<(), RuleCode> {
        let cell = self.playfield.body_size;

        if self.player.tail_size() % TAIL_GROWTH != 0 {
            return Err(RuleCode::TailGrowthStep);
        }

        let speed = self.player.game_speed();
        if !(speed > 0.0) || speed > self.player.initial_game_speed() {
            return Err(RuleCode::GameSpeedRange);
        }

        if !self.player.head().is_grid_aligned(cell) {
            return Err(RuleCode::HeadOffGrid);
        }

        if self.player.velocity() != self.player.direction().step(cell) {
            return Err(RuleCode::VelocityDirectionMismatch);
        }

        if !self.powerups.cherry().is_grid_aligned(cell) || !self.powerups.coin().is_grid_aligned(cell) {
            return Err(RuleCode::PowerupOffGrid);
        }

        Ok(())
    }
}

/// Replays one input byte per frame at a fixed frame time.
pub fn replay(config: GameConfig, inputs: &[u8], frame_dt: f64) -> Result<ReplayResult, CoreError> {
    let mut game = Game::new(config)?;
    let mut keyboard = KeyboardState::new();

    for input in inputs {
        keyboard.update_from_byte(*input);
        game.update(frame_dt, &keyboard);
    }

    Ok(game.result())
}

/// Like [`replay`], checking every invariant before the first frame and after
/// each one.
pub fn replay_strict(
    config: GameConfig,
    inputs: &[u8],
    frame_dt: f64,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(config)?;
    let mut keyboard = KeyboardState::new();
    game.validate_invariants()
        .map_err(|rule| ReplayError::RuleViolation {
            frame: game.frame_count(),
            rule,
        })?;

    for input in inputs {
        keyboard.update_from_byte(*input);
        game.update(frame_dt, &keyboard);
        game.validate_invariants()
            .map_err(|rule| ReplayError::RuleViolation {
                frame: game.frame_count(),
                rule,
            })?;
    }

    Ok(game.result())
}
