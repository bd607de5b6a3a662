use serde::{Deserialize, Serialize};

use crate::collision::{self, Collisions, Playfield};
use crate::config::GameConfig;
use crate::error::CoreError;
use crate::geometry::{Direction, Position};
use crate::powerup::PowerupState;
use crate::tail::Tail;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// A discrete step ran during this tick.
    pub stepped: bool,
    pub collisions: Collisions,
}

impl TickOutcome {
    pub fn died(&self) -> bool {
        self.collisions.death.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    head: Position,
    velocity: Position,
    direction: Direction,
    tail: Tail,
    alive: bool,
    time_since_step: f64,
    game_speed: f64,
    growths: u32,
    direction_locked: bool,
    body_size: f32,
    initial_game_speed: f64,
    game_speed_step: f64,
    min_game_speed: f64,
}

impl PlayerState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            head: Position::ORIGIN,
            velocity: Position::ORIGIN,
            direction: Direction::Stop,
            tail: Tail::new(),
            alive: true,
            time_since_step: 0.0,
            game_speed: config.initial_game_speed,
            growths: 0,
            direction_locked: false,
            body_size: config.playfield.body_size,
            initial_game_speed: config.initial_game_speed,
            game_speed_step: config.game_speed_step,
            min_game_speed: config.min_game_speed,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn velocity(&self) -> Position {
        self.velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn game_speed(&self) -> f64 {
        self.game_speed
    }

    pub fn initial_game_speed(&self) -> f64 {
        self.initial_game_speed
    }

    pub fn body_size(&self) -> f32 {
        self.body_size
    }

    pub fn is_direction_locked(&self) -> bool {
        self.direction_locked
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    pub fn tail_size(&self) -> usize {
        self.tail.len()
    }

    pub fn tail_at(&self, index: usize) -> Result<Position, CoreError> {
        self.tail.at(index)
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Requests a new heading; returns whether it was taken.
    ///
    /// A turn is accepted only while no other turn has been taken since the
    /// last step, and only onto an axis perpendicular to the current heading
    /// (any axis when stopped). Turning into the cell held by the first tail
    /// cell is refused as well. A refused turn leaves the player untouched.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction_locked || direction == Direction::Stop {
            return false;
        }
        if self.direction != Direction::Stop && !self.direction.is_perpendicular(direction) {
            return false;
        }

        let step = direction.step(self.body_size);
        if self.tail.first() == Some(self.head + step) {
            return false;
        }

        self.velocity = step;
        self.direction = direction;
        self.direction_locked = true;
        true
    }

    /// Advances the step clock by `elapsed` seconds and runs at most one
    /// discrete step once a full game-speed interval has built up. A dead
    /// player neither accumulates time nor steps.
    pub fn tick(
        &mut self,
        elapsed: f64,
        powerups: &mut PowerupState,
        playfield: &Playfield,
    ) -> TickOutcome {
        if !self.alive {
            return TickOutcome::default();
        }

        self.time_since_step += elapsed;
        if self.time_since_step < self.game_speed {
            return TickOutcome::default();
        }

        let previous_head = self.head;
        self.head += self.velocity;
        self.tail.shift(previous_head);
        self.direction_locked = false;

        let collisions = collision::resolve(self.head, &self.tail, powerups, playfield);
        for _ in 0..collisions.pickups() {
            self.increase_tail();
        }
        if collisions.death.is_some() {
            self.kill();
        }

        self.time_since_step = 0.0;
        TickOutcome {
            stepped: true,
            collisions,
        }
    }

    /// Grows the tail by one block and shortens the step interval, never
    /// below the configured floor. The interval is recomputed from the growth
    /// count so repeated growth does not drift.
    pub fn increase_tail(&mut self) {
        self.tail.grow();
        self.growths = self.growths.saturating_add(1);
        let shortened = self.initial_game_speed - self.game_speed_step * f64::from(self.growths);
        self.game_speed = shortened.max(self.min_game_speed);
    }

    /// One-way: only `respawn` brings the player back.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Starts a fresh run at the origin: stopped, tailless, alive, at the
    /// initial game speed.
    pub fn respawn(&mut self) {
        self.head = Position::ORIGIN;
        self.velocity = Position::ORIGIN;
        self.direction = Direction::Stop;
        self.tail.clear();
        self.alive = true;
        self.time_since_step = 0.0;
        self.game_speed = self.initial_game_speed;
        self.growths = 0;
        self.direction_locked = false;
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, head: Position, direction: Direction, tail: Tail) {
        self.head = head;
        self.direction = direction;
        self.velocity = direction.step(self.body_size);
        self.tail = tail;
    }
}
