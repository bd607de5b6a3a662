use serde::{Deserialize, Serialize};

use crate::constants::{BODY_SIZE, HALF_HEIGHT_CELLS, HALF_WIDTH_CELLS};
use crate::geometry::Position;
use crate::powerup::PowerupState;
use crate::tail::Tail;

/// Playable rectangle centred on the origin, measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub half_width_cells: i32,
    pub half_height_cells: i32,
    pub body_size: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            half_width_cells: HALF_WIDTH_CELLS,
            half_height_cells: HALF_HEIGHT_CELLS,
            body_size: BODY_SIZE,
        }
    }
}

impl Playfield {
    /// World position of grid cell `(cx, cy)`.
    pub fn cell(&self, cx: i32, cy: i32) -> Position {
        Position::new(cx as f32 * self.body_size, cy as f32 * self.body_size)
    }

    /// Half-open on every axis: the low edge is inside, the high edge is not.
    pub fn contains(&self, position: Position) -> bool {
        let max_x = self.half_width_cells as f32 * self.body_size;
        let max_y = self.half_height_cells as f32 * self.body_size;
        position.x >= -max_x && position.x < max_x && position.y >= -max_y && position.y < max_y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Boundary,
    SelfCollision,
}

impl DeathCause {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boundary => "boundary",
            Self::SelfCollision => "self_collision",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collisions {
    pub cherry: bool,
    pub coin: bool,
    pub death: Option<DeathCause>,
}

impl Collisions {
    pub fn pickups(&self) -> usize {
        usize::from(self.cherry) + usize::from(self.coin)
    }
}

/// Runs every rule for one step. Rules never short-circuit each other, so a
/// single step can collect a powerup and die. Collected powerups are
/// respawned here; growth and death are applied by the caller.
pub fn resolve(
    head: Position,
    tail: &Tail,
    powerups: &mut PowerupState,
    playfield: &Playfield,
) -> Collisions {
    let mut collisions = Collisions::default();

    if head == powerups.cherry() {
        powerups.respawn_cherry();
        collisions.cherry = true;
    }

    if head == powerups.coin() {
        powerups.respawn_coin();
        collisions.coin = true;
    }

    if !playfield.contains(head) {
        collisions.death = Some(DeathCause::Boundary);
    }

    if collisions.death.is_none() && tail.hits_body(head) {
        collisions.death = Some(DeathCause::SelfCollision);
    }

    collisions
}
