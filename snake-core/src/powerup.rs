use crate::collision::Playfield;
use crate::constants::{CHERRY_SPAWN_CELLS, COIN_SPAWN_CELLS};
use crate::geometry::Position;

const ZERO_SEED: u32 = 0x5EED_5EED;

/// Xorshift32 stream behind seeded placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnRng(u32);

impl SpawnRng {
    /// Zero is a fixed point of xorshift, so it is swapped for a fixed seed.
    pub fn new(seed: u32) -> Self {
        Self(if seed == 0 { ZERO_SEED } else { seed })
    }

    pub fn state(&self) -> u32 {
        self.0
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Cell index in `[-half_cells, half_cells)`. Non-positive halves give 0.
    pub fn pick_cell(&mut self, half_cells: i32) -> i32 {
        if half_cells <= 0 {
            return 0;
        }
        let half = u64::from(half_cells.unsigned_abs());
        // Multiply-shift maps the 32-bit draw onto [0, 2 * half) without a
        // modulo; the product stays below 2^64.
        let offset = (u64::from(self.next_u32()) * (2 * half)) >> 32;
        (offset as i64 - half as i64) as i32
    }
}

/// How a collected powerup is relocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RespawnPolicy {
    /// Diagonal step of one cell from the old spot. This is the shipped behaviour.
    Step,
    /// Seeded pick of a playfield cell. Opt-in.
    Seeded(SpawnRng),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerupState {
    cherry: Position,
    coin: Position,
    policy: RespawnPolicy,
    playfield: Playfield,
}

impl PowerupState {
    pub fn new(policy: RespawnPolicy, playfield: Playfield) -> Self {
        Self {
            cherry: playfield.cell(CHERRY_SPAWN_CELLS, CHERRY_SPAWN_CELLS),
            coin: playfield.cell(COIN_SPAWN_CELLS, COIN_SPAWN_CELLS),
            policy,
            playfield,
        }
    }

    pub fn cherry(&self) -> Position {
        self.cherry
    }

    pub fn coin(&self) -> Position {
        self.coin
    }

    pub fn policy(&self) -> RespawnPolicy {
        self.policy
    }

    pub fn respawn_cherry(&mut self) {
        self.cherry = self.next_spot(self.cherry);
    }

    pub fn respawn_coin(&mut self) {
        self.coin = self.next_spot(self.coin);
    }

    fn next_spot(&mut self, current: Position) -> Position {
        let field = self.playfield;
        match &mut self.policy {
            RespawnPolicy::Step => current + Position::new(field.body_size, field.body_size),
            RespawnPolicy::Seeded(rng) => {
                let cx = rng.pick_cell(field.half_width_cells);
                let cy = rng.pick_cell(field.half_height_cells);
                field.cell(cx, cy)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BODY_SIZE;

    #[test]
    fn starts_at_fixed_spawn_cells() {
        let powerups = PowerupState::new(RespawnPolicy::Step, Playfield::default());
        assert_eq!(powerups.cherry(), Position::new(100.0, 100.0));
        assert_eq!(powerups.coin(), Position::new(50.0, 50.0));
    }

    #[test]
    fn spawn_cells_follow_the_cell_size() {
        let field = Playfield {
            body_size: 30.0,
            ..Playfield::default()
        };
        let powerups = PowerupState::new(RespawnPolicy::Step, field);
        assert_eq!(powerups.cherry(), Position::new(120.0, 120.0));
        assert_eq!(powerups.coin(), Position::new(60.0, 60.0));
        assert!(powerups.cherry().is_grid_aligned(30.0));
        assert!(powerups.coin().is_grid_aligned(30.0));
    }

    #[test]
    fn step_policy_moves_one_cell_diagonally() {
        let mut powerups = PowerupState::new(RespawnPolicy::Step, Playfield::default());
        powerups.respawn_cherry();
        powerups.respawn_coin();
        powerups.respawn_coin();
        assert_eq!(powerups.cherry(), Position::new(125.0, 125.0));
        assert_eq!(powerups.coin(), Position::new(100.0, 100.0));
    }

    #[test]
    fn seeded_policy_stays_inside_playfield_on_grid() {
        let field = Playfield::default();
        let mut powerups = PowerupState::new(RespawnPolicy::Seeded(SpawnRng::new(42)), field);
        for _ in 0..500 {
            powerups.respawn_cherry();
            let cherry = powerups.cherry();
            assert!(field.contains(cherry), "cherry escaped: {cherry:?}");
            assert!(cherry.is_grid_aligned(BODY_SIZE));
        }
    }

    #[test]
    fn seeded_policy_is_reproducible() {
        let field = Playfield::default();
        let mut a = PowerupState::new(RespawnPolicy::Seeded(SpawnRng::new(9)), field);
        let mut b = PowerupState::new(RespawnPolicy::Seeded(SpawnRng::new(9)), field);
        for _ in 0..20 {
            a.respawn_coin();
            b.respawn_coin();
            assert_eq!(a.coin(), b.coin());
        }
    }

    #[test]
    fn zero_seed_is_swapped() {
        assert_eq!(SpawnRng::new(0).state(), ZERO_SEED);
        assert_ne!(SpawnRng::new(0).next_u32(), 0);
    }

    #[test]
    fn pick_cell_covers_the_half_open_range() {
        let mut rng = SpawnRng::new(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let cell = rng.pick_cell(3);
            assert!((-3..3).contains(&cell));
            seen_min |= cell == -3;
            seen_max |= cell == 2;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn pick_cell_handles_the_widest_half() {
        let mut rng = SpawnRng::new(1);
        for _ in 0..1_000 {
            let cell = rng.pick_cell(i32::MAX);
            assert!(cell >= -i32::MAX);
        }
        assert_eq!(rng.pick_cell(0), 0);
    }
}
