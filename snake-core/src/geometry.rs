use core::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// World-space coordinate. Grid cells sit on multiples of `BODY_SIZE`, so
/// collision checks compare positions exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are whole multiples of `cell`.
    pub fn is_grid_aligned(&self, cell: f32) -> bool {
        self.x % cell == 0.0 && self.y % cell == 0.0
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Position {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const MOVES: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn opposite(self) -> Self {
        match self {
            Self::Stop => Self::Stop,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// `Stop` is perpendicular to nothing.
    pub fn is_perpendicular(self, other: Self) -> bool {
        (self.is_vertical() && other.is_horizontal())
            || (self.is_horizontal() && other.is_vertical())
    }

    pub fn unit(self) -> Position {
        match self {
            Self::Stop => Position::ORIGIN,
            Self::Up => Position::new(0.0, 1.0),
            Self::Down => Position::new(0.0, -1.0),
            Self::Left => Position::new(-1.0, 0.0),
            Self::Right => Position::new(1.0, 0.0),
        }
    }

    /// Velocity of one step in this direction: one body-size unit along the axis.
    pub fn step(self, body_size: f32) -> Position {
        self.unit() * body_size
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
