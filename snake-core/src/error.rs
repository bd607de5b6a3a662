use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCode {
    TailGrowthStep,
    GameSpeedRange,
    HeadOffGrid,
    VelocityDirectionMismatch,
    PowerupOffGrid,
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TailGrowthStep => write!(f, "TAIL_GROWTH_STEP"),
            Self::GameSpeedRange => write!(f, "GAME_SPEED_RANGE"),
            Self::HeadOffGrid => write!(f, "HEAD_OFF_GRID"),
            Self::VelocityDirectionMismatch => write!(f, "VELOCITY_DIRECTION_MISMATCH"),
            Self::PowerupOffGrid => write!(f, "POWERUP_OFF_GRID"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CoreError {
    TailIndexOutOfRange { index: usize, len: usize },
    InvalidConfig { field: &'static str, value: f64 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TailIndexOutOfRange { index, len } => {
                write!(f, "tail index out of range: {index} (tail length {len})")
            }
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid config value for {field}: {value}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

#[derive(Clone, Debug, PartialEq)]
pub enum ReplayError {
    Config(CoreError),
    RuleViolation { frame: u32, rule: RuleCode },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::RuleViolation { frame, rule } => {
                write!(f, "rule violation at frame {frame}: {rule}")
            }
        }
    }
}

impl From<CoreError> for ReplayError {
    fn from(err: CoreError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReplayError {}
