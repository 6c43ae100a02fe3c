//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (the board is GRID_SIZE x GRID_SIZE)
pub const GRID_SIZE: usize = 4;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Points needed to win a match
pub const SCORE_TO_WIN: u32 = 3;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const POWER_TICK_MS: u32 = 30;
pub const FLIGHT_MS: u32 = 900;
pub const CLEAR_FLASH_MS: u32 = 800;
pub const FEEDBACK_MS: u32 = 1200;

/// Power meter ramp per power tick; wraps to 0 past 100 (sawtooth)
pub const POWER_STEP: f32 = 3.2;
pub const POWER_MAX: f32 = 100.0;

/// Aim angle limits and per-step delta (degrees)
pub const ANGLE_STEP: f32 = 4.0;
pub const ANGLE_MIN: f32 = -45.0;
pub const ANGLE_MAX: f32 = 45.0;

/// Chance (percent) that the next hoop is a twin/split hoop
pub const SPLIT_CHANCE_PERCENT: u32 = 20;

/// Aim key hold-to-repeat timing (milliseconds)
pub const AIM_DAS_MS: u32 = 150;
pub const AIM_ARR_MS: u32 = 50;

/// One of the two duelists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing player
    pub fn other(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Cell on the board (None = empty, Some = owned by that player)
pub type Cell = Option<Player>;

/// Player inputs after key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowAction {
    ChargeStart,
    ChargeRelease,
    AngleLeft,
    AngleRight,
    Reset,
}

/// Player-visible feedback category for a resolved throw.
///
/// Priority when several apply: Miss > Win > Point > DoubleHit > Steal > Hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Miss,
    Win,
    Point(u32),
    DoubleHit,
    Steal,
    Hit,
}

impl Feedback {
    /// Banner text shown in the play area
    pub fn label(&self) -> String {
        match self {
            Feedback::Miss => "MISS!".to_string(),
            Feedback::Win => "WINNER!".to_string(),
            Feedback::Point(n) => format!("POINT +{n}!"),
            Feedback::DoubleHit => "DOUBLE HIT!".to_string(),
            Feedback::Steal => "STEAL!".to_string(),
            Feedback::Hit => "HIT!".to_string(),
        }
    }
}

/// Action category reported to the commentary gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentaryAction {
    Throw,
    Win,
    Miss,
    Steal,
    Split,
    Point,
}

impl CommentaryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentaryAction::Throw => "throw",
            CommentaryAction::Win => "win",
            CommentaryAction::Miss => "miss",
            CommentaryAction::Steal => "steal",
            CommentaryAction::Split => "split",
            CommentaryAction::Point => "point",
        }
    }
}

/// How a match ends.
///
/// `Draw` is reserved: under the fixed first-to-3 rule only one player's
/// score changes per throw, so a drawn match cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(Player),
    Draw,
}
