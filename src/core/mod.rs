//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game;
pub mod geometry;
pub mod match_state;
pub mod rng;
pub mod throw;

// Re-export commonly used types
pub use board::{Board, LineScore, WIN_LINES};
pub use game::{CommentaryEvent, Game, Phase};
pub use match_state::{MatchState, ThrowResolution};
pub use rng::SimpleRng;
pub use throw::{ThrowParams, ThrowState};
