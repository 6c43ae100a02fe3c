//! Hoop Duel: a two-player terminal ring-toss game on a 4x4 grid.
//!
//! Charge a power meter, steer an angle, and land rings on the grid.
//! Four in a row scores a point and clears the line; first to 3 points wins.
//! An optional external commentary service adds a flavor line after each
//! throw and degrades to canned lines when unavailable.

pub mod core;
pub mod gateway;
pub mod input;
pub mod term;
pub mod types;
