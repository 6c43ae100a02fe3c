//! Input module - terminal key events to throw actions
//!
//! `map` holds the pure key mapping; `tracker` turns press/repeat/release
//! events into the charge and aim hold semantics the game expects, with a
//! timeout fallback for terminals that never emit key releases.

pub mod map;
pub mod tracker;

pub use map::should_quit;
pub use tracker::InputTracker;
