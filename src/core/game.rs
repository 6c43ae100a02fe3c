//! Game - ties match state, throw state, and transient display timers together
//!
//! The owning loop drives everything through two entry points: `apply_action`
//! for mapped key input and `tick` for elapsed time. Every mutation happens
//! inside one synchronous call, so the power ramp, flight resolution, and
//! the transient feedback/clear timers can never interleave mid-update.
//!
//! Commentary stays decoupled: a resolution deposits a `CommentaryEvent`
//! which the caller drains with `take_last_event` and forwards to the
//! gateway. Nothing in here waits on the gateway.

use arrayvec::ArrayVec;

use crate::core::geometry;
use crate::core::match_state::MatchState;
use crate::core::rng::SimpleRng;
use crate::core::throw::ThrowState;
use crate::types::{
    Cell, CommentaryAction, Feedback, Player, ThrowAction, ANGLE_STEP, CLEAR_FLASH_MS,
    FEEDBACK_MS, SPLIT_CHANCE_PERCENT, TOTAL_CELLS,
};

/// Snapshot handed to the commentary gateway after a resolved throw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryEvent {
    pub action: CommentaryAction,
    pub player: Player,
    pub board: [Cell; TOTAL_CELLS],
    pub score_x: u32,
    pub score_o: u32,
}

/// Coarse phase of the duel, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingThrow,
    Charging,
    Flying,
    RoundOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    match_state: MatchState,
    throw: ThrowState,
    /// Pre-roll for the NEXT throw's hoop type; re-rolled after each
    /// resolution. Frozen into the throw at release.
    next_split: bool,
    rng: SimpleRng,
    feedback: Option<Feedback>,
    feedback_timer_ms: u32,
    clearing: ArrayVec<usize, TOTAL_CELLS>,
    clear_timer_ms: u32,
    last_event: Option<CommentaryEvent>,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next_split = rng.chance(SPLIT_CHANCE_PERCENT);
        Self {
            match_state: MatchState::new(),
            throw: ThrowState::new(),
            next_split,
            rng,
            feedback: None,
            feedback_timer_ms: 0,
            clearing: ArrayVec::new(),
            clear_timer_ms: 0,
            last_event: None,
        }
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn throw(&self) -> &ThrowState {
        &self.throw
    }

    /// Hoop type the current player is holding for their next throw
    pub fn next_split(&self) -> bool {
        self.next_split
    }

    /// Transient banner, if one is showing
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Indices in their transient clear-flash window
    pub fn clearing(&self) -> &[usize] {
        &self.clearing
    }

    pub fn phase(&self) -> Phase {
        if self.match_state.is_over() {
            Phase::RoundOver
        } else if self.throw.flying() {
            Phase::Flying
        } else if self.throw.charging() {
            Phase::Charging
        } else {
            Phase::AwaitingThrow
        }
    }

    /// Apply a mapped input. Gated inputs are dropped silently and return
    /// false: charge-start while charging/flying/won, angle steps while
    /// flying/won, release while not charging, reset while no winner.
    pub fn apply_action(&mut self, action: ThrowAction) -> bool {
        match action {
            ThrowAction::ChargeStart => {
                if self.match_state.is_over() {
                    return false;
                }
                self.throw.start_charge()
            }
            ThrowAction::ChargeRelease => self.throw.release(self.next_split).is_some(),
            ThrowAction::AngleLeft => self.adjust_angle(-ANGLE_STEP),
            ThrowAction::AngleRight => self.adjust_angle(ANGLE_STEP),
            ThrowAction::Reset => {
                if !self.match_state.is_over() {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    fn adjust_angle(&mut self, delta: f32) -> bool {
        if self.match_state.is_over() {
            return false;
        }
        self.throw.adjust_angle(delta)
    }

    /// Advance all timers by the elapsed time, resolving the flight when it
    /// completes.
    pub fn tick(&mut self, elapsed_ms: u32) {
        // Expire the display windows before a resolution can restart them.
        if self.feedback_timer_ms > 0 {
            self.feedback_timer_ms = self.feedback_timer_ms.saturating_sub(elapsed_ms);
            if self.feedback_timer_ms == 0 {
                self.feedback = None;
            }
        }

        if self.clear_timer_ms > 0 {
            self.clear_timer_ms = self.clear_timer_ms.saturating_sub(elapsed_ms);
            if self.clear_timer_ms == 0 {
                self.clearing.clear();
            }
        }

        if self.throw.tick(elapsed_ms) {
            self.resolve_flight();
        }
    }

    /// Commit the in-flight throw: placement, scoring, score/winner update,
    /// turn flip, transient timers, commentary event, and the pre-roll for
    /// the next hoop.
    fn resolve_flight(&mut self) {
        let (power, angle, split) = (self.throw.power(), self.throw.angle(), self.throw.split());
        let cells = geometry::resolve(power, angle, split);
        let resolution = self.match_state.resolve_throw(&cells, split);

        self.feedback = Some(resolution.feedback);
        self.feedback_timer_ms = FEEDBACK_MS;
        if !resolution.cleared.is_empty() {
            self.clearing = resolution.cleared.clone();
            self.clear_timer_ms = CLEAR_FLASH_MS;
        }

        self.last_event = Some(CommentaryEvent {
            action: resolution.commentary,
            player: resolution.thrower,
            board: self.match_state.board_snapshot(),
            score_x: self.match_state.score(Player::X),
            score_o: self.match_state.score(Player::O),
        });

        // Pre-roll the next hoop only after the flight committed.
        self.next_split = self.rng.chance(SPLIT_CHANCE_PERCENT);
        self.throw.settle(geometry::landing_percent(power, angle));
    }

    /// Take and clear the last resolution's commentary event
    pub fn take_last_event(&mut self) -> Option<CommentaryEvent> {
        self.last_event.take()
    }

    /// Fresh match: empty board, X to throw, re-rolled hoop type
    pub fn reset(&mut self) {
        self.match_state.reset();
        self.throw.reset();
        self.next_split = self.rng.chance(SPLIT_CHANCE_PERCENT);
        self.feedback = None;
        self.feedback_timer_ms = 0;
        self.clearing.clear();
        self.clear_timer_ms = 0;
        self.last_event = None;
    }

    #[cfg(test)]
    pub fn set_next_split(&mut self, split: bool) {
        self.next_split = split;
    }

    #[cfg(test)]
    pub fn match_state_mut(&mut self) -> &mut MatchState {
        &mut self.match_state
    }
}
