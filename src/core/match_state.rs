//! Match state - board ownership, scores, turn order, and the win condition
//!
//! The single driving event is `resolve_throw`: apply the placement, score
//! lines, update score and winner, pick the feedback category, and flip the
//! turn. The resolution commits atomically before the caller regains
//! control; nothing here awaits or spawns.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{
    Cell, CommentaryAction, Feedback, MatchOutcome, Player, SCORE_TO_WIN, TOTAL_CELLS,
};

/// Outcome of one resolved throw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowResolution {
    /// Player who threw (the turn has already advanced past them)
    pub thrower: Player,
    pub feedback: Feedback,
    pub points: u32,
    pub stole: bool,
    /// Indices cleared by scoring lines, for the transient clear flash
    pub cleared: ArrayVec<usize, TOTAL_CELLS>,
    /// Action category for the commentary gateway
    pub commentary: CommentaryAction,
}

/// Persistent match state: board, scores, current player, winner
#[derive(Debug, Clone)]
pub struct MatchState {
    board: Board,
    current: Player,
    winner: Option<Player>,
    score_x: u32,
    score_o: u32,
}

impl MatchState {
    /// Create a fresh match with player X to throw
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            winner: None,
            score_x: 0,
            score_o: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.score_x,
            Player::O => self.score_o,
        }
    }

    /// Terminal outcome, if any. `Draw` is reserved and never produced.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.winner.map(MatchOutcome::Winner)
    }

    /// Resolve the current player's throw onto the given cells.
    ///
    /// Turn advances to the other player unconditionally, hit or miss.
    /// `split` is the frozen per-throw hoop type (not the pending pre-roll).
    pub fn resolve_throw(&mut self, cells: &[usize], split: bool) -> ThrowResolution {
        debug_assert!(self.winner.is_none(), "throw resolved after match end");

        let thrower = self.current;
        self.current = thrower.other();

        if cells.is_empty() {
            return ThrowResolution {
                thrower,
                feedback: Feedback::Miss,
                points: 0,
                stole: false,
                cleared: ArrayVec::new(),
                commentary: CommentaryAction::Miss,
            };
        }

        let stole = self.board.apply_placement(thrower, cells);
        let score = self.board.score_lines(thrower);

        match thrower {
            Player::X => self.score_x += score.points,
            Player::O => self.score_o += score.points,
        }

        let won = self.winner.is_none() && self.score(thrower) >= SCORE_TO_WIN;
        if won {
            self.winner = Some(thrower);
        }

        // Banner priority; the STEAL banner only shows for standard throws
        // (a stealing twin hoop reads as a double hit).
        let feedback = if won {
            Feedback::Win
        } else if score.points > 0 {
            Feedback::Point(score.points)
        } else if split {
            Feedback::DoubleHit
        } else if stole {
            Feedback::Steal
        } else {
            Feedback::Hit
        };

        let commentary = if won {
            CommentaryAction::Win
        } else if score.points > 0 {
            CommentaryAction::Point
        } else if split {
            CommentaryAction::Split
        } else if stole {
            CommentaryAction::Steal
        } else {
            CommentaryAction::Throw
        };

        ThrowResolution {
            thrower,
            feedback,
            points: score.points,
            stole,
            cleared: score.cleared,
            commentary,
        }
    }

    /// Start a fresh match: empty board, zero scores, X to throw
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot of the cells for the commentary gateway
    pub fn board_snapshot(&self) -> [Cell; TOTAL_CELLS] {
        *self.board.cells()
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_score(&mut self, player: Player, score: u32) {
        match player {
            Player::X => self.score_x = score,
            Player::O => self.score_o = score,
        }
    }

    #[cfg(test)]
    pub fn set_current_player(&mut self, player: Player) {
        self.current = player;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
