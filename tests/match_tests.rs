//! Match tests - turn flow, scoring, steals, and the win condition

use hoop_duel::core::MatchState;
use hoop_duel::types::{CommentaryAction, Feedback, MatchOutcome, Player, SCORE_TO_WIN};

#[test]
fn test_turns_alternate_even_on_miss() {
    let mut ms = MatchState::new();
    assert_eq!(ms.current_player(), Player::X);

    let resolution = ms.resolve_throw(&[], false);
    assert_eq!(resolution.thrower, Player::X);
    assert_eq!(resolution.feedback, Feedback::Miss);
    assert_eq!(resolution.commentary, CommentaryAction::Miss);
    assert!(ms.board().is_empty());
    assert_eq!(ms.current_player(), Player::O);

    let resolution = ms.resolve_throw(&[4], false);
    assert_eq!(resolution.thrower, Player::O);
    assert_eq!(resolution.feedback, Feedback::Hit);
    assert_eq!(ms.current_player(), Player::X);
}

#[test]
fn test_steal_on_an_occupied_cell() {
    let mut ms = MatchState::new();
    ms.resolve_throw(&[5], false); // X takes 5
    let resolution = ms.resolve_throw(&[5], false); // O steals it

    assert_eq!(resolution.thrower, Player::O);
    assert!(resolution.stole);
    assert_eq!(resolution.feedback, Feedback::Steal);
    assert_eq!(resolution.commentary, CommentaryAction::Steal);
    assert_eq!(ms.board().get(5), Some(Player::O));
}

#[test]
fn test_steal_that_completes_a_line_reports_the_point() {
    let mut ms = MatchState::new();
    // X holds 7; O builds 4, 5, 6.
    ms.resolve_throw(&[7], false); // X
    ms.resolve_throw(&[4], false); // O
    ms.resolve_throw(&[0], false); // X
    ms.resolve_throw(&[5], false); // O
    ms.resolve_throw(&[1], false); // X
    ms.resolve_throw(&[6], false); // O
    ms.resolve_throw(&[12], false); // X

    // O steals 7 and completes row 1.
    let resolution = ms.resolve_throw(&[7], false);
    assert!(resolution.stole);
    assert_eq!(resolution.points, 1);
    assert_eq!(resolution.feedback, Feedback::Point(1));
    assert_eq!(resolution.commentary, CommentaryAction::Point);
    assert_eq!(resolution.cleared.as_slice(), &[4, 5, 6, 7]);
    assert_eq!(ms.score(Player::O), 1);

    // The cleared cells are empty, other rings survive.
    assert_eq!(ms.board().get(7), None);
    assert_eq!(ms.board().get(0), Some(Player::X));
    assert_eq!(ms.board().get(12), Some(Player::X));
}

#[test]
fn test_split_without_a_line_reports_double_hit() {
    let mut ms = MatchState::new();
    let resolution = ms.resolve_throw(&[9, 11], true);
    assert_eq!(resolution.feedback, Feedback::DoubleHit);
    assert_eq!(resolution.commentary, CommentaryAction::Split);
}

#[test]
fn test_stealing_split_reports_double_hit_over_steal() {
    let mut ms = MatchState::new();
    ms.resolve_throw(&[9], false); // X
    let resolution = ms.resolve_throw(&[9, 11], true); // O splits onto X's ring
    assert!(resolution.stole);
    assert_eq!(resolution.feedback, Feedback::DoubleHit);
    assert_eq!(resolution.commentary, CommentaryAction::Split);
}

fn score_row_for_x(ms: &mut MatchState) {
    // X fills row 0 across four turns; O misses in between.
    for idx in [0usize, 1, 2] {
        ms.resolve_throw(&[idx], false);
        ms.resolve_throw(&[], false);
    }
    ms.resolve_throw(&[3], false);
    if ms.winner().is_none() {
        ms.resolve_throw(&[], false);
    }
}

#[test]
fn test_reaching_the_target_score_wins_the_duel() {
    let mut ms = MatchState::new();

    for _ in 0..SCORE_TO_WIN - 1 {
        score_row_for_x(&mut ms);
    }
    assert_eq!(ms.score(Player::X), SCORE_TO_WIN - 1);
    assert!(ms.winner().is_none());

    // The winning line.
    ms.resolve_throw(&[0], false);
    ms.resolve_throw(&[], false);
    ms.resolve_throw(&[1], false);
    ms.resolve_throw(&[], false);
    ms.resolve_throw(&[2], false);
    ms.resolve_throw(&[], false);
    let resolution = ms.resolve_throw(&[3], false);

    assert_eq!(resolution.feedback, Feedback::Win);
    assert_eq!(resolution.commentary, CommentaryAction::Win);
    assert_eq!(ms.winner(), Some(Player::X));
    assert!(ms.is_over());
    assert_eq!(ms.outcome(), Some(MatchOutcome::Winner(Player::X)));
    assert_eq!(ms.score(Player::X), SCORE_TO_WIN);
}

#[test]
fn test_reset_starts_a_fresh_match() {
    let mut ms = MatchState::new();
    ms.resolve_throw(&[5], false);
    ms.resolve_throw(&[6], false);

    ms.reset();
    assert!(ms.board().is_empty());
    assert_eq!(ms.current_player(), Player::X);
    assert_eq!(ms.score(Player::X), 0);
    assert_eq!(ms.score(Player::O), 0);
    assert!(ms.winner().is_none());
}
