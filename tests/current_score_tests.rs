//! Running score integration tests.

use tenpin::{Game, RunningScore};

/// Running score observed after each roll.
fn scores_after_each(rolls: &[i32]) -> Vec<RunningScore> {
    let mut game = Game::new();
    rolls
        .iter()
        .map(|&pins| {
            game.roll(pins).unwrap();
            game.current_score()
        })
        .collect()
}

#[test]
fn test_before_any_roll() {
    assert_eq!(Game::new().current_score(), RunningScore::Score(0));
}

#[test]
fn test_after_open_frame_of_zeros() {
    assert_eq!(scores_after_each(&[0, 0]).last(), Some(&RunningScore::Score(0)));
}

#[test]
fn test_after_open_frame() {
    assert_eq!(scores_after_each(&[2, 2]).last(), Some(&RunningScore::Score(4)));
}

#[test]
fn test_with_strikes_and_spares() {
    assert_eq!(
        scores_after_each(&[5, 5, 10, 2, 4]).last(),
        Some(&RunningScore::Score(42))
    );
}

#[test]
fn test_single_strike_pending() {
    assert_eq!(scores_after_each(&[10]), vec![RunningScore::Pending]);
}

#[test]
fn test_strike_resolves_after_two_rolls() {
    assert_eq!(
        scores_after_each(&[10, 5, 3]),
        vec![RunningScore::Pending, RunningScore::Pending, RunningScore::Score(26)]
    );
}

#[test]
fn test_half_bowled_frame_pending() {
    assert_eq!(
        scores_after_each(&[3, 6, 3, 6]),
        vec![
            RunningScore::Pending,
            RunningScore::Score(9),
            RunningScore::Pending,
            RunningScore::Score(18),
        ]
    );
}

#[test]
fn test_spare_pending_until_next_roll() {
    let scores = scores_after_each(&[6, 4]);
    assert_eq!(scores.last(), Some(&RunningScore::Pending));
}

#[test]
fn test_double_pending() {
    assert_eq!(
        scores_after_each(&[10, 10]),
        vec![RunningScore::Pending, RunningScore::Pending]
    );
}

#[test]
fn test_pending_renders_marker() {
    let mut game = Game::new();
    game.roll(10).unwrap();
    assert_eq!(game.current_score().to_string(), "xx");
    assert_eq!(game.current_score().value(), None);
}

#[test]
fn test_final_frame_not_included() {
    // Nine frames of 3-6, then the final frame in progress
    let mut rolls: Vec<i32> = (0..18).map(|i| if i % 2 == 0 { 3 } else { 6 }).collect();
    rolls.extend([10, 10]);
    assert_eq!(scores_after_each(&rolls).last(), Some(&RunningScore::Score(81)));
}

#[test]
fn test_never_fails_after_game_over() {
    let mut game = Game::new();
    for _ in 0..12 {
        game.roll(10).unwrap();
    }
    assert!(game.roll(1).is_err());
    assert!(!game.current_score().is_pending());
}
