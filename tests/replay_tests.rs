//! Replay determinism and property tests.
//!
//! Games are generated by the seeded `Bowler`, so every generated roll
//! sequence is legal and bowls a complete game.

use proptest::prelude::*;
use tenpin::{Bowler, BowlerConfig, Game, LaneConfig, RollLog};

fn bowler(strike_rate: f64) -> Bowler {
    Bowler::new(BowlerConfig::new().with_strike_rate(strike_rate))
}

#[test]
fn test_replay_same_score() {
    let game = bowler(0.3).play_game(2024).unwrap();
    let replayed = Game::replay(LaneConfig::default(), game.rolls()).unwrap();

    assert_eq!(replayed.score(), game.score());
    assert_eq!(replayed, game);
}

#[test]
fn test_roll_log_json() {
    let game = bowler(0.5).play_game(11).unwrap();
    let log = RollLog::from(&game);

    let json = serde_json::to_string(&log).unwrap();
    let decoded: RollLog = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, log);
    assert_eq!(decoded.replay().unwrap().score(), game.score());
}

#[test]
fn test_partial_game_replays() {
    let mut game = Game::new();
    for pins in [10, 4, 6, 3] {
        game.roll(pins).unwrap();
    }

    let restored = RollLog::from_game(&game).replay().unwrap();
    assert_eq!(restored, game);
    assert!(!restored.is_finished());
    assert_eq!(restored.frame_number(), 3);
}

proptest! {
    /// Property: simulated games always finish with a valid score.
    #[test]
    fn prop_simulated_games_score(seed in any::<u64>(), strike_rate in 0.0f64..=1.0) {
        let game = bowler(strike_rate).play_game(seed).unwrap();

        prop_assert!(game.is_finished());
        let score = game.score().unwrap();
        prop_assert!(score <= game.config().perfect_score());

        let breakdown = game.breakdown().unwrap();
        prop_assert_eq!(breakdown.len(), 10);
        prop_assert_eq!(breakdown.iter().sum::<u32>(), score);
        prop_assert!(breakdown.iter().all(|&frame| frame <= 30));
    }

    /// Property: replaying the rolls through a fresh game gives the same score.
    #[test]
    fn prop_replay_deterministic(seed in any::<u64>()) {
        let game = bowler(0.25).play_game(seed).unwrap();

        let bytes = RollLog::from_game(&game).to_bytes().unwrap();
        let restored = RollLog::from_bytes(&bytes).unwrap().replay().unwrap();

        prop_assert_eq!(restored.score(), game.score());
        prop_assert_eq!(restored.rolls(), game.rolls());
    }

    /// Property: an out-of-range roll never changes the game.
    #[test]
    fn prop_out_of_range_rejected(
        seed in any::<u64>(),
        cut in 0usize..21,
        pins in prop_oneof![i32::MIN..0, 11..=i32::MAX],
    ) {
        let full = bowler(0.2).play_game(seed).unwrap().rolls();
        let cut = cut.min(full.len());
        let mut game = Game::replay(LaneConfig::default(), full[..cut].iter().copied()).unwrap();
        let before = game.clone();

        let err = game.roll(pins).unwrap_err();
        prop_assert!(err.is_invalid_roll());
        prop_assert_eq!(game, before);
    }

    /// Property: arbitrary in-range rolls either apply or leave the game untouched.
    #[test]
    fn prop_rejection_is_atomic(rolls in prop::collection::vec(0i32..=10, 0..30)) {
        let mut game = Game::new();
        for pins in rolls {
            let before = game.clone();
            if game.roll(pins).is_err() {
                prop_assert_eq!(&game, &before);
            }
            prop_assert!(game.completed_frames().len() <= 9);
        }
    }

    /// Property: the running score never exceeds the final score.
    #[test]
    fn prop_running_score_bounded(seed in any::<u64>()) {
        let full = bowler(0.3).play_game(seed).unwrap();
        let final_score = full.score().unwrap();

        let mut game = Game::new();
        for pins in full.rolls() {
            game.roll(i32::from(pins)).unwrap();
            if let Some(running) = game.current_score().value() {
                prop_assert!(running <= final_score);
            }
        }
    }
}
