use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tenpin::{Bowler, BowlerConfig, Game, LaneConfig};

fn bowl_and_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("bowl_and_score");
    for strike_rate in [0.0, 0.3, 1.0] {
        let bowler = Bowler::new(BowlerConfig::new().with_strike_rate(strike_rate));
        let rolls = bowler.play_game(42).expect("simulated game").rolls();

        group.bench_function(BenchmarkId::new("replay", strike_rate), |b| {
            b.iter(|| {
                let game = Game::replay(LaneConfig::default(), rolls.iter().copied()).expect("legal rolls");
                black_box(game.score())
            })
        });

        group.bench_function(BenchmarkId::new("current_score_each_roll", strike_rate), |b| {
            b.iter(|| {
                let mut game = Game::new();
                for &pins in &rolls {
                    game.roll(i32::from(pins)).expect("legal roll");
                    black_box(game.current_score());
                }
            })
        });
    }
    group.finish();
}

fn simulate(c: &mut Criterion) {
    let bowler = Bowler::default();
    c.bench_function("simulate_100_games", |b| {
        b.iter(|| black_box(bowler.play_games(100, 7).expect("simulated games")))
    });
}

criterion_group!(benches, bowl_and_score, simulate);
criterion_main!(benches);
