use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::connect::{ConnectEngine, Symbol};

fn play_diagonal_game(board_size: usize, win_length: usize) -> usize {
    let mut engine = ConnectEngine::with_win_length(board_size, win_length).unwrap();
    let offset = ((board_size - win_length) / 2) as i64;

    for step in 0..win_length as i64 {
        engine.place_marker(Symbol::X, offset + step, offset + step).unwrap();
        if step + 1 < win_length as i64 {
            engine.place_marker(Symbol::O, offset + step, offset + step + 1).unwrap();
        }
    }
    engine.get_win_conditions().len()
}

fn bench_scattered_placements(board_size: usize) {
    let mut engine = ConnectEngine::new(board_size).unwrap();
    let stride = (board_size / 16).max(1) as i64;
    for i in 0..16i64 {
        let coordinate = (i * stride) % board_size as i64;
        engine.place_marker(Symbol::X, coordinate, 0).unwrap();
    }
}

fn placement_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("win_length_3_board_3", |b| {
        b.iter(|| play_diagonal_game(black_box(3), 3))
    });

    group.bench_function("win_length_3_board_1m", |b| {
        b.iter(|| play_diagonal_game(black_box(1_000_000), 3))
    });

    group.bench_function("win_length_16_board_1m", |b| {
        b.iter(|| play_diagonal_game(black_box(1_000_000), 16))
    });

    group.bench_function("scattered_board_1m", |b| {
        b.iter(|| bench_scattered_placements(black_box(1_000_000)))
    });

    group.finish();
}

criterion_group!(benches, placement_bench);
criterion_main!(benches);
