use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typefall::core::{Dictionary, GameSnapshot, GameState};
use typefall::term::{FrameBuffer, GameView, Viewport, FRAME_HEIGHT};
use typefall::types::GRID_WIDTH;

const WORDS: [&str; 8] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

fn full_game() -> GameState {
    let dict = Dictionary::from_words(WORDS, 12).unwrap();
    let mut state = GameState::new(dict, 12345);
    for (i, word) in WORDS.iter().enumerate() {
        state.insert_word(word, i as u16 * 9, i as u16);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        b.iter_batched(
            full_game,
            |mut state| {
                state.tick();
                black_box(state.lives())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_type_word(c: &mut Criterion) {
    c.bench_function("type_word_hit", |b| {
        b.iter_batched(
            full_game,
            |mut state| {
                for ch in "foxtrot".chars() {
                    black_box(state.type_letter(ch));
                }
                state
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = full_game();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let snap = full_game().snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(GRID_WIDTH, FRAME_HEIGHT);
    let mut fb = FrameBuffer::new(GRID_WIDTH, FRAME_HEIGHT);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_type_word,
    bench_snapshot_into,
    bench_render_into
);
criterion_main!(benches);
