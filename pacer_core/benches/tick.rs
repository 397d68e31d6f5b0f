use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use pacer_core::{CorrectionHistory, Pacer};
use pacer_traits::ManualClock;

// Frame durations with a little jitter around 60 Hz
fn synth_frames(n: usize, seed: u32) -> Vec<u64> {
    // tiny PRNG
    let mut state = seed.max(1);
    let mut v = Vec::with_capacity(n);
    for _ in 0..n {
        let mut x = state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state = x;
        v.push(15_000 + u64::from(x % 3_000));
    }
    v
}

fn bench_tick(c: &mut Criterion) {
    let frames = synth_frames(1_000, 0xC0FFEE);
    c.bench_function("pacer_tick_1k_frames", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                (Pacer::with_clock(clock.clone()), clock)
            },
            |(mut pacer, clock)| {
                for &us in &frames {
                    clock.advance_us(us);
                    black_box(pacer.tick());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_history(c: &mut Criterion) {
    c.bench_function("correction_history_push_mean", |b| {
        let mut h = CorrectionHistory::<3>::new();
        let mut x = 0i64;
        b.iter(|| {
            x = x.wrapping_add(7_919);
            h.push(black_box(x % 50_000));
            black_box(h.mean())
        })
    });
}

criterion_group!(benches, bench_tick, bench_history);
criterion_main!(benches);
