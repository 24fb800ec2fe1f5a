use criterion::{criterion_group, criterion_main, Criterion, black_box};
use hotseat::perft::perft;
use hotseat::{Board, Side};

fn bench_perft(c: &mut Criterion) {
    let b = Board::initial();
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);
    for depth in [2u32, 3] {
        group.bench_function(format!("perft_startpos_d{depth}"), |ben| {
            ben.iter(|| black_box(perft(black_box(&b), Side::White, depth)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
