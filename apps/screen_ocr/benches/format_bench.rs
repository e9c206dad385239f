use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use screen_ocr::core::selection::{Action, Model};
use screen_ocr::text::{PASSES, format_fragments, format_text, join_fragments};

fn sample_fragments(count: usize) -> Vec<String> {
    let base = [
        "本日は 晴天なり。",
        "The quick brown fox ,",
        "jumps over the lazy dog !",
        "東京都 千代田区 1-1",
        "お問い合わせは 、 こちら まで ．",
    ];
    (0..count).map(|i| base[i % base.len()].to_string()).collect()
}

fn bench_format_fragments(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_fragments");

    for count in [1, 10, 100, 1000] {
        let fragments = sample_fragments(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &fragments, |b, f| {
            b.iter(|| black_box(format_fragments(black_box(f))));
        });
    }

    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("passes");
    let joined = join_fragments(sample_fragments(100));

    for pass in PASSES.iter() {
        group.bench_function(pass.name, |b| {
            b.iter(|| black_box((pass.apply)(black_box(&joined))));
        });
    }

    group.bench_function("all", |b| {
        b.iter(|| black_box(format_text(black_box(&joined))));
    });

    group.finish();
}

fn bench_selection_drag(c: &mut Criterion) {
    c.bench_function("selection_drag_100_moves", |b| {
        b.iter(|| {
            let mut model = Model::default();
            model.reduce(Action::Begin);
            model.reduce(Action::PointerDown { x: 10, y: 10 });
            for i in 0..100 {
                model.reduce(Action::PointerMove {
                    x: black_box(10 + i * 3),
                    y: black_box(10 + i * 2),
                });
            }
            black_box(model.reduce(Action::PointerUp { x: 310, y: 210 }))
        });
    });
}

criterion_group!(benches, bench_format_fragments, bench_passes, bench_selection_drag);
criterion_main!(benches);
