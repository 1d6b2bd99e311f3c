use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pigmix::{mix_and_compare, mix_colors, Color, ColorMix};

fn recipe(entries: usize) -> Vec<ColorMix> {
    let proportion = 100.0 / entries as f64;
    (0..entries)
        .map(|i| {
            let channel = (i * 255 / entries) as u8;
            ColorMix::new(Color::from_rgb(channel, 255 - channel, 128), proportion)
        })
        .collect()
}

fn bench_mix_colors(c: &mut Criterion) {
    let recipe = recipe(10);
    c.bench_function("mix_colors_10_entries", |b| {
        b.iter(|| mix_colors(black_box(&recipe)))
    });
}

fn bench_mix_and_compare(c: &mut Criterion) {
    let candidate = recipe(10);
    let mut target = recipe(10);
    target.reverse();

    c.bench_function("mix_and_compare_10_entries", |b| {
        b.iter(|| mix_and_compare(black_box(&candidate), black_box(&target)))
    });
}

criterion_group!(benches, bench_mix_colors, bench_mix_and_compare);
criterion_main!(benches);
