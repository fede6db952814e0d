//! Benchmarks for colour replacement.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgb, RgbImage};

use colornodes::{replace_colour, Colour, ImageReplaceColor, ImageTensor};

fn noise(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        let v = x.wrapping_mul(2654435761).wrapping_add(y.wrapping_mul(40503));
        Rgb([(v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8])
    })
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");

    for size in [64u32, 256, 1024] {
        let image = noise(size);

        group.bench_with_input(BenchmarkId::new("raster", size), &image, |b, image| {
            b.iter(|| {
                replace_colour(
                    black_box(image),
                    Colour::rgb(128, 64, 32),
                    Colour::WHITE,
                    black_box(10),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_node_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("node");

    // Includes the tensor <-> raster conversion on both sides
    let tensor = ImageTensor::from_rgb_image(&noise(256));
    group.bench_function("image_replace_color_256", |b| {
        b.iter(|| {
            ImageReplaceColor
                .apply(black_box(&tensor), Colour::BLACK, Colour::RED, 10)
                .unwrap()
        })
    });

    group.bench_function("tensor_round_trip_256", |b| {
        b.iter(|| ImageTensor::from_frames(&black_box(&tensor).frames().unwrap()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_replace, bench_node_boundary);
criterion_main!(benches);
