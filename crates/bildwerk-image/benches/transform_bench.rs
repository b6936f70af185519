// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the bildwerk-image transform pipeline. Runs the
// full resize -> brightness -> circle chain on a synthetic camera-sized
// frame.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use bildwerk_core::types::TransformParams;
use bildwerk_image::{PixelBuffer, pipeline};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark the full pipeline on a 640x480 gradient frame: downscale to
/// 320 wide (aspect preserved), darken by 40, and annotate a circle. This is
/// the realistic per-apply cost for a captured webcam frame.
fn bench_full_pipeline(c: &mut Criterion) {
    let (width, height) = (640u32, 480u32);
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]);
    }
    let frame = PixelBuffer::from_rgb(img);

    let params = TransformParams {
        target_width: Some(320),
        brightness_delta: 40,
        circle_center_x: Some(160),
        circle_center_y: Some(120),
        circle_radius: Some(60),
        ..TransformParams::default()
    };

    c.bench_function("pipeline::apply (640x480 -> 320)", |b| {
        b.iter(|| {
            let out = pipeline::apply(black_box(&frame), black_box(&params)).unwrap();
            black_box(out);
        });
    });
}

/// Benchmark the brightness stage alone — the per-pixel HSV round-trip is
/// the pipeline's hot loop.
fn bench_brightness(c: &mut Criterion) {
    let frame = bildwerk_image::buffer::solid(640, 480, [180, 120, 60]);

    c.bench_function("adjust_brightness (640x480)", |b| {
        b.iter(|| {
            let out = bildwerk_image::brightness::adjust_brightness(black_box(&frame), 40);
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_full_pipeline, bench_brightness);
criterion_main!(benches);
