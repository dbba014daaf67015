use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hough_core::{find_peaks, HoughParams, HoughTransform, ImageView};

const SIZES: [(usize, usize); 3] = [(320, 240), (640, 480), (1280, 720)];

/// Sparse edge map: a grid of lines every 40 px plus both diagonals.
fn edge_map(width: usize, height: usize) -> Vec<u8> {
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let on_grid = x % 40 == 0 || y % 40 == 0;
            let on_diag = x * height == y * width || x * height == (height - 1 - y) * width;
            if on_grid || on_diag {
                data[y * width + x] = 255;
            }
        }
    }
    data
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Accumulate");
    group.sample_size(20);
    for &(width, height) in SIZES.iter() {
        let data = edge_map(width, height);
        let view = ImageView::from_u8_slice(width, height, &data).expect("valid view");
        let mut hough = HoughTransform::new(&HoughParams::default());
        let size_str = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("init", &size_str), &size_str, |b, _| {
            b.iter(|| hough.init(black_box(&view)))
        });
    }
    group.finish();
}

fn bench_peaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Peaks");
    for &(width, height) in SIZES.iter() {
        let data = edge_map(width, height);
        let view = ImageView::from_u8_slice(width, height, &data).expect("valid view");
        let mut hough = HoughTransform::new(&HoughParams::default());
        hough.init(&view);
        let size_str = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("find_peaks", &size_str), &size_str, |b, _| {
            b.iter(|| find_peaks(black_box(hough.accumulator()), black_box(100)))
        });
        group.bench_with_input(BenchmarkId::new("lines", &size_str), &size_str, |b, _| {
            b.iter(|| hough.lines(black_box(100)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_accumulate, bench_peaks);
criterion_main!(benches);
