use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use img_recompress::color::{normalize_color_mode, Background};
use img_recompress::processing::{encode_jpeg, resize_image, CompressionOptions};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, (x % 2 * 255) as u8])
    }))
}

fn bench_compression_options_creation(c: &mut Criterion) {
    c.bench_function("compression_options_creation", |b| {
        b.iter(|| {
            CompressionOptions::new(
                black_box(Some(1200)),
                black_box(Some(75)),
                black_box(Some(Background::WHITE)),
            )
        })
    });
}

fn bench_flatten_alpha(c: &mut Criterion) {
    let img = create_test_image(1920, 1080);

    c.bench_function("flatten_alpha_1080p", |b| {
        b.iter(|| normalize_color_mode(black_box(img.clone()), Background::WHITE))
    });
}

fn bench_image_resizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_resizing");
    let options = CompressionOptions::default();

    for (width, height) in [(1600, 1200), (1920, 1080), (3840, 2160)] {
        let img = normalize_color_mode(create_test_image(width, height), Background::WHITE);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &img,
            |b, img| {
                b.iter(|| {
                    let mut img = img.clone();
                    resize_image(black_box(&mut img), &options);
                    img
                })
            },
        );
    }

    group.finish();
}

fn bench_jpeg_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("jpeg_encoding");
    let img = normalize_color_mode(create_test_image(1200, 800), Background::WHITE);

    for quality in [50u8, 75, 90] {
        group.bench_with_input(BenchmarkId::from_parameter(quality), &quality, |b, &q| {
            b.iter(|| encode_jpeg(black_box(&img), q))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_options_creation,
    bench_flatten_alpha,
    bench_image_resizing,
    bench_jpeg_encoding
);
criterion_main!(benches);
