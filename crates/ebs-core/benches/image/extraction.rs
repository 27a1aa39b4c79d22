use criterion::{criterion_group, criterion_main, Criterion};
use ebs_core::{embed, extract, BlockSize, Image};

pub fn image_extraction(c: &mut Criterion) {
    let block_size = BlockSize::default();
    let mut images: Vec<Image> = (0..4u32)
        .map(|i| {
            let pixels = (0..512 * 384 * 3u32)
                .map(|p| (p.wrapping_mul(2654435761).rotate_left(i + 5) >> 24) as u8)
                .collect();
            Image::new(512, 384, 3, pixels)
        })
        .collect();
    embed(&mut images, &[0x5a; 16 * 1024], block_size).expect("Cannot hide secret message");

    c.bench_function("Image Extraction", |b| {
        b.iter(|| extract(&images, block_size).expect("Cannot unveil secret message"))
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
