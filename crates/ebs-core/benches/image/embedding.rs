use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ebs_core::{embed, BlockSize, Image};

fn carrier_images() -> Vec<Image> {
    (0..4u32)
        .map(|i| {
            let pixels = (0..512 * 384 * 3u32)
                .map(|p| (p.wrapping_mul(2654435761).rotate_left(i + 5) >> 24) as u8)
                .collect();
            Image::new(512, 384, 3, pixels)
        })
        .collect()
}

pub fn image_embedding(c: &mut Criterion) {
    let secret_message = vec![0x5a; 16 * 1024];
    let mut group = c.benchmark_group("Image Embedding");

    for side in [8u64, 16, 32] {
        let block_size = BlockSize::new(side).expect("valid block size");
        group.bench_with_input(BenchmarkId::from_parameter(side), &block_size, |b, &bs| {
            let mut images = carrier_images();
            b.iter(|| {
                embed(&mut images, &secret_message, bs).expect("Cannot hide secret message");
            })
        });
    }
    group.finish();
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
