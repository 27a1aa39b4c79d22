//! Local randomness of a block, used to rank where data is hidden first.

use crate::media::image::Image;

/// Number of histogram buckets, one per value of the upper 7 bits of a color byte
pub const HISTOGRAM_BUCKETS: usize = 128;

/// Shannon entropy in bits of the square block at (`x`, `y`) with the given `side`,
/// averaged over all color channels.
///
/// Every channel is bucketed by `color >> 1`. The least significant bit is the one that
/// carries the hidden data, so it must not influence the score, otherwise unveiling would
/// rank the blocks differently than hiding did.
///
/// The block has to lie completely inside the image.
pub fn block_entropy(image: &Image, x: usize, y: usize, side: usize) -> f64 {
    debug_assert!(x + side <= image.width && y + side <= image.height);

    let channel = image.channel;
    let stride = image.stride();
    let start = y * stride + x * channel;
    let samples = (side * side) as f64;

    let mut entropy = 0.0;
    for c in 0..channel {
        let mut histogram = [0u32; HISTOGRAM_BUCKETS];
        for row in image.pixels[start..].chunks(stride).take(side) {
            for color in row[c..].iter().step_by(channel).take(side) {
                histogram[(color >> 1) as usize] += 1;
            }
        }

        for &count in histogram.iter().filter(|&&count| count != 0) {
            let p = count as f64 / samples;
            entropy += -p * p.log2();
        }
    }

    entropy / channel as f64
}
