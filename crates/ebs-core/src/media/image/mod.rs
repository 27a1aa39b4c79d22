pub mod io;
pub mod lsb_codec;

pub use lsb_codec::{embed_block, extract_block};

/// Pixels are hashed in chunks of this size so the low bits can be masked on a stack buffer
const HASH_CHUNK: usize = 4096;

/// A raster image as seen by the codec.
///
/// The pixel buffer is row-major with interleaved channels, so one row spans
/// `width * channel` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub channel: usize,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn new(width: usize, height: usize, channel: usize, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channel,
            pixels,
        }
    }

    /// bytes per row
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.channel
    }

    /// true if no dimension is zero and the buffer holds exactly `width * height * channel` bytes
    pub fn is_valid(&self) -> bool {
        self.width != 0
            && self.height != 0
            && self.channel != 0
            && self
                .width
                .checked_mul(self.height)
                .and_then(|n| n.checked_mul(self.channel))
                .is_some_and(|len| len == self.pixels.len())
    }

    /// position of the color channel `channel` of pixel (`x`, `y`) inside `pixels`
    pub fn offset(&self, x: usize, y: usize, channel: usize) -> Option<usize> {
        if x >= self.width || y >= self.height || channel >= self.channel {
            return None;
        }
        let offset = y * self.stride() + x * self.channel + channel;

        (offset < self.pixels.len()).then_some(offset)
    }

    pub fn color(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        self.offset(x, y, channel).map(|i| self.pixels[i])
    }

    pub fn color_mut(&mut self, x: usize, y: usize, channel: usize) -> Option<&mut u8> {
        self.offset(x, y, channel).map(|i| &mut self.pixels[i])
    }

    /// BLAKE3 over the pixels with the least significant bit of every byte cleared.
    ///
    /// Hiding data only rewrites those bits, so the hash is the same before and after.
    pub fn content_hash(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        let mut masked = [0u8; HASH_CHUNK];
        for chunk in self.pixels.chunks(HASH_CHUNK) {
            for (m, c) in masked.iter_mut().zip(chunk) {
                *m = c & (u8::MAX - 1);
            }
            hasher.update(&masked[..chunk.len()]);
        }

        *hasher.finalize().as_bytes()
    }
}
