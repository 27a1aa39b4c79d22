use crate::error::EbsError;
use crate::result::Result;

/// Block side used when nothing else is configured
pub const DEFAULT_BLOCK_SIZE: u8 = 16;

/// Side length of the square blocks the images are tiled into.
///
/// A valid side is a non zero multiple of 4 below 256. The same value has to be used
/// for hiding and unveiling, it is not stored anywhere inside the images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockSize(u8);

impl BlockSize {
    pub fn new(side: u64) -> Result<Self> {
        if side == 0 || side % 4 != 0 || side >= 256 {
            return Err(EbsError::BadBlockSize(side));
        }

        Ok(Self(side as u8))
    }

    /// the side length in pixels
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self(DEFAULT_BLOCK_SIZE)
    }
}

impl TryFrom<u64> for BlockSize {
    type Error = EbsError;

    fn try_from(side: u64) -> Result<Self> {
        Self::new(side)
    }
}

impl From<BlockSize> for u64 {
    fn from(block_size: BlockSize) -> Self {
        block_size.0 as u64
    }
}

/// Codec configuration shared by hiding and unveiling
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Side length of the blocks that get scored and filled.
    ///
    /// Smaller blocks follow the image noise more closely, larger blocks waste less
    /// capacity on the reserved length header.
    pub block_size: BlockSize,
}

impl CodecOptions {
    pub fn with_block_size(block_size: BlockSize) -> Self {
        Self { block_size }
    }
}
