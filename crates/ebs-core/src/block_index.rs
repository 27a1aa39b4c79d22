//! Tiling of one image into square blocks, ranked by their entropy.

use log::trace;

use crate::entropy::block_entropy;
use crate::error::EbsError;
use crate::media::image::Image;
use crate::media::BlockSize;
use crate::result::Result;

/// A square tile of an image, addressed by its top left pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) entropy: f64,
}

impl Block {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }
}

/// All whole blocks of one image, highest entropy first.
///
/// Rows and columns that do not fill a whole block are not part of the index.
/// Blocks with equal entropy keep their row-major scan order.
#[derive(Debug, Clone)]
pub struct BlockIndex {
    side: usize,
    block_capacity: usize,
    blocks: Vec<Block>,
}

impl BlockIndex {
    /// # Errors
    /// - [`EbsError::InvalidImage`] (index 0) if `image` is not valid
    /// - [`EbsError::OutOfMemory`] if the block list cannot be allocated
    pub fn build(image: &Image, block_size: BlockSize) -> Result<Self> {
        if !image.is_valid() {
            return Err(EbsError::InvalidImage { index: 0 });
        }

        let side = block_size.get();
        let columns = image.width / side;
        let rows = image.height / side;

        let mut blocks = Vec::new();
        blocks.try_reserve_exact(columns * rows)?;
        for y in (0..rows).map(|r| r * side) {
            for x in (0..columns).map(|c| c * side) {
                blocks.push(Block {
                    x,
                    y,
                    entropy: block_entropy(image, x, y, side),
                });
            }
        }
        // stable, so equal scores stay in scan order
        blocks.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
        trace!(
            "indexed {}x{} blocks of side {side} on a {}x{}x{} image",
            columns,
            rows,
            image.width,
            image.height,
            image.channel
        );

        Ok(Self {
            side,
            block_capacity: side * side * image.channel / 8,
            blocks,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// bytes one block can carry, one bit per color channel byte
    pub fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    /// bytes all blocks of the image can carry together
    pub fn total_capacity(&self) -> u64 {
        self.blocks.len() as u64 * self.block_capacity as u64
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&Block> {
        self.blocks.get(rank)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_noise_image, ENTROPY_FIXTURE};

    fn block_size(side: u64) -> BlockSize {
        BlockSize::new(side).unwrap()
    }

    #[test]
    fn should_tile_19x19_with_2_channels() {
        let img = Image::new(19, 19, 2, vec![0; 19 * 19 * 2]);

        let index = BlockIndex::build(&img, block_size(4)).unwrap();
        assert_eq!(index.len(), 16);
        assert_eq!(index.block_capacity(), 4);
        assert_eq!(index.total_capacity(), 64);

        let index = BlockIndex::build(&img, block_size(8)).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(index.block_capacity(), 16);
    }

    #[test]
    fn should_derive_capacity_from_the_channel_count() {
        let img = Image::new(19, 19, 1, vec![0; 19 * 19]);
        let index = BlockIndex::build(&img, block_size(4)).unwrap();
        assert_eq!(index.len(), 16);
        assert_eq!(index.block_capacity(), 2);

        let img = Image::new(12, 12, 2, vec![0; 12 * 12 * 2]);
        let index = BlockIndex::build(&img, block_size(4)).unwrap();
        assert_eq!(index.len(), 9);
        assert_eq!(index.block_capacity(), 4);
    }

    #[test]
    fn should_be_empty_for_images_smaller_than_a_block() {
        let img = Image::new(7, 30, 3, vec![0; 7 * 30 * 3]);
        let index = BlockIndex::build(&img, block_size(8)).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.total_capacity(), 0);
    }

    #[test]
    fn should_sort_descending_by_entropy() {
        let img = prepare_noise_image(64, 48, 3, 7);
        let index = BlockIndex::build(&img, block_size(8)).unwrap();
        assert_eq!(index.len(), 48);
        for pair in index.blocks().windows(2) {
            assert!(pair[0].entropy() >= pair[1].entropy());
        }
    }

    #[test]
    fn should_keep_scan_order_for_equal_entropy() {
        let img = Image::new(12, 8, 1, vec![9; 12 * 8]);
        let index = BlockIndex::build(&img, block_size(4)).unwrap();
        let positions: Vec<_> = index.blocks().iter().map(|b| (b.x(), b.y())).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (4, 0), (8, 0), (0, 4), (4, 4), (8, 4)]
        );
    }

    #[test]
    fn should_rank_the_fixture_blocks() {
        let img = Image::new(8, 8, 1, ENTROPY_FIXTURE.to_vec());
        let index = BlockIndex::build(&img, block_size(4)).unwrap();
        let fixture_block = index
            .blocks()
            .iter()
            .find(|b| b.x() == 4 && b.y() == 4)
            .expect("block at (4, 4) is missing");
        assert_eq!(fixture_block.entropy(), 3.875);
    }

    #[test]
    fn should_reject_invalid_images() {
        let img = Image::new(8, 8, 1, vec![0; 10]);
        assert!(matches!(
            BlockIndex::build(&img, block_size(4)),
            Err(EbsError::InvalidImage { index: 0 })
        ));
    }
}
