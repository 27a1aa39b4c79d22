//! Block indices of a whole image collection in canonical order, and the capacity they offer.

use log::debug;

use crate::allocator::Allocator;
use crate::block_index::BlockIndex;
use crate::error::EbsError;
use crate::media::image::Image;
use crate::media::BlockSize;
use crate::result::Result;

/// Bytes of the little-endian length header
pub const HEADER_LEN: usize = 8;

/// Sort key that orders a collection the same way no matter how it was passed in
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalKey {
    width: usize,
    height: usize,
    channel: usize,
    content_hash: [u8; 32],
}

impl CanonicalKey {
    fn of(image: &Image) -> Self {
        Self {
            width: image.width,
            height: image.height,
            channel: image.channel,
            content_hash: image.content_hash(),
        }
    }
}

/// One image of the collection together with its ranked blocks
#[derive(Debug)]
pub(crate) struct ComputedImage {
    /// position of the image in the slice the caller passed in
    pub(crate) index: usize,
    pub(crate) blocks: BlockIndex,
}

/// The block that carries the length header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock {
    /// position of the carrying image in the slice the caller passed in
    pub image: usize,
    pub capacity: usize,
}

impl HeaderBlock {
    /// bytes of the length that fit into the header block
    pub fn len(&self) -> usize {
        self.capacity.min(HEADER_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// the biggest message length the header block can express
    pub fn max_message_len(&self) -> u64 {
        match self.len() {
            HEADER_LEN => u64::MAX,
            n => (1u64 << (8 * n)) - 1,
        }
    }
}

/// Everything hiding and unveiling need to agree on the block order.
///
/// Built once per call from the images and the block size, it never holds on to the
/// images themselves, only to positions inside the caller's slice.
#[derive(Debug)]
pub struct CapacityModel {
    block_size: BlockSize,
    pub(crate) images: Vec<ComputedImage>,
    header: Option<HeaderBlock>,
}

impl CapacityModel {
    /// # Errors
    /// - [`EbsError::InvalidImage`] for the first image with a zero dimension or a pixel
    ///   buffer that does not match its dimensions
    /// - [`EbsError::OutOfMemory`] if any index cannot be allocated
    pub fn build(images: &[Image], block_size: BlockSize) -> Result<Self> {
        if let Some(index) = images.iter().position(|image| !image.is_valid()) {
            return Err(EbsError::InvalidImage { index });
        }

        let mut order = Vec::new();
        order.try_reserve_exact(images.len())?;
        order.extend(
            images
                .iter()
                .enumerate()
                .map(|(index, image)| (CanonicalKey::of(image), index)),
        );
        // stable, so images with equal keys keep the order of the caller
        order.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut computed = Vec::new();
        computed.try_reserve_exact(order.len())?;
        for (_, index) in order {
            computed.push(ComputedImage {
                index,
                blocks: BlockIndex::build(&images[index], block_size)?,
            });
        }

        let mut model = Self {
            block_size,
            images: computed,
            header: None,
        };
        let header = Allocator::new(&model)
            .select_next()
            .map(|selection| HeaderBlock {
                image: selection.image,
                capacity: selection.capacity,
            });
        model.header = header;
        debug!(
            "capacity model for {} images with block size {}: {} bytes usable",
            model.images.len(),
            block_size.get(),
            model.usable_capacity()
        );

        Ok(model)
    }

    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// caller positions of the images, in canonical order
    pub fn canonical_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.images.iter().map(|c| c.index)
    }

    /// the block index of the image at position `index` of the caller's slice
    pub fn block_index(&self, index: usize) -> Option<&BlockIndex> {
        self.images
            .iter()
            .find(|c| c.index == index)
            .map(|c| &c.blocks)
    }

    /// `None` if the collection does not contain a single whole block
    pub fn header(&self) -> Option<HeaderBlock> {
        self.header
    }

    /// bytes all blocks of all images can carry, header included
    pub fn total_capacity(&self) -> u64 {
        self.images.iter().map(|c| c.blocks.total_capacity()).sum()
    }

    /// bytes left for the message once the header block is reserved
    pub fn usable_capacity(&self) -> u64 {
        let Some(header) = self.header else {
            return 0;
        };

        (self.total_capacity() - header.capacity as u64).min(header.max_message_len())
    }
}
