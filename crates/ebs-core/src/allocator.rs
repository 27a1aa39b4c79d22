//! Greedy walk over the blocks of all images in strict global entropy order.

use log::trace;

use crate::block_index::Block;
use crate::capacity::CapacityModel;

/// One block handed out by the [`Allocator`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// position of the image in the slice the caller passed in
    pub image: usize,
    pub block: Block,
    /// bytes the block can carry
    pub capacity: usize,
}

/// Hands out the blocks of a [`CapacityModel`] one at a time, highest entropy first.
///
/// Each image keeps a cursor into its own (already sorted) block index. A step compares
/// the next unconsumed block of every image that has one left and takes the strict
/// maximum. On equal entropy the image that comes first in canonical order wins.
///
/// Hiding and unveiling have to walk the blocks in exactly the same sequence,
/// so the allocator is strictly sequential.
#[derive(Debug)]
pub struct Allocator<'m> {
    model: &'m CapacityModel,
    cursors: Vec<usize>,
}

impl<'m> Allocator<'m> {
    pub fn new(model: &'m CapacityModel) -> Self {
        Self {
            model,
            cursors: vec![0; model.image_count()],
        }
    }

    /// consumed blocks per image, in canonical order
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }

    /// canonical slot of the image whose next block would be selected
    fn peek(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, (computed, &cursor)) in self.model.images.iter().zip(&self.cursors).enumerate() {
            // exhausted images do not take part at all
            let Some(block) = computed.blocks.get(cursor) else {
                continue;
            };
            if best.map_or(true, |(_, entropy)| block.entropy > entropy) {
                best = Some((slot, block.entropy));
            }
        }

        best.map(|(slot, _)| slot)
    }

    /// selects the next block and advances the cursor of its image,
    /// `None` once every block of every image was handed out
    pub fn select_next(&mut self) -> Option<Selection> {
        let slot = self.peek()?;
        let computed = &self.model.images[slot];
        let cursor = &mut self.cursors[slot];
        let block = *computed.blocks.get(*cursor)?;
        *cursor += 1;

        trace!(
            "selected block ({}, {}) of image #{} with entropy {}",
            block.x,
            block.y,
            computed.index,
            block.entropy
        );

        Some(Selection {
            image: computed.index,
            block,
            capacity: computed.blocks.block_capacity(),
        })
    }
}

impl Iterator for Allocator<'_> {
    type Item = Selection;

    fn next(&mut self) -> Option<Self::Item> {
        self.select_next()
    }
}
