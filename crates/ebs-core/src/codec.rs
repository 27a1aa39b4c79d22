//! Hiding a message across a collection of images and unveiling it again.
//!
//! Both directions build the same [`CapacityModel`] and walk the blocks with the same
//! [`Allocator`], so they meet the blocks in identical order. The first block carries
//! the message length as a little-endian integer, the following blocks carry the message.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, warn};

use crate::allocator::Allocator;
use crate::capacity::{CapacityModel, HEADER_LEN};
use crate::error::EbsError;
use crate::media::image::{embed_block, extract_block, Image};
use crate::media::BlockSize;
use crate::message::Message;
use crate::result::Result;

/// Hides `message` in `images`, mutating their pixel buffers in place.
///
/// # Errors
/// - [`EbsError::InvalidImage`] if any image is invalid
/// - [`EbsError::Overflow`] if the message does not fit, no image is touched then
/// - [`EbsError::OutOfMemory`] if the block indices cannot be allocated
pub fn embed(images: &mut [Image], message: &[u8], block_size: BlockSize) -> Result<()> {
    let model = CapacityModel::build(images, block_size)?;
    let required = message.len() as u64;
    let available = model.usable_capacity();
    if required > available {
        return Err(EbsError::Overflow {
            required,
            available,
        });
    }

    let side = block_size.get();
    let mut allocator = Allocator::new(&model);
    let overflow = || EbsError::Overflow {
        required,
        available,
    };

    let header = allocator.select_next().ok_or_else(overflow)?;
    let mut length = [0u8; HEADER_LEN];
    LittleEndian::write_u64(&mut length, required);
    embed_block(
        &mut images[header.image],
        &header.block,
        side,
        &length[..header.capacity.min(HEADER_LEN)],
    )?;

    let mut remaining = message;
    while !remaining.is_empty() {
        let Some(selection) = allocator.select_next() else {
            warn!(
                "ran out of blocks with {} bytes left, images are partially written",
                remaining.len()
            );
            return Err(overflow());
        };
        let (chunk, rest) = remaining.split_at(selection.capacity.min(remaining.len()));
        embed_block(&mut images[selection.image], &selection.block, side, chunk)?;
        remaining = rest;
    }
    debug!(
        "hid {required} bytes in {} images, {available} bytes were available",
        images.len()
    );

    Ok(())
}

/// Unveils the message that [`embed`] hid in `images` with the same `block_size`.
///
/// The images can be passed in any order.
///
/// # Errors
/// - [`EbsError::InvalidImage`] if any image is invalid
/// - [`EbsError::InvalidMessage`] if the length header declares more than the images can
///   carry, typically a different block size or images without a secret
/// - [`EbsError::OutOfMemory`] if the block indices or the message cannot be allocated
pub fn extract(images: &[Image], block_size: BlockSize) -> Result<Message> {
    let model = CapacityModel::build(images, block_size)?;
    let available = model.usable_capacity();
    let side = block_size.get();
    let mut allocator = Allocator::new(&model);

    let header = allocator
        .select_next()
        .ok_or(EbsError::InvalidMessage {
            declared: 0,
            available,
        })?;
    let mut length = [0u8; HEADER_LEN];
    extract_block(
        &images[header.image],
        &header.block,
        side,
        &mut length[..header.capacity.min(HEADER_LEN)],
    )?;
    let declared = LittleEndian::read_u64(&length);

    let invalid = || EbsError::InvalidMessage {
        declared,
        available,
    };
    if declared > available {
        return Err(invalid());
    }
    let len = usize::try_from(declared).map_err(|_| invalid())?;

    let mut data = Vec::new();
    data.try_reserve_exact(len)?;
    data.resize(len, 0);

    let mut filled = 0;
    while filled < len {
        let selection = allocator.select_next().ok_or_else(invalid)?;
        let end = len.min(filled + selection.capacity);
        extract_block(
            &images[selection.image],
            &selection.block,
            side,
            &mut data[filled..end],
        )?;
        filled = end;
    }
    debug!("unveiled {len} bytes from {} images", images.len());

    Ok(Message::new(data))
}

/// Bytes a message may have to fit into `images` with the given `block_size`
pub fn capacity(images: &[Image], block_size: BlockSize) -> Result<u64> {
    Ok(CapacityModel::build(images, block_size)?.usable_capacity())
}
