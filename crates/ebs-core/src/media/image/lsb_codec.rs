use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, LittleEndian};

use super::Image;
use crate::block_index::Block;
use crate::media::{HideBit, UnveilBit};
use crate::result::Result;

/// Hides `data` in the least significant bits of the block at `block` with the given `side`.
///
/// The block is scanned row by row with interleaved channels, each color byte takes the
/// next bit of `data`, least significant bit of every byte first. Color bytes behind the
/// last bit stay untouched.
///
/// `data` must not be longer than the block capacity (`side * side * channel / 8`).
pub fn embed_block(image: &mut Image, block: &Block, side: usize, data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    debug_assert!(data.len() * 8 <= side * side * image.channel);

    let stride = image.stride();
    let start = block.y * stride + block.x * image.channel;
    let row_len = side * image.channel;
    let mut bits = BitReader::endian(data, LittleEndian);
    let mut remaining = data.len() * 8;

    'rows: for row in image.pixels[start..].chunks_mut(stride).take(side) {
        for color in row[..row_len].iter_mut() {
            color.hide_bit(bits.read_bit()?);
            remaining -= 1;
            if remaining == 0 {
                break 'rows;
            }
        }
    }

    Ok(())
}

/// Unveils `out.len()` bytes from the block at `block`, the exact mirror of [`embed_block`].
pub fn extract_block(image: &Image, block: &Block, side: usize, out: &mut [u8]) -> Result<()> {
    if out.is_empty() {
        return Ok(());
    }
    debug_assert!(out.len() * 8 <= side * side * image.channel);

    let stride = image.stride();
    let start = block.y * stride + block.x * image.channel;
    let row_len = side * image.channel;
    let mut remaining = out.len() * 8;
    let mut bits = BitWriter::endian(&mut *out, LittleEndian);

    'rows: for row in image.pixels[start..].chunks(stride).take(side) {
        for color in row[..row_len].iter() {
            bits.write_bit(color.unveil_bit())?;
            remaining -= 1;
            if remaining == 0 {
                break 'rows;
            }
        }
    }

    Ok(())
}
