//! # Entropy Block Steganography
//!
//! Hides a message in the least significant bits of a collection of images. Every image
//! is tiled into square blocks, the blocks are ranked by the entropy of their upper 7 bits
//! and the message flows into the noisiest blocks of all images first.
//!
//! The main entry points are
//! - [`embed`] for hiding a message in a set of [`Image`]s
//! - [`extract`] for unveiling it again, from the same images in any order
//! - [`api::hide`] and [`api::unveil`] for doing the same directly on image files
//!
//! # Usage Examples
//!
//! ## Hide and unveil data in memory
//!
//! ```rust
//! use ebs_core::{BlockSize, Image};
//!
//! let pixels = (0..64 * 64 * 3).map(|i| (i * 7 % 251) as u8).collect();
//! let mut images = vec![Image::new(64, 64, 3, pixels)];
//! let block_size = BlockSize::new(16)?;
//!
//! ebs_core::embed(&mut images, b"Hello World!", block_size)?;
//! let message = ebs_core::extract(&images, block_size)?;
//!
//! assert_eq!(message.as_bytes(), b"Hello World!");
//! # Ok::<(), ebs_core::EbsError>(())
//! ```
//!
//! ## Hide data inside image files
//!
//! ```rust,no_run
//! ebs_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("holiday-1.png")
//!     .with_image("holiday-2.jpg")
//!     .into_output_folder("secrets")
//!     .execute()
//!     .expect("Failed to hide message in images");
//! ```

#![warn(clippy::redundant_else)]

pub mod allocator;
pub mod api;
pub mod block_index;
pub mod capacity;
pub mod codec;
pub mod commands;
pub mod entropy;
pub mod error;
pub mod media;
pub mod message;
pub mod result;

pub use crate::allocator::{Allocator, Selection};
pub use crate::block_index::{Block, BlockIndex};
pub use crate::capacity::{CapacityModel, HeaderBlock, HEADER_LEN};
pub use crate::codec::{capacity, embed, extract};
pub use crate::error::EbsError;
pub use crate::media::image::Image;
pub use crate::media::{BlockSize, CodecOptions};
pub use crate::message::Message;
pub use crate::result::Result;
