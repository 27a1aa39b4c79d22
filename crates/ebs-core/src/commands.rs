use std::path::{Path, PathBuf};

use crate::media::image::io;
use crate::{codec, CodecOptions, EbsError};

pub fn hide(
    images: &[PathBuf],
    output_folder: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    options: CodecOptions,
) -> Result<(), EbsError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_images(images.to_vec())
        .into_output_folder(output_folder)
        .use_file(data_file)
        .use_message(message)
        .execute()
}

pub fn unveil(
    secret_images: &[PathBuf],
    output_file: &Path,
    options: CodecOptions,
) -> Result<(), EbsError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_files(secret_images.to_vec())
        .into_output_file(output_file)
        .execute()
}

/// bytes that can be hidden in the given images
pub fn capacity(images: &[PathBuf], options: CodecOptions) -> Result<u64, EbsError> {
    let images = images.iter().map(io::open).collect::<Result<Vec<_>, _>>()?;

    codec::capacity(&images, options.block_size)
}
