//! Loading images from files into [`Image`] and writing them back as PNG.

use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageError, ImageFormat};
use log::error;

use super::Image;
use crate::error::EbsError;
use crate::result::Result;

/// Opens any image format the `image` crate understands.
///
/// 8 bit grayscale, grayscale with alpha, RGB and RGBA are used as they are, deeper color
/// types are converted to their 8 bit counterpart.
pub fn open(file: impl AsRef<Path>) -> Result<Image> {
    let file = file.as_ref();
    let img = image::open(file).map_err(|e| {
        error!("Error opening image {file:?}: {e}");
        match e {
            ImageError::IoError(source) => EbsError::ReadError { source },
            ImageError::Unsupported(_) => EbsError::UnsupportedMedia,
            _ => EbsError::InvalidImageMedia,
        }
    })?;

    Ok(img.into())
}

/// Writes `image` as PNG, the only way to keep the hidden bits intact
pub fn save_as(img: &Image, file: impl AsRef<Path>) -> Result<()> {
    let file = file.as_ref();
    let color = color_type(img)?;
    image::save_buffer_with_format(
        file,
        &img.pixels,
        img.width as u32,
        img.height as u32,
        color,
        ImageFormat::Png,
    )
    .map_err(|e| {
        error!("Error saving image {file:?}: {e}");
        match e {
            ImageError::IoError(source) => EbsError::WriteError { source },
            _ => EbsError::ImageEncodingError,
        }
    })
}

fn color_type(img: &Image) -> Result<ColorType> {
    let fits_u32 = u32::try_from(img.width).is_ok() && u32::try_from(img.height).is_ok();
    if !img.is_valid() || !fits_u32 {
        return Err(EbsError::ImageEncodingError);
    }

    match img.channel {
        1 => Ok(ColorType::L8),
        2 => Ok(ColorType::La8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        _ => Err(EbsError::ImageEncodingError),
    }
}

impl From<DynamicImage> for Image {
    fn from(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let (channel, pixels) = match img {
            DynamicImage::ImageLuma8(buffer) => (1, buffer.into_raw()),
            DynamicImage::ImageLumaA8(buffer) => (2, buffer.into_raw()),
            DynamicImage::ImageRgb8(buffer) => (3, buffer.into_raw()),
            DynamicImage::ImageRgba8(buffer) => (4, buffer.into_raw()),
            other => {
                let color = other.color();
                match (color.has_color(), color.has_alpha()) {
                    (false, false) => (1, other.to_luma8().into_raw()),
                    (false, true) => (2, other.to_luma_alpha8().into_raw()),
                    (true, false) => (3, other.to_rgb8().into_raw()),
                    (true, true) => (4, other.to_rgba8().into_raw()),
                }
            }
        };

        Image::new(width as usize, height as usize, channel, pixels)
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayAlphaImage, ImageBuffer, Rgb, Rgba};
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{prepare_5x5_image, prepare_noise_image};

    #[test]
    fn should_take_over_rgba_pixels_as_they_are() {
        let rgba = prepare_5x5_image();
        let img = Image::from(DynamicImage::ImageRgba8(rgba.clone()));

        assert_eq!((img.width, img.height, img.channel), (5, 5, 4));
        assert_eq!(img.color(1, 0, 0), Some(rgba.get_pixel(1, 0).0[0]));
        assert_eq!(img.color(0, 2, 3), Some(rgba.get_pixel(0, 2).0[3]));
    }

    #[test]
    fn should_convert_16_bit_images_to_8_bit() {
        let deep: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_fn(3, 2, |x, y| {
            Rgb([(x * 1000) as u16, (y * 1000) as u16, u16::MAX])
        });
        let img = Image::from(DynamicImage::ImageRgb16(deep));

        assert_eq!((img.width, img.height, img.channel), (3, 2, 3));
        assert_eq!(img.pixels.len(), 18);
        assert_eq!(img.color(0, 0, 2), Some(u8::MAX));
    }

    #[test]
    fn should_save_and_open_png_without_loss() {
        let out_dir = TempDir::new().unwrap();
        for channel in 1..=4 {
            let file = out_dir.path().join(format!("noise-{channel}.png"));
            let img = prepare_noise_image(17, 9, channel, channel as u64);

            save_as(&img, &file).unwrap();
            assert_eq!(open(&file).unwrap(), img, "{channel} channels did not survive");
        }
    }

    #[test]
    fn should_keep_gray_alpha_images() {
        let gray: GrayAlphaImage =
            ImageBuffer::from_fn(4, 4, |x, y| image::LumaA([(x + y) as u8, 255]));
        let img = Image::from(DynamicImage::ImageLumaA8(gray));
        assert_eq!(img.channel, 2);
        assert_eq!(img.color(3, 3, 0), Some(6));
    }

    #[test]
    fn should_refuse_to_save_unsupported_channel_counts() {
        let out_dir = TempDir::new().unwrap();
        let img = Image::new(2, 2, 5, vec![0; 20]);
        assert!(matches!(
            save_as(&img, out_dir.path().join("five.png")),
            Err(EbsError::ImageEncodingError)
        ));
    }

    #[test]
    fn should_fail_for_non_image_files() {
        match open("Cargo.toml") {
            Err(EbsError::UnsupportedMedia) | Err(EbsError::InvalidImageMedia) => (),
            other => panic!("expected an unsupported media error, got {other:?}"),
        }
        assert!(matches!(
            open("some_random_file.png"),
            Err(EbsError::ReadError { .. })
        ));
    }

    #[test]
    fn should_accept_rgba_from_the_image_crate() {
        let rgba: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(8, 8, Rgba([1, 2, 3, 4]));
        let img: Image = DynamicImage::ImageRgba8(rgba).into();
        assert!(img.is_valid());
    }
}
